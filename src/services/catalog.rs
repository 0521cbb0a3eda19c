//! Workflows behind the dashboard and the create form.
//!
//! Every mutation follows the same discipline: no optimistic local change,
//! the snapshot is re-fetched wholesale after a successful write.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::dto::main::IndexPageData;
use crate::forms::product::{ProductForm, SaveProductForm};
use crate::repository::{CatalogReader, CatalogWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::state::CatalogState;

fn read_state(state: &RwLock<CatalogState>) -> ServiceResult<RwLockReadGuard<'_, CatalogState>> {
    state
        .read()
        .map_err(|_| ServiceError::Internal("catalog state lock poisoned".to_string()))
}

fn write_state(state: &RwLock<CatalogState>) -> ServiceResult<RwLockWriteGuard<'_, CatalogState>> {
    state
        .write()
        .map_err(|_| ServiceError::Internal("catalog state lock poisoned".to_string()))
}

/// Re-fetches the catalog and replaces the snapshot wholesale. A failed
/// fetch is logged and the previous snapshot stays in place; no error
/// reaches the user.
pub async fn refresh<R>(repo: &R, state: &RwLock<CatalogState>) -> ServiceResult<()>
where
    R: CatalogReader + ?Sized,
{
    match repo.list_products().await {
        Ok(products) => write_state(state)?.replace_products(products),
        Err(err) => log::error!("Failed to fetch products: {err}"),
    }
    Ok(())
}

/// Refreshes the snapshot and assembles the dashboard page data.
pub async fn load_index_page<R>(
    repo: &R,
    state: &RwLock<CatalogState>,
) -> ServiceResult<IndexPageData>
where
    R: CatalogReader + ?Sized,
{
    refresh(repo, state).await?;

    let state = read_state(state)?;
    Ok(IndexPageData {
        products: state.products().to_vec(),
        active_edit: state.active_edit().cloned(),
    })
}

/// Validates the create draft and submits it. Validation failure makes no
/// network call; the caller keeps the draft for redisplay.
pub async fn create_product<R>(repo: &R, draft: &ProductForm) -> ServiceResult<()>
where
    R: CatalogWriter + ?Sized,
{
    draft.validate_for_create()?;

    repo.create_product(&draft.payload()).await.map_err(|err| {
        log::error!("Failed to add a product: {err}");
        ServiceError::from(err)
    })?;

    Ok(())
}

/// Opens the edit form for the product with the given id, discarding any
/// previous unsaved draft.
pub fn begin_edit(state: &RwLock<CatalogState>, id: &str) -> ServiceResult<()> {
    let mut state = write_state(state)?;
    let product = state
        .find_product(id)
        .cloned()
        .ok_or(ServiceError::NotFound)?;
    state.begin_edit(ProductForm::edit(&product));
    Ok(())
}

/// Closes the edit form without persisting anything.
pub fn cancel_edit(state: &RwLock<CatalogState>) -> ServiceResult<()> {
    write_state(state)?.cancel_edit();
    Ok(())
}

/// Submits an edit. The payload is the full field set merged over the
/// current draft, identity included. On success the form closes and the
/// snapshot is refreshed; on failure the submitted draft stays open.
pub async fn save_product<R>(
    repo: &R,
    state: &RwLock<CatalogState>,
    form: &SaveProductForm,
) -> ServiceResult<()>
where
    R: CatalogReader + CatalogWriter + ?Sized,
{
    let mut draft = {
        let state = read_state(state)?;
        match state
            .active_edit()
            .filter(|draft| draft.id.as_deref() == Some(form.id.as_str()))
        {
            Some(draft) => draft.clone(),
            None => ProductForm::edit(state.find_product(&form.id).ok_or(ServiceError::NotFound)?),
        }
    };
    draft.apply_save(form);

    // Stash the submitted values so a failed save leaves the form open with
    // the draft intact.
    write_state(state)?.begin_edit(draft.clone());

    repo.update_product(&form.id, &draft.payload())
        .await
        .map_err(|err| {
            log::error!("Failed to update product {}: {err}", form.id);
            ServiceError::from(err)
        })?;

    write_state(state)?.cancel_edit();
    refresh(repo, state).await
}

/// Deletes a product. User confirmation happens in the view before the
/// request is posted. A transport failure is absorbed with a log line, and
/// the snapshot is refreshed regardless of the outcome.
pub async fn delete_product<R>(
    repo: &R,
    state: &RwLock<CatalogState>,
    id: &str,
) -> ServiceResult<()>
where
    R: CatalogReader + CatalogWriter + ?Sized,
{
    let deleted = repo.delete_product(id).await;
    if let Err(err) = &deleted {
        log::error!("Failed to delete product {id}: {err}");
    }

    refresh(repo, state).await?;

    deleted.map_err(ServiceError::from)
}
