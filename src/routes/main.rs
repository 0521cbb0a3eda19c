use std::sync::RwLock;

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;
use validator::Validate;

use crate::forms::product::SaveProductForm;
use crate::models::config::ServerConfig;
use crate::repository::remote::RemoteCatalog;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, catalog as catalog_service};
use crate::state::CatalogState;

#[get("/")]
/// Dashboard: product table plus the edit overlay when a product is being
/// edited. Every render re-fetches the catalog.
pub async fn show_index(
    repo: web::Data<RemoteCatalog>,
    state: web::Data<RwLock<CatalogState>>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match catalog_service::load_index_page(repo.get_ref(), state.get_ref()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "index");
            context.insert("products", &data.products);
            context.insert("active_edit", &data.active_edit);
            let img_text = data
                .active_edit
                .as_ref()
                .map(|draft| draft.img.join("\n"))
                .unwrap_or_default();
            context.insert("img_text", &img_text);
            context.insert("upload_endpoint", &server_config.upload_endpoint);

            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the dashboard: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/product/{id}/edit")]
/// Opens the edit overlay for the given product. A previous unsaved draft
/// is discarded silently.
pub async fn begin_edit_product(
    id: web::Path<String>,
    state: web::Data<RwLock<CatalogState>>,
) -> impl Responder {
    match catalog_service::begin_edit(state.get_ref(), &id.into_inner()) {
        Ok(()) => {}
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Product not found.").send();
        }
        Err(err) => {
            log::error!("Failed to open the edit form: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }
    redirect("/")
}

#[post("/product/edit/cancel")]
/// Closes the edit overlay without persisting anything.
pub async fn cancel_edit_product(state: web::Data<RwLock<CatalogState>>) -> impl Responder {
    if let Err(err) = catalog_service::cancel_edit(state.get_ref()) {
        log::error!("Failed to close the edit form: {err}");
        return HttpResponse::InternalServerError().finish();
    }
    redirect("/")
}

#[post("/product/save")]
/// Submits the edit overlay. The backend receives the full field set; on
/// failure the form stays open with the submitted draft.
pub async fn save_product(
    repo: web::Data<RemoteCatalog>,
    state: web::Data<RwLock<CatalogState>>,
    web::Form(form): web::Form<SaveProductForm>,
) -> impl Responder {
    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        FlashMessage::error("Form validation error.").send();
        return redirect("/");
    }

    match catalog_service::save_product(repo.get_ref(), state.get_ref(), &form).await {
        Ok(()) => {
            FlashMessage::success("Product updated successfully.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Product not found.").send();
        }
        // Update failures are deliberately silent beyond the diagnostic
        // already logged by the service.
        Err(_) => {}
    }

    redirect("/")
}

#[post("/product/{id}/delete")]
/// Deletes a product. The view gates this behind a blocking confirm dialog;
/// the snapshot is refreshed regardless of the delete outcome.
pub async fn delete_product(
    id: web::Path<String>,
    repo: web::Data<RemoteCatalog>,
    state: web::Data<RwLock<CatalogState>>,
) -> impl Responder {
    match catalog_service::delete_product(repo.get_ref(), state.get_ref(), &id.into_inner()).await {
        Ok(()) => {
            FlashMessage::success("Product deleted successfully.").send();
        }
        // Delete failures stay silent; the diagnostic is logged by the
        // service and the list has already been refreshed.
        Err(_) => {}
    }

    redirect("/")
}
