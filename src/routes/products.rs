use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};
use validator::Validate;

use crate::forms::FormError;
use crate::forms::product::{AddProductForm, ProductForm};
use crate::models::config::ServerConfig;
use crate::repository::remote::RemoteCatalog;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, catalog as catalog_service};

fn render_add_form(
    tera: &Tera,
    server_config: &ServerConfig,
    mut context: Context,
    form: &ProductForm,
) -> HttpResponse {
    context.insert("form", form);
    context.insert("img_text", &form.img.join("\n"));
    context.insert("upload_endpoint", &server_config.upload_endpoint);
    render_template(tera, "products/add.html", &context)
}

/// Context for re-rendering the form with the submitted draft and an inline
/// notice, bypassing the flash cookie round trip.
fn add_form_error_context(notice: &str) -> Context {
    let alerts = vec![(notice, "danger")];
    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", "add_product");
    context
}

#[get("/products/add")]
/// Shows the create-product form with default values.
pub async fn show_add_product(
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_add_form(
        &tera,
        &server_config,
        base_context(&flash_messages, "add_product"),
        &ProductForm::default(),
    )
}

#[post("/products/add")]
/// Creates a product. Any failure re-renders the form with the submitted
/// draft so nothing typed is lost.
pub async fn add_product(
    repo: web::Data<RemoteCatalog>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<AddProductForm>,
) -> impl Responder {
    let draft = ProductForm::from(&form);

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return render_add_form(
            &tera,
            &server_config,
            add_form_error_context("Form validation error."),
            &draft,
        );
    }

    match catalog_service::create_product(repo.get_ref(), &draft).await {
        Ok(()) => {
            FlashMessage::success("Product added successfully!").send();
            redirect("/")
        }
        Err(ServiceError::Form(FormError::NoImages)) => render_add_form(
            &tera,
            &server_config,
            add_form_error_context("Please choose at least 1 image."),
            &draft,
        ),
        Err(ServiceError::Form(_)) => render_add_form(
            &tera,
            &server_config,
            add_form_error_context("Form validation error."),
            &draft,
        ),
        Err(_) => render_add_form(
            &tera,
            &server_config,
            add_form_error_context("Failed to add product."),
            &draft,
        ),
    }
}
