use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::product::{DEFAULT_COLOR, Product, ProductPayload};
use crate::forms::FormError;

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Splits the hidden `img` form field (one hosted URL per line, as written
/// by the upload widget) into a list of URLs.
fn split_image_urls(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Empty color inputs fall back to the default color.
fn normalize_color(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default_color()
    } else {
        trimmed.to_string()
    }
}

#[derive(Deserialize, Validate)]
/// Form data posted by the create-product page.
pub struct AddProductForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    /// One hosted image URL per line.
    #[serde(default)]
    pub img: String,
    #[serde(default = "default_color")]
    pub colorback: String,
    #[serde(default = "default_color")]
    pub colorback2: String,
}

#[derive(Deserialize, Validate)]
/// Form data posted by the edit overlay on the dashboard.
pub struct SaveProductForm {
    /// Identifier of the product being edited.
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    /// One hosted image URL per line.
    #[serde(default)]
    pub img: String,
    #[serde(default = "default_color")]
    pub colorback: String,
    #[serde(default = "default_color")]
    pub colorback2: String,
}

/// Draft state for exactly one product, new (`id` unset) or existing.
///
/// Holds the editable field set between render and submit and produces the
/// full payload sent to the backend. A submission never carries a subset of
/// the fields.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ProductForm {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub img: Vec<String>,
    pub colorback: String,
    pub colorback2: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            subtitle: String::new(),
            description: String::new(),
            img: Vec::new(),
            colorback: default_color(),
            colorback2: default_color(),
        }
    }
}

impl ProductForm {
    /// Builds an edit draft from an existing product, filling defaults for
    /// empty optional fields.
    #[must_use]
    pub fn edit(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            title: product.title.clone(),
            subtitle: product.subtitle.clone(),
            description: product.description.clone(),
            img: product.img.clone(),
            colorback: normalize_color(&product.colorback),
            colorback2: normalize_color(&product.colorback2),
        }
    }

    /// Replaces the image list. An empty batch from the upload collaborator
    /// is ignored and the last good value is retained.
    pub fn set_images(&mut self, urls: Vec<String>) {
        if !urls.is_empty() {
            self.img = urls;
        }
    }

    /// Local preconditions for a create submission. Title emptiness is also
    /// enforced by the `required` input control; this is the backstop.
    pub fn validate_for_create(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::MissingTitle);
        }
        if !self.img.iter().any(|url| !url.trim().is_empty()) {
            return Err(FormError::NoImages);
        }
        Ok(())
    }

    /// Applies a submitted edit form over this draft. Identity and every
    /// editable field are carried; images keep the previous value when the
    /// submitted batch is empty.
    pub fn apply_save(&mut self, form: &SaveProductForm) {
        self.id = Some(form.id.clone());
        self.title = form.title.clone();
        self.subtitle = form.subtitle.clone();
        self.description = form.description.clone();
        self.colorback = normalize_color(&form.colorback);
        self.colorback2 = normalize_color(&form.colorback2);
        self.set_images(split_image_urls(&form.img));
    }

    /// The full field set for submission, including `id` in edit mode.
    #[must_use]
    pub fn payload(&self) -> ProductPayload {
        ProductPayload {
            id: self.id.clone(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            description: self.description.clone(),
            img: self.img.clone(),
            colorback: self.colorback.clone(),
            colorback2: self.colorback2.clone(),
        }
    }
}

impl From<&AddProductForm> for ProductForm {
    fn from(form: &AddProductForm) -> Self {
        let mut draft = Self {
            id: None,
            title: form.title.clone(),
            subtitle: form.subtitle.clone(),
            description: form.description.clone(),
            img: Vec::new(),
            colorback: normalize_color(&form.colorback),
            colorback2: normalize_color(&form.colorback2),
        };
        draft.set_images(split_image_urls(&form.img));
        draft
    }
}
