use serde::{Deserialize, Serialize};

/// Default value for both background and font colors.
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Upper bound on the number of hosted images per product.
pub const MAX_IMAGES: usize = 12;

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// A catalog entity as served by the backend. The `id` is assigned by the
/// backend and opaque to this application.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Rich text stored as an HTML string; not validated structurally.
    #[serde(default)]
    pub description: String,
    /// Ordered image URLs; the first one is the listing thumbnail.
    #[serde(default)]
    pub img: Vec<String>,
    #[serde(default = "default_color")]
    pub colorback: String,
    #[serde(default = "default_color")]
    pub colorback2: String,
}

impl Product {
    /// Returns the listing thumbnail URL, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.img
            .first()
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }
}

/// The full editable field set sent to the backend on create and update.
///
/// `id` is omitted from the JSON body on create and present on update, so an
/// update body equals the stored entity with the edited fields replaced.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub img: Vec<String>,
    pub colorback: String,
    pub colorback2: String,
}
