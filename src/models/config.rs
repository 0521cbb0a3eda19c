//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the backend that owns the product catalog.
    pub api_base_url: String,
    /// Endpoint the browser-side upload widget posts files to.
    pub upload_endpoint: String,
    pub templates_dir: String,
    pub secret: String,
}
