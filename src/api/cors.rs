//! Cross-origin policy for the dashboard frontend.

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::Config;
use crate::error::Result;

/// Build the CORS layer from the configured origin allow-list.
///
/// Credentials are allowed, so methods and headers are mirrored from the
/// preflight request instead of using a wildcard.
pub fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let origins = config.cors_origins()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
