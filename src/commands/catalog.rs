//! Catalog Commands
//!
//! Fetches the character page from the public API.

use gloo_net::http::Request;

use crate::models::CharacterPage;
use shop_domain::CatalogError;

/// GET the character page at `api_url`
pub async fn fetch_characters(api_url: &str) -> Result<CharacterPage, CatalogError> {
    let response = Request::get(api_url)
        .send()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }

    let page: CharacterPage = response
        .json()
        .await
        .map_err(|e| CatalogError::Decode(e.to_string()))?;

    if let Some(info) = &page.info {
        log::debug!(
            "character page: {} results, {} total across {} pages",
            page.results.len(),
            info.count,
            info.pages
        );
    }
    Ok(page)
}
