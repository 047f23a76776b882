use log::{debug, warn};
use reqwest::{StatusCode, Url};

use crate::clients::{
    entities::{ArtistId, ArtistLookup, ArtistRecord, CatalogResponse},
    errors::{Error, Result},
};
use crate::config::ConfigBuilder;

/// Client for the ubeat catalog API.
///
/// Every lookup issues exactly one GET request; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/');
        let parsed = Url::parse(base_url).map_err(|e| {
            Error::ConfigurationError(format!("Invalid catalog base URL {base_url:?}: {e}"))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::ConfigurationError(format!(
                "Catalog base URL must be http or https, got {base_url:?}"
            )));
        }
        Ok(CatalogClient {
            http,
            base_url: base_url.to_string(),
        })
    }

    // Create a CatalogClient from environment variables or defaults
    pub fn try_default() -> Result<Self> {
        Ok(ConfigBuilder::new().build()?.catalog)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // The identifier is appended as-is, callers own any encoding
    pub fn artist_url(&self, artist_id: &ArtistId) -> String {
        format!("{}/artists/{}", self.base_url, artist_id)
    }

    pub async fn lookup_artist(&self, artist_id: &ArtistId) -> Result<ArtistLookup> {
        let url = self.artist_url(artist_id);
        debug!("Fetching artist {artist_id} from {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("Catalog returned 404 for artist {artist_id}");
            return Ok(ArtistLookup::NotFound);
        }
        if !status.is_success() {
            warn!("Catalog returned {status} for {url}");
            return Err(Error::UnexpectedStatus { url, status });
        }

        let body = response.bytes().await?;
        let catalog_response = CatalogResponse::from_body(&body).inspect_err(|e| {
            warn!("Unusable catalog response for artist {artist_id}: {e}");
        })?;
        debug!(
            "Catalog returned {} results for artist {artist_id}",
            catalog_response.len()
        );
        catalog_response.into_first()
    }

    pub async fn get_artist(&self, artist_id: &ArtistId) -> Result<ArtistRecord> {
        match self.lookup_artist(artist_id).await? {
            ArtistLookup::Found(record) => Ok(record),
            ArtistLookup::NotFound => Err(Error::ArtistNotFound(artist_id.to_string())),
        }
    }
}
