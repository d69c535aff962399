use reqwest::Client;
use tracing::{info, warn};

use crate::error::Result;

/// Raw outcome of a single GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues one GET per call with a default-configured client.
///
/// No custom headers, no timeout override and the client's default
/// redirect policy. Nothing is retried.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Fetches `url` as given. The URL is not validated up front, so an
    /// empty or malformed value fails inside the request builder.
    ///
    /// Non-success statuses still return the body.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        info!("Fetching HTML from URL: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        let page = FetchedPage { status, body };

        if page.is_success() {
            info!("Fetched {} bytes from {} ({})", page.body.len(), url, status);
        } else {
            warn!("Non-success status {} from {}, analyzing body anyway", status, url);
        }

        Ok(page)
    }
}
