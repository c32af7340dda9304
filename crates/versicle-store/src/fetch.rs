use crate::error::{Result, StoreError};

/// Transport seam for [`Store`](crate::Store).
///
/// Production code uses [`HttpFetcher`]; tests substitute a canned fetcher
/// to count network calls and simulate failures.
pub trait Fetch {
    /// Perform a single GET and return the response body.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking reqwest-backed fetcher.
///
/// One GET per call, the client's default timeout, redirects followed,
/// no retry. A non-2xx status is an error carrying the URL.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| StoreError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().map_err(|source| StoreError::Fetch {
            url: url.to_string(),
            source,
        })?;
        Ok(bytes.to_vec())
    }
}
