//! URL-keyed response cache over blocking HTTP.
//!
//! Stores one file per distinct request URL, named by the SHA-512 hex digest
//! of the URL, containing the verbatim response body. A present file is
//! served unchanged with no revalidation or expiry; a miss downloads the
//! body and stores it before returning. Nothing is stored on failure.

use crate::config;
use crate::error::Result;
use reqwest::blocking::Client;
use sha2::{Digest, Sha512};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Sent with every request. Scryfall rejects anonymous clients.
const USER_AGENT: &str = concat!("cube-overview/", env!("CARGO_PKG_VERSION"));

/// On-disk cache of HTTP GET response bodies, keyed by URL.
pub struct ResponseCache {
    /// Directory where cached response bodies are stored.
    pub cache_dir: PathBuf,
    timeout: Duration,
    client: Option<Client>,
}

impl ResponseCache {
    /// Create a new response cache.
    ///
    /// If `cache_dir` is `None`, uses the platform-appropriate default cache
    /// directory. Creates the cache directory if it does not exist.
    pub fn new(cache_dir: Option<PathBuf>, timeout: Duration) -> Result<Self> {
        let dir = cache_dir.unwrap_or_else(config::default_cache_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            cache_dir: dir,
            timeout,
            client: None,
        })
    }

    /// Lazy HTTP client, created on first network use.
    fn client(&mut self) -> &Client {
        if self.client.is_none() {
            self.client = Some(
                Client::builder()
                    .timeout(self.timeout)
                    .redirect(reqwest::redirect::Policy::limited(10))
                    .user_agent(USER_AGENT)
                    .build()
                    .expect("failed to build HTTP client"),
            );
        }
        self.client.as_ref().unwrap()
    }

    /// Return the response body for `url`, from cache when present,
    /// downloading and storing it otherwise.
    pub fn fetch(&mut self, url: &str) -> Result<String> {
        let path = self.file_for_url(url);
        if path.exists() {
            log::debug!("cache hit for {}", url);
            return Ok(fs::read_to_string(&path)?);
        }

        log::info!("cache miss, fetching {}", url);
        let client = self.client().clone();
        let body = client.get(url).send()?.error_for_status()?.text()?;
        fs::write(&path, &body)?;
        Ok(body)
    }

    /// Cache file path for a URL: SHA-512 hex digest of the URL string.
    fn file_for_url(&self, url: &str) -> PathBuf {
        let digest = Sha512::digest(url.as_bytes());
        let name: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
        self.cache_dir.join(name)
    }

    /// Remove all cached responses and recreate the cache directory.
    pub fn clear(&self) -> Result<()> {
        if self.cache_dir.exists() {
            fs::remove_dir_all(&self.cache_dir)?;
            fs::create_dir_all(&self.cache_dir)?;
        }
        Ok(())
    }
}
