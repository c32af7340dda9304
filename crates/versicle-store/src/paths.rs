use crate::error::{Result, StoreError};
use std::env;
use std::path::{Path, PathBuf};

/// Directory name under the home directory where fetched corpora live.
pub const CACHE_DIR_NAME: &str = ".scripture";

/// Resolves where a fetched corpus document is cached on disk.
///
/// The default location is `~/.scripture/<basename-of-url-path>`; both the
/// home directory and the cache directory can be overridden, which tests
/// use to point at a temp dir.
#[derive(Debug, Clone)]
pub struct CacheResolver {
    home_dir: Option<PathBuf>,
    cache_dir: Option<PathBuf>,
}

impl Default for CacheResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheResolver {
    pub fn new() -> Self {
        Self {
            home_dir: dirs::home_dir(),
            cache_dir: None,
        }
    }

    pub fn with_home<P: Into<PathBuf>>(mut self, home: P) -> Self {
        self.home_dir = Some(home.into());
        self
    }

    pub fn with_cache_dir<P: Into<PathBuf>>(mut self, cache_dir: P) -> Self {
        self.cache_dir = Some(cache_dir.into());
        self
    }

    pub fn home_dir(&self) -> Result<&Path> {
        self.home_dir.as_deref().ok_or(StoreError::NoHomeDirectory)
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        if let Some(ref cache_dir) = self.cache_dir {
            return Ok(cache_dir.clone());
        }

        Ok(self.home_dir()?.join(CACHE_DIR_NAME))
    }

    /// Cache file for a URL: its final path segment under the cache dir.
    pub fn cache_file(&self, url: &str) -> Result<PathBuf> {
        let name =
            url_basename(url).ok_or_else(|| StoreError::CacheName(url.to_string()))?;
        Ok(self.cache_dir()?.join(name))
    }

    pub fn is_cached(&self, url: &str) -> bool {
        self.cache_file(url).map(|p| p.exists()).unwrap_or(false)
    }
}

/// Final path segment of a URL, ignoring query and fragment.
fn url_basename(url: &str) -> Option<String> {
    let parsed = reqwest::Url::parse(url).ok()?;
    let name = parsed.path_segments()?.next_back()?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

mod dirs {
    use super::*;

    pub fn home_dir() -> Option<PathBuf> {
        env::var_os("HOME")
            .or_else(|| env::var_os("USERPROFILE"))
            .map(PathBuf::from)
    }
}
