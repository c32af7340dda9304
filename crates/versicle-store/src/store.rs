use crate::error::{Result, StoreError};
use crate::fetch::{Fetch, HttpFetcher};
use crate::paths::CacheResolver;
use crate::sources::SOURCES;
use std::fs;
use std::path::Path;
use versicle::{Book, Library};

/// Cache-or-fetch access to the corpus documents.
#[derive(Debug, Clone)]
pub struct Store<F = HttpFetcher> {
    resolver: CacheResolver,
    fetcher: F,
}

impl Store<HttpFetcher> {
    pub fn new() -> Self {
        Self {
            resolver: CacheResolver::new(),
            fetcher: HttpFetcher::new(),
        }
    }

    pub fn with_resolver(resolver: CacheResolver) -> Self {
        Self {
            resolver,
            fetcher: HttpFetcher::new(),
        }
    }
}

impl Default for Store<HttpFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Fetch> Store<F> {
    /// Build a store from parts; tests use this to inject a fake fetcher.
    pub fn with_parts(resolver: CacheResolver, fetcher: F) -> Self {
        Self { resolver, fetcher }
    }

    pub fn resolver(&self) -> &CacheResolver {
        &self.resolver
    }

    /// Raw document bytes for `url`.
    ///
    /// Returns the cached copy when one is readable — a cached document is
    /// never revalidated against the remote. Otherwise performs one fetch
    /// and writes the result back to the cache; a failed cache write is a
    /// warning, not an error, and the fetched bytes are still returned.
    pub fn obtain(&self, url: &str) -> Result<Vec<u8>> {
        let path = self.resolver.cache_file(url)?;
        if let Ok(content) = fs::read(&path) {
            return Ok(content);
        }

        let content = self.fetcher.fetch(url)?;

        if let Err(e) = write_cache(&path, &content) {
            eprintln!(
                "Warning: failed to write cache file {}: {}",
                path.display(),
                e
            );
        }

        Ok(content)
    }

    /// Obtain and parse one corpus document.
    pub fn load_book(&self, url: &str) -> Result<Book> {
        let bytes = self.obtain(url)?;
        Ok(Book::from_slice(&bytes)?)
    }

    /// Load all five corpora, sequentially and fail-fast: the first
    /// failure aborts the load with the corpus name attached. No partial
    /// libraries, no silent empty substitutes.
    pub fn load_library(&self) -> Result<Library> {
        let mut library = Library::default();

        for source in &SOURCES {
            let book = self
                .load_book(source.url)
                .map_err(|e| StoreError::Load {
                    corpus: source.corpus.title(),
                    source: Box::new(e),
                })?;
            library.set(source.corpus, book);
        }

        Ok(library)
    }
}

fn write_cache(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, content)?;
    Ok(())
}
