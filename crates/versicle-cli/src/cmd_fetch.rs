use anyhow::{Context, Result};
use versicle_store::{SOURCES, Store};

pub fn run(force: bool) -> Result<()> {
    let store = Store::new();

    for source in &SOURCES {
        if force
            && let Ok(path) = store.resolver().cache_file(source.url)
            && path.exists()
        {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }

        let cached = store.resolver().is_cached(source.url);

        // Parse as well as fetch: a document that does not parse fails
        // here, not on the next `random`.
        store
            .load_book(source.url)
            .with_context(|| format!("Failed to load {}", source.corpus.title()))?;

        println!(
            "{:<24} {}",
            source.corpus.title(),
            if cached { "already cached" } else { "fetched" }
        );
    }

    Ok(())
}
