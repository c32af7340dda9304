use anyhow::Result;
use versicle_store::{CacheResolver, SOURCES};

pub fn run(json: bool) -> Result<()> {
    let resolver = CacheResolver::new();

    if json {
        let items: Vec<serde_json::Value> = SOURCES
            .iter()
            .map(|s| {
                serde_json::json!({
                    "corpus": s.corpus.slug(),
                    "title": s.corpus.title(),
                    "url": s.url,
                    "cached": resolver.is_cached(s.url),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for s in &SOURCES {
            let status = if resolver.is_cached(s.url) {
                "cached"
            } else {
                "not cached"
            };
            println!("{:<24} {:<12} {}", s.corpus.title(), status, s.url);
        }
    }

    Ok(())
}
