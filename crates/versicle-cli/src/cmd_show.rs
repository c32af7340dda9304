use anyhow::{Context, Result, anyhow};
use versicle::{Corpus, SubBook};
use versicle_store::{Store, sources};

pub fn run(corpus: &str, book: Option<&str>, chapter: u32, verse: Option<u32>) -> Result<()> {
    let corpus = Corpus::from_slug(corpus).ok_or_else(|| {
        anyhow!(
            "Unknown corpus: {corpus} (expected one of: {})",
            Corpus::ALL
                .iter()
                .map(|c| c.slug())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;

    let doc = Store::new()
        .load_book(sources::url_for(corpus))
        .with_context(|| format!("Failed to load {corpus}"))?;

    let sub: &SubBook = match book {
        Some(name) => doc
            .sub_book_named(name)
            .ok_or_else(|| anyhow!("No book named {name:?} in {corpus}"))?,
        None => doc
            .sub_book(0)
            .ok_or_else(|| anyhow!("{corpus} has no books"))?,
    };

    let sub_name = if sub.book.is_empty() {
        corpus.title()
    } else {
        sub.book.as_str()
    };
    let chap = sub
        .chapter_numbered(chapter)
        .ok_or_else(|| anyhow!("No chapter {chapter} in {sub_name}"))?;

    match verse {
        Some(number) => {
            let v = chap
                .verse_numbered(number)
                .ok_or_else(|| anyhow!("No verse {number} in {}", chap.reference))?;
            println!("{v}");
        }
        None => println!("{chap}"),
    }

    Ok(())
}
