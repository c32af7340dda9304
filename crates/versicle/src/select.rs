//! Uniform random verse selection over a [`Library`].

use crate::types::{Corpus, Library, Verse};
use rand::Rng;
use thiserror::Error;

/// Selection reached a level with nothing to pick from.
///
/// Each variant names the entity that turned out to be empty, so a
/// diagnostic can say which corpus (or which book, or which chapter) is
/// the problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmptyCorpus {
    #[error("{0} has no books")]
    NoSubBooks(String),

    #[error("{0} has no chapters")]
    NoChapters(String),

    #[error("{0} has no verses")]
    NoVerses(String),
}

/// Pick one uniformly random verse from the library.
///
/// Selection is uniform at each level independently: one of the five
/// corpora, then a sub-book index, then a chapter index, then a verse
/// index. The generator is passed in so callers control seeding — the CLI
/// hands in `rand::rng()`, tests a seeded `StdRng`.
///
/// An empty sequence at any level is an error, never a re-roll.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use versicle::{Book, Corpus, Library, select};
///
/// let mut library = Library::default();
/// for corpus in Corpus::ALL {
///     let book = Book::from_json(
///         r#"{"books":[{"book":"Enos","chapters":[{"chapter":1,
///             "reference":"Enos 1","verses":[{"reference":"Enos 1:1",
///             "verse":1,"text":"Behold..."}]}]}]}"#,
///     )
///     .unwrap();
///     library.set(corpus, book);
/// }
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let verse = select::random_verse(&library, &mut rng).unwrap();
/// assert_eq!(verse.reference, "Enos 1:1");
/// ```
pub fn random_verse<'a, R: Rng + ?Sized>(
    library: &'a Library,
    rng: &mut R,
) -> Result<&'a Verse, EmptyCorpus> {
    let corpus = Corpus::ALL[rng.random_range(0..Corpus::ALL.len())];
    let book = library.get(corpus);

    if book.is_empty() {
        return Err(EmptyCorpus::NoSubBooks(corpus.title().to_string()));
    }
    let sub = &book.books[rng.random_range(0..book.len())];

    // Single-sub-book documents have no book name of their own.
    let sub_name = if sub.book.is_empty() {
        corpus.title().to_string()
    } else {
        sub.book.clone()
    };

    let chapters = sub.chapters();
    if chapters.is_empty() {
        return Err(EmptyCorpus::NoChapters(sub_name));
    }
    let chapter = &chapters[rng.random_range(0..chapters.len())];

    if chapter.verses.is_empty() {
        return Err(EmptyCorpus::NoVerses(chapter.reference.clone()));
    }
    Ok(&chapter.verses[rng.random_range(0..chapter.verses.len())])
}
