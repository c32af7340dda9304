use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five canonical corpora.
///
/// The variant order is the canonical order used everywhere a corpus is
/// picked by index or listed for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corpus {
    BookOfMormon,
    DoctrineAndCovenants,
    NewTestament,
    OldTestament,
    PearlOfGreatPrice,
}

impl Corpus {
    /// All corpora, in canonical order.
    pub const ALL: [Corpus; 5] = [
        Corpus::BookOfMormon,
        Corpus::DoctrineAndCovenants,
        Corpus::NewTestament,
        Corpus::OldTestament,
        Corpus::PearlOfGreatPrice,
    ];

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Corpus::BookOfMormon => "Book of Mormon",
            Corpus::DoctrineAndCovenants => "Doctrine and Covenants",
            Corpus::NewTestament => "New Testament",
            Corpus::OldTestament => "Old Testament",
            Corpus::PearlOfGreatPrice => "Pearl of Great Price",
        }
    }

    /// Stable slug for CLI arguments and machine output.
    pub fn slug(&self) -> &'static str {
        match self {
            Corpus::BookOfMormon => "book-of-mormon",
            Corpus::DoctrineAndCovenants => "doctrine-and-covenants",
            Corpus::NewTestament => "new-testament",
            Corpus::OldTestament => "old-testament",
            Corpus::PearlOfGreatPrice => "pearl-of-great-price",
        }
    }

    /// Resolve a slug back to a corpus.
    pub fn from_slug(slug: &str) -> Option<Corpus> {
        Corpus::ALL.iter().copied().find(|c| c.slug() == slug)
    }
}

impl fmt::Display for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

// ============================================================================
// Document tree
// ============================================================================

/// One corpus document: an ordered collection of sub-books.
///
/// # JSON shape
///
/// ```json
/// {
///   "books": [
///     {
///       "book": "1 Nephi",
///       "chapters": [
///         {
///           "chapter": 1,
///           "reference": "1 Nephi 1",
///           "verses": [
///             { "reference": "1 Nephi 1:1", "verse": 1, "text": "I, Nephi..." }
///           ]
///         }
///       ]
///     }
///   ]
/// }
/// ```
///
/// Some source documents (Doctrine and Covenants) publish a single sub-book
/// at the top level instead; [`Book::from_slice`] handles both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub books: Vec<SubBook>,
}

/// A named subdivision of a corpus — a "book" within a volume.
///
/// Exactly one of `chapters` and `sections` is populated per source
/// document; [`SubBook::chapters`] returns whichever it is. Top-level
/// single-sub-book documents carry no `book` name at all, so it defaults
/// to the empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubBook {
    #[serde(default)]
    pub book: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chapters: Vec<Chapter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Chapter>,
}

/// A numbered subdivision of a sub-book.
///
/// Carries `chapter` or `section` depending on how the source labels it;
/// [`Chapter::number`] returns whichever is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<u32>,
    #[serde(default)]
    pub reference: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verses: Vec<Verse>,
}

/// The leaf unit of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub verse: u32,
    #[serde(default)]
    pub text: String,
}

// ============================================================================
// Convenience methods
// ============================================================================

impl Book {
    /// Parse a corpus document from raw JSON bytes.
    ///
    /// Decodes as a [`Book`] first; when the top level has no `books`
    /// array, re-decodes the same bytes as a single [`SubBook`] and wraps
    /// it in a one-element book. A decode failure at either stage is fatal
    /// for the document.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let book: Book = serde_json::from_slice(bytes)?;
        if !book.books.is_empty() {
            return Ok(book);
        }

        let sub: SubBook = serde_json::from_slice(bytes)?;
        Ok(Book { books: vec![sub] })
    }

    /// Parse a corpus document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Self::from_slice(json.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Sub-book at `index`, if in bounds.
    pub fn sub_book(&self, index: usize) -> Option<&SubBook> {
        self.books.get(index)
    }

    /// First sub-book with the given name.
    pub fn sub_book_named(&self, name: &str) -> Option<&SubBook> {
        self.books.iter().find(|b| b.book == name)
    }
}

impl SubBook {
    /// The chapter list, regardless of whether the source labels it
    /// `chapters` or `sections`.
    pub fn chapters(&self) -> &[Chapter] {
        if !self.chapters.is_empty() {
            &self.chapters
        } else {
            &self.sections
        }
    }

    pub fn len(&self) -> usize {
        self.chapters().len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters().is_empty()
    }

    /// Chapter at `index`, if in bounds.
    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters().get(index)
    }

    /// First chapter carrying the given chapter or section number.
    pub fn chapter_numbered(&self, number: u32) -> Option<&Chapter> {
        self.chapters().iter().find(|c| c.number() == Some(number))
    }
}

impl Chapter {
    /// The chapter or section number, whichever the source carries.
    pub fn number(&self) -> Option<u32> {
        self.chapter.or(self.section)
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Verse at `index`, if in bounds.
    pub fn verse(&self, index: usize) -> Option<&Verse> {
        self.verses.get(index)
    }

    /// First verse with the given verse number.
    pub fn verse_numbered(&self, number: u32) -> Option<&Verse> {
        self.verses.iter().find(|v| v.verse == number)
    }
}

impl fmt::Display for Verse {
    /// Two lines: the reference, then `<number>  <text>` (two spaces).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}  {}", self.reference, self.verse, self.text)
    }
}

impl fmt::Display for Chapter {
    /// The chapter reference followed by every verse.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reference)?;
        for verse in &self.verses {
            write!(f, "\n{verse}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Library
// ============================================================================

/// The five corpora, loaded once per run and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct Library {
    pub book_of_mormon: Book,
    pub doctrine_and_covenants: Book,
    pub new_testament: Book,
    pub old_testament: Book,
    pub pearl_of_great_price: Book,
}

impl Library {
    pub fn get(&self, corpus: Corpus) -> &Book {
        match corpus {
            Corpus::BookOfMormon => &self.book_of_mormon,
            Corpus::DoctrineAndCovenants => &self.doctrine_and_covenants,
            Corpus::NewTestament => &self.new_testament,
            Corpus::OldTestament => &self.old_testament,
            Corpus::PearlOfGreatPrice => &self.pearl_of_great_price,
        }
    }

    pub fn set(&mut self, corpus: Corpus, book: Book) {
        match corpus {
            Corpus::BookOfMormon => self.book_of_mormon = book,
            Corpus::DoctrineAndCovenants => self.doctrine_and_covenants = book,
            Corpus::NewTestament => self.new_testament = book,
            Corpus::OldTestament => self.old_testament = book,
            Corpus::PearlOfGreatPrice => self.pearl_of_great_price = book,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MULTI_BOOK: &str = r#"{
        "books": [
            {
                "book": "1 Nephi",
                "chapters": [
                    {
                        "chapter": 1,
                        "reference": "1 Nephi 1",
                        "verses": [
                            { "reference": "1 Nephi 1:1", "verse": 1, "text": "I, Nephi..." },
                            { "reference": "1 Nephi 1:2", "verse": 2, "text": "Yea, I make a record..." }
                        ]
                    }
                ]
            },
            {
                "book": "2 Nephi",
                "chapters": [
                    {
                        "chapter": 1,
                        "reference": "2 Nephi 1",
                        "verses": [
                            { "reference": "2 Nephi 1:1", "verse": 1, "text": "And now it came to pass..." }
                        ]
                    }
                ]
            }
        ]
    }"#;

    const SECTIONS_ONLY: &str = r#"{
        "sections": [
            {
                "section": 1,
                "reference": "D&C 1",
                "verses": [
                    { "reference": "D&C 1:1", "verse": 1, "text": "Hearken, O ye people..." }
                ]
            },
            {
                "section": 2,
                "reference": "D&C 2",
                "verses": [
                    { "reference": "D&C 2:1", "verse": 1, "text": "Behold, I will reveal..." }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_multi_book() {
        let book = Book::from_json(MULTI_BOOK).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.books[0].book, "1 Nephi");
        assert_eq!(book.books[1].book, "2 Nephi");
    }

    #[test]
    fn test_parse_single_sub_book_fallback() {
        let book = Book::from_json(SECTIONS_ONLY).unwrap();
        assert_eq!(book.len(), 1);

        let sub = book.sub_book(0).unwrap();
        assert!(sub.book.is_empty());
        assert_eq!(sub.len(), 2);
        assert_eq!(sub.chapters()[0].number(), Some(1));
        assert_eq!(sub.chapters()[1].reference, "D&C 2");
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(Book::from_json("{\"books\": [").is_err());
        assert!(Book::from_slice(b"not json at all").is_err());
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        // Real source documents carry title/subtitle/version alongside books.
        let json = r#"{"title": "The Book of Mormon", "version": 3, "books": [{"book": "Enos", "chapters": []}]}"#;
        let book = Book::from_json(json).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.books[0].book, "Enos");
    }

    #[test]
    fn test_sub_book_accessors() {
        let book = Book::from_json(MULTI_BOOK).unwrap();

        assert_eq!(book.sub_book(0).unwrap().book, "1 Nephi");
        assert!(book.sub_book(2).is_none());

        assert_eq!(book.sub_book_named("2 Nephi").unwrap().book, "2 Nephi");
        assert!(book.sub_book_named("3 Nephi").is_none());
    }

    #[test]
    fn test_chapter_accessors() {
        let book = Book::from_json(MULTI_BOOK).unwrap();
        let sub = book.sub_book_named("1 Nephi").unwrap();

        assert_eq!(sub.chapter(0).unwrap().reference, "1 Nephi 1");
        assert!(sub.chapter(1).is_none());

        assert_eq!(sub.chapter_numbered(1).unwrap().reference, "1 Nephi 1");
        assert!(sub.chapter_numbered(99).is_none());
    }

    #[test]
    fn test_verse_accessors() {
        let book = Book::from_json(MULTI_BOOK).unwrap();
        let chapter = book.sub_book(0).unwrap().chapter(0).unwrap();

        assert_eq!(chapter.verse(1).unwrap().verse, 2);
        assert!(chapter.verse(2).is_none());

        assert_eq!(chapter.verse_numbered(1).unwrap().text, "I, Nephi...");
        assert!(chapter.verse_numbered(3).is_none());
    }

    #[test]
    fn test_numeric_lookup_first_match_wins() {
        let json = r#"{
            "books": [{
                "book": "Odd",
                "chapters": [
                    { "chapter": 7, "reference": "Odd 7 (first)", "verses": [] },
                    { "chapter": 7, "reference": "Odd 7 (second)", "verses": [] }
                ]
            }]
        }"#;
        let book = Book::from_json(json).unwrap();
        let sub = book.sub_book(0).unwrap();
        assert_eq!(sub.chapter_numbered(7).unwrap().reference, "Odd 7 (first)");
    }

    #[test]
    fn test_verse_display() {
        let verse = Verse {
            reference: "1 Nephi 1:1".into(),
            verse: 1,
            text: "I, Nephi...".into(),
        };
        assert_eq!(verse.to_string(), "1 Nephi 1:1\n1  I, Nephi...");
    }

    #[test]
    fn test_chapter_display() {
        let book = Book::from_json(MULTI_BOOK).unwrap();
        let chapter = book.sub_book(0).unwrap().chapter(0).unwrap();
        assert_eq!(
            chapter.to_string(),
            "1 Nephi 1\n1 Nephi 1:1\n1  I, Nephi...\n1 Nephi 1:2\n2  Yea, I make a record..."
        );
    }

    #[test]
    fn test_corpus_slug_roundtrip() {
        for corpus in Corpus::ALL {
            assert_eq!(Corpus::from_slug(corpus.slug()), Some(corpus));
        }
        assert_eq!(Corpus::from_slug("apocrypha"), None);
    }

    #[test]
    fn test_corpus_display() {
        assert_eq!(Corpus::BookOfMormon.to_string(), "Book of Mormon");
        assert_eq!(
            Corpus::DoctrineAndCovenants.to_string(),
            "Doctrine and Covenants"
        );
    }

    #[test]
    fn test_library_get_set() {
        let mut library = Library::default();
        assert!(library.get(Corpus::NewTestament).is_empty());

        library.set(Corpus::NewTestament, Book::from_json(MULTI_BOOK).unwrap());
        assert_eq!(library.get(Corpus::NewTestament).len(), 2);
        assert!(library.get(Corpus::OldTestament).is_empty());
    }

    #[test]
    fn test_book_serde_roundtrip() {
        let book = Book::from_json(MULTI_BOOK).unwrap();
        let json = serde_json::to_string(&book).unwrap();
        let back = Book::from_json(&json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(
            back.sub_book(0).unwrap().chapter(0).unwrap().verses.len(),
            2
        );
    }
}
