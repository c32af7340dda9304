//! The five canonical corpus documents, as published by the bcbooks
//! scriptures-json project.

use versicle::Corpus;

pub const BOOK_OF_MORMON_URL: &str =
    "https://github.com/bcbooks/scriptures-json/raw/master/book-of-mormon.json";
pub const DOCTRINE_AND_COVENANTS_URL: &str =
    "https://github.com/bcbooks/scriptures-json/raw/master/doctrine-and-covenants.json";
pub const NEW_TESTAMENT_URL: &str =
    "https://github.com/bcbooks/scriptures-json/raw/master/new-testament.json";
pub const OLD_TESTAMENT_URL: &str =
    "https://github.com/bcbooks/scriptures-json/raw/master/old-testament.json";
pub const PEARL_OF_GREAT_PRICE_URL: &str =
    "https://github.com/bcbooks/scriptures-json/raw/master/pearl-of-great-price.json";

/// A named remote corpus document.
#[derive(Debug, Clone, Copy)]
pub struct Source {
    pub corpus: Corpus,
    pub url: &'static str,
}

/// All five sources, in the canonical [`Corpus::ALL`] order.
pub const SOURCES: [Source; 5] = [
    Source {
        corpus: Corpus::BookOfMormon,
        url: BOOK_OF_MORMON_URL,
    },
    Source {
        corpus: Corpus::DoctrineAndCovenants,
        url: DOCTRINE_AND_COVENANTS_URL,
    },
    Source {
        corpus: Corpus::NewTestament,
        url: NEW_TESTAMENT_URL,
    },
    Source {
        corpus: Corpus::OldTestament,
        url: OLD_TESTAMENT_URL,
    },
    Source {
        corpus: Corpus::PearlOfGreatPrice,
        url: PEARL_OF_GREAT_PRICE_URL,
    },
];

/// Remote URL for one corpus.
pub fn url_for(corpus: Corpus) -> &'static str {
    match corpus {
        Corpus::BookOfMormon => BOOK_OF_MORMON_URL,
        Corpus::DoctrineAndCovenants => DOCTRINE_AND_COVENANTS_URL,
        Corpus::NewTestament => NEW_TESTAMENT_URL,
        Corpus::OldTestament => OLD_TESTAMENT_URL,
        Corpus::PearlOfGreatPrice => PEARL_OF_GREAT_PRICE_URL,
    }
}
