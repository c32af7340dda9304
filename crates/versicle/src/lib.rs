#![doc = include_str!("../README.md")]

pub mod select;
pub mod types;

pub use select::{EmptyCorpus, random_verse};
pub use types::{Book, Chapter, Corpus, Library, SubBook, Verse};
