#![doc = include_str!("../README.md")]

pub mod error;
pub mod fetch;
pub mod paths;
pub mod sources;
pub mod store;

pub use error::{Result, StoreError};
pub use fetch::{Fetch, HttpFetcher};
pub use paths::CacheResolver;
pub use sources::{SOURCES, Source, url_for};
pub use store::Store;
