pub mod caption_fetcher;
pub mod caption_locator;
pub mod completer;
pub mod datastore;
