use async_trait::async_trait;
use scraper::Html;

/// Retrieval seam for HTML pages. The production implementation is
/// `PageFetcher`; tests substitute fixture documents.
///
/// `?Send` because `scraper::Html` is not `Send` and the whole pipeline runs
/// on a single thread anyway.
#[async_trait(?Send)]
pub trait PageSource {
    /// Returns the parsed page, or `None` when the page could not be
    /// retrieved. Implementations must not propagate fetch errors.
    async fn get_page(&self, url: &str) -> Option<Html>;
}
