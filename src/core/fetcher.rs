use crate::domain::ports::PageSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use scraper::Html;

/// Bounded-retry page retrieval. Attempts are issued back to back with no
/// backoff; a non-success status counts as a failed attempt. Fetch errors
/// never escape this type, they are logged and collapse into `None`.
pub struct PageFetcher {
    client: Client,
    max_attempts: u32,
}

impl PageFetcher {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            client: Client::new(),
            max_attempts,
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<Html> {
        let response = self.client.get(url).send().await?;
        tracing::debug!("Response status for {}: {}", url, response.status());
        let body = response.error_for_status()?.text().await?;
        Ok(Html::parse_document(&body))
    }
}

#[async_trait(?Send)]
impl PageSource for PageFetcher {
    async fn get_page(&self, url: &str) -> Option<Html> {
        for attempt in 1..=self.max_attempts {
            tracing::info!(
                "Trying to get page {}, attempt {}/{}",
                url,
                attempt,
                self.max_attempts
            );
            match self.try_fetch(url).await {
                Ok(page) => return Some(page),
                Err(e) => tracing::warn!("Cannot get page {}: {}", url, e),
            }
        }
        tracing::warn!("No page received from {} after {} attempts", url, self.max_attempts);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn returns_on_first_success() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET).path("/jobs");
            then.status(200)
                .header("Content-Type", "text/html")
                .body("<html><body><h4>Hello</h4></body></html>");
        });

        let fetcher = PageFetcher::new(3);
        let page = fetcher.get_page(&server.url("/jobs")).await;

        page_mock.assert();
        assert!(page.is_some());
    }

    #[tokio::test]
    async fn exhausts_retry_budget_on_server_error() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET).path("/jobs");
            then.status(500);
        });

        let fetcher = PageFetcher::new(3);
        let page = fetcher.get_page(&server.url("/jobs")).await;

        assert!(page.is_none());
        page_mock.assert_hits(3);
    }

    #[tokio::test]
    async fn honors_configured_attempt_count() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET).path("/jobs");
            then.status(503);
        });

        let fetcher = PageFetcher::new(1);
        let page = fetcher.get_page(&server.url("/jobs")).await;

        assert!(page.is_none());
        page_mock.assert_hits(1);
    }
}
