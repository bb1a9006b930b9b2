use crate::domain::model::Vacancy;
use crate::domain::ports::PageSource;
use crate::utils::error::{FeedError, Result};
use scraper::{Html, Selector};

/// Attaches the detail-page description to every vacancy, in order.
///
/// Fail-fast: the first unfetchable detail page or empty description aborts
/// the whole run with a typed error naming the offending vacancy. A vacancy
/// without a description must never reach the export.
pub struct DescriptionEnricher {
    description_selector: Selector,
}

impl DescriptionEnricher {
    pub fn new() -> Self {
        Self {
            description_selector: Selector::parse("div.ex-job-description").unwrap(),
        }
    }

    pub async fn enrich<S: PageSource>(
        &self,
        source: &S,
        mut vacancies: Vec<Vacancy>,
    ) -> Result<Vec<Vacancy>> {
        for vacancy in &mut vacancies {
            let Some(page) = source.get_page(&vacancy.url).await else {
                tracing::warn!("Cannot get detail page for vacancy '{}'", vacancy.id);
                return Err(FeedError::DetailPageUnavailable {
                    id: vacancy.id.clone(),
                    url: vacancy.url.clone(),
                });
            };

            tracing::info!("Parsing description of vacancy id: {}", vacancy.id);
            let description = self.extract_description(&page);
            if description.is_empty() {
                tracing::warn!("Empty description for vacancy '{}'", vacancy.id);
                return Err(FeedError::EmptyDescription {
                    id: vacancy.id.clone(),
                    url: vacancy.url.clone(),
                });
            }
            vacancy.description = Some(description);
        }

        Ok(vacancies)
    }

    fn extract_description(&self, page: &Html) -> String {
        page.select(&self.description_selector)
            .next()
            .map(|element| {
                element
                    .text()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }
}

impl Default for DescriptionEnricher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;

    const VACANCY_PAGE: &str = include_str!("../../tests/fixtures/vacancy.html");
    const EMPTY_DESCRIPTION_PAGE: &str =
        "<html><body><div class=\"ex-job-description\">   </div></body></html>";

    struct FixtureSource {
        body: Option<&'static str>,
        calls: RefCell<u32>,
    }

    impl FixtureSource {
        fn new(body: Option<&'static str>) -> Self {
            Self {
                body,
                calls: RefCell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl PageSource for FixtureSource {
        async fn get_page(&self, _url: &str) -> Option<Html> {
            *self.calls.borrow_mut() += 1;
            self.body.map(Html::parse_document)
        }
    }

    fn vacancy(id: &str) -> Vacancy {
        Vacancy::new(
            id.to_string(),
            "Vollzeit".to_string(),
            "Giengen-Sachsenhausen".to_string(),
            "Elektronik-Montierer/in".to_string(),
            format!("https://example.com/apply.php?arst=detail&id={}", id),
        )
    }

    #[tokio::test]
    async fn enriches_every_vacancy() {
        let source = FixtureSource::new(Some(VACANCY_PAGE));
        let enricher = DescriptionEnricher::new();

        let enriched = enricher
            .enrich(&source, vec![vacancy("85"), vacancy("86")])
            .await
            .unwrap();

        assert_eq!(enriched.len(), 2);
        for vacancy in &enriched {
            let description = vacancy.description.as_deref().unwrap();
            assert!(!description.is_empty());
        }
        assert_eq!(*source.calls.borrow(), 2);
    }

    #[tokio::test]
    async fn aborts_on_unfetchable_detail_page() {
        let source = FixtureSource::new(None);
        let enricher = DescriptionEnricher::new();

        let err = enricher
            .enrich(&source, vec![vacancy("85"), vacancy("86")])
            .await
            .unwrap_err();

        match err {
            FeedError::DetailPageUnavailable { id, .. } => assert_eq!(id, "85"),
            other => panic!("unexpected error: {}", other),
        }
        // Fail-fast: the second vacancy is never fetched.
        assert_eq!(*source.calls.borrow(), 1);
    }

    #[tokio::test]
    async fn aborts_on_empty_description() {
        let source = FixtureSource::new(Some(EMPTY_DESCRIPTION_PAGE));
        let enricher = DescriptionEnricher::new();

        let err = enricher
            .enrich(&source, vec![vacancy("85"), vacancy("86")])
            .await
            .unwrap_err();

        match err {
            FeedError::EmptyDescription { id, .. } => assert_eq!(id, "85"),
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(*source.calls.borrow(), 1);
    }

    #[tokio::test]
    async fn missing_description_element_counts_as_empty() {
        let source = FixtureSource::new(Some("<html><body><p>nothing here</p></body></html>"));
        let enricher = DescriptionEnricher::new();

        let err = enricher.enrich(&source, vec![vacancy("85")]).await.unwrap_err();
        assert!(matches!(err, FeedError::EmptyDescription { .. }));
    }
}
