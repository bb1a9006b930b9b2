use crate::config::FeedConfig;
use crate::core::{DescriptionEnricher, PageFetcher, VacancyListExtractor, XmlExporter};
use crate::domain::ports::PageSource;
use crate::utils::error::{FeedError, Result};
use std::path::PathBuf;

/// Runs fetch-list, extract, enrich and export in sequence. Each stage runs
/// only if the previous one succeeded; the first failure aborts the run and
/// no feed file is written. Retries exist only inside `PageFetcher`, never
/// across stages.
pub struct FeedPipeline {
    config: FeedConfig,
    fetcher: PageFetcher,
    extractor: VacancyListExtractor,
    enricher: DescriptionEnricher,
    exporter: XmlExporter,
}

impl FeedPipeline {
    pub fn new(config: FeedConfig) -> Self {
        let fetcher = PageFetcher::new(config.max_attempts);
        let extractor = VacancyListExtractor::new(config.base_vacancy_url.clone());
        let enricher = DescriptionEnricher::new();
        let exporter = XmlExporter::new(config.output_dir.clone());
        Self {
            config,
            fetcher,
            extractor,
            enricher,
            exporter,
        }
    }

    pub async fn run(&self) -> Result<PathBuf> {
        tracing::info!("Fetching vacancy listing from {}", self.config.listing_url);
        let page = self
            .fetcher
            .get_page(&self.config.listing_url)
            .await
            .ok_or_else(|| FeedError::ListPageUnavailable {
                url: self.config.listing_url.clone(),
            })?;

        tracing::info!("Parsing vacancy list");
        let vacancies = self.extractor.extract(&page);
        tracing::info!("Vacancies count: {}", vacancies.len());
        if vacancies.is_empty() {
            return Err(FeedError::NoVacancies);
        }

        tracing::info!("Fetching vacancy descriptions");
        let vacancies = self.enricher.enrich(&self.fetcher, vacancies).await?;

        tracing::info!("Exporting {} vacancies", vacancies.len());
        let path = self.exporter.export(&vacancies)?;
        tracing::info!("Feed written to {}", path.display());
        Ok(path)
    }
}
