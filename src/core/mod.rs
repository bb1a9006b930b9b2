pub mod enricher;
pub mod exporter;
pub mod extractor;
pub mod fetcher;
pub mod pipeline;

pub use crate::domain::model::Vacancy;
pub use crate::domain::ports::PageSource;
pub use crate::utils::error::Result;
pub use enricher::DescriptionEnricher;
pub use exporter::XmlExporter;
pub use extractor::VacancyListExtractor;
pub use fetcher::PageFetcher;
pub use pipeline::FeedPipeline;
