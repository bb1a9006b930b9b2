pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::FeedConfig;
pub use crate::core::{
    DescriptionEnricher, FeedPipeline, PageFetcher, VacancyListExtractor, XmlExporter,
};
pub use crate::domain::model::Vacancy;
pub use crate::domain::ports::PageSource;
pub use crate::utils::error::{FeedError, Result};
