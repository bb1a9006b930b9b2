use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("XML write error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Listing page unavailable: {url}")]
    ListPageUnavailable { url: String },

    #[error("No vacancies found on the listing page")]
    NoVacancies,

    #[error("Detail page unavailable for vacancy '{id}' ({url})")]
    DetailPageUnavailable { id: String, url: String },

    #[error("Empty description for vacancy '{id}' ({url})")]
    EmptyDescription { id: String, url: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, FeedError>;
