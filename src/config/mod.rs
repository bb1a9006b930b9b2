use crate::utils::error::Result;
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LISTING_URL: &str =
    "https://www.exone.de/jm/web/tool/jobmanager/apply.php?sttyp=1";
pub const DEFAULT_BASE_VACANCY_URL: &str = "https://www.exone.de/jm/web/tool/jobmanager/apply.php";
pub const DEFAULT_OUTPUT_DIR: &str = "./parsed_xml";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "vacancy-feed")]
#[command(about = "Scrapes Exone job vacancies and exports them as an XML feed")]
pub struct FeedConfig {
    /// URL of the vacancy listing page.
    #[arg(long, default_value = DEFAULT_LISTING_URL)]
    pub listing_url: String,

    /// Base URL the relative detail-page links are appended to.
    #[arg(long, default_value = DEFAULT_BASE_VACANCY_URL)]
    pub base_vacancy_url: String,

    /// Directory the XML feed is written to (created if missing).
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// Maximum fetch attempts per page before giving up.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            base_vacancy_url: DEFAULT_BASE_VACANCY_URL.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            verbose: false,
        }
    }
}

impl Validate for FeedConfig {
    fn validate(&self) -> Result<()> {
        validate_url("listing_url", &self.listing_url)?;
        validate_url("base_vacancy_url", &self.base_vacancy_url)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_positive_number("max_attempts", self.max_attempts as usize, 1)?;
        Ok(())
    }
}
