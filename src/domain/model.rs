use serde::{Deserialize, Serialize};

/// One job posting from the listing page.
///
/// `description` stays `None` until enrichment; a successful pipeline run
/// guarantees every vacancy carries a non-empty description before export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vacancy {
    /// Value of the `id` query parameter of the detail URL; empty when the
    /// parameter is missing or the URL does not parse.
    pub id: String,
    /// Raw work-time token from the listing, e.g. "Vollzeit". Mapped to the
    /// feed vocabulary only at export time.
    pub kind: String,
    /// Raw "Top-Location[-Sub-Location]" text.
    pub location: String,
    pub title: String,
    /// Absolute detail-page URL.
    pub url: String,
    pub description: Option<String>,
}

impl Vacancy {
    pub fn new(
        id: String,
        kind: String,
        location: String,
        title: String,
        url: String,
    ) -> Self {
        Self {
            id,
            kind,
            location,
            title,
            url,
            description: None,
        }
    }

    /// Text before the first `-` in `location`.
    pub fn top_location(&self) -> &str {
        self.location.split('-').next().unwrap_or_default()
    }

    /// Text after the first `-` in `location`, if any.
    pub fn sub_location(&self) -> Option<&str> {
        self.location.splitn(2, '-').nth(1)
    }
}
