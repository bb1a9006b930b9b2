use crate::domain::model::Vacancy;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Turns the listing-page document into vacancies, in page order.
///
/// The selectors are fixed to the Exone job-manager markup: one
/// `div.ex-job-list-item` per posting, with the work-time and location in
/// the first two `<b>` labels, the title in an `<h4>` and the relative
/// detail link on the item's `<a>`.
pub struct VacancyListExtractor {
    base_vacancy_url: String,
    item_selector: Selector,
    link_selector: Selector,
    label_selector: Selector,
    title_selector: Selector,
}

impl VacancyListExtractor {
    pub fn new(base_vacancy_url: impl Into<String>) -> Self {
        Self {
            base_vacancy_url: base_vacancy_url.into(),
            item_selector: Selector::parse("div.ex-job-list-item").unwrap(),
            link_selector: Selector::parse("a").unwrap(),
            label_selector: Selector::parse("b").unwrap(),
            title_selector: Selector::parse("h4").unwrap(),
        }
    }

    pub fn extract(&self, page: &Html) -> Vec<Vacancy> {
        let mut vacancies = Vec::new();

        for item in page.select(&self.item_selector) {
            let Some(href) = item
                .select(&self.link_selector)
                .next()
                .and_then(|a| a.value().attr("href"))
            else {
                tracing::warn!("Listing item without a detail link, skipping");
                continue;
            };

            let url = format!("{}{}", self.base_vacancy_url, href);
            let labels: Vec<ElementRef> = item.select(&self.label_selector).collect();

            // First whitespace-delimited word of the first label, e.g.
            // "Vollzeit ab sofort" -> "Vollzeit".
            let kind = labels
                .first()
                .map(element_text)
                .unwrap_or_default()
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string();
            let location = labels.get(1).map(element_text).unwrap_or_default();
            let title = item
                .select(&self.title_selector)
                .next()
                .map(|h| element_text(&h))
                .unwrap_or_default();
            let id = extract_job_id(&url);

            vacancies.push(Vacancy::new(id, kind, location, title, url));
        }

        vacancies
    }
}

/// Value of the `id` query parameter, or the empty string when the URL does
/// not parse or carries no such parameter. Never fails.
pub fn extract_job_id(link: &str) -> String {
    let id = Url::parse(link).ok().and_then(|url| {
        url.query_pairs()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned())
    });

    match id {
        Some(id) => id,
        None => {
            tracing::info!("Cannot get identifier from url {}", link);
            String::new()
        }
    }
}

fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
