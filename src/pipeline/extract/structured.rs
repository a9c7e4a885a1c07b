use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use super::{CandidateExtractor, SCREEN_REF};
use crate::domain::ShowingCandidate;

/// A descendant text node that is exactly one time token.
static DISCRETE_TIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}:\d{2}$").unwrap());

/// Extracts showings from repeating "card" elements: a title heading, an
/// optional screen label and discrete time tokens among the descendants.
pub struct StructuredExtractor;

impl StructuredExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StructuredExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateExtractor for StructuredExtractor {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn extract(&self, document: &str) -> Vec<ShowingCandidate> {
        let html = Html::parse_document(document);
        let card_selector = Selector::parse(
            "article, [class*=\"showing\"], [class*=\"film\"], [class*=\"movie\"]",
        )
        .unwrap();
        let title_selector = Selector::parse("h1, h2, h3, h4, [class*=\"title\"]").unwrap();

        let mut candidates = Vec::new();
        for card in html.select(&card_selector) {
            let title = match card.select(&title_selector).next() {
                Some(heading) => heading.text().collect::<String>().trim().to_string(),
                None => continue,
            };
            // A missing or too-short title disqualifies the whole card.
            if title.chars().count() < 2 {
                debug!("skipping card with title {:?}", title);
                continue;
            }

            let fragments: Vec<&str> = card.text().collect();
            let screen = fragments
                .iter()
                .find_map(|fragment| SCREEN_REF.captures(fragment).map(|caps| caps[1].to_string()));

            for fragment in &fragments {
                let token = fragment.trim();
                if DISCRETE_TIME.is_match(token) {
                    candidates.push(ShowingCandidate {
                        film: title.clone(),
                        screen: screen.clone(),
                        start: token.to_string(),
                        end: None,
                    });
                }
            }
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <article class="film-card">
            <h3>The Third Man</h3>
            <span>Screen 4</span>
            <ul><li>15:10</li><li>18:00</li></ul>
          </article>
          <article class="film-card">
            <h3>M</h3>
            <ul><li>20:30</li></ul>
          </article>
          <article class="film-card">
            <h3>Stalker</h3>
            <p>Sold out</p>
          </article>
        </body></html>
    "#;

    #[test]
    fn test_one_candidate_per_time_token() {
        let candidates = StructuredExtractor::new().extract(PAGE);
        let third_man: Vec<_> = candidates.iter().filter(|c| c.film == "The Third Man").collect();
        assert_eq!(third_man.len(), 2);
        assert_eq!(third_man[0].start, "15:10");
        assert_eq!(third_man[1].start, "18:00");
        assert!(third_man.iter().all(|c| c.screen.as_deref() == Some("4")));
        assert!(third_man.iter().all(|c| c.end.is_none()));
    }

    #[test]
    fn test_short_title_disqualifies_card() {
        let candidates = StructuredExtractor::new().extract(PAGE);
        assert!(candidates.iter().all(|c| c.film != "M"));
    }

    #[test]
    fn test_card_without_times_yields_nothing() {
        let candidates = StructuredExtractor::new().extract(PAGE);
        assert!(candidates.iter().all(|c| c.film != "Stalker"));
    }

    #[test]
    fn test_no_cards_yields_empty_list() {
        let candidates = StructuredExtractor::new().extract("<p>nothing here</p>");
        assert!(candidates.is_empty());
    }
}
