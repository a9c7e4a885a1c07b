use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{info, instrument};

use super::ScheduleSource;
use crate::common::constants::SHOWTIMES_API_SOURCE;
use crate::common::error::Result;
use crate::domain::{FilmListing, SourceDocument};

/// A string that reads as a clock time, 12- or 24-hour.
static TIME_SHAPED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\d{1,2}:\d{2}(\s?[AP]M)?$").unwrap());

const FILM_KEYS: [&str; 3] = ["name", "film", "title"];
const TIME_KEYS: [&str; 5] = ["times", "time", "showings", "showing", "showtimes"];

/// Fetches a third-party showtimes search API. Response schemas differ by
/// provider, so rather than committing to one, a tolerant walk collects any
/// object carrying a film name and time-shaped strings under a time-ish key.
pub struct ShowtimesApiSource {
    url: String,
}

impl ShowtimesApiSource {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

#[async_trait]
impl ScheduleSource for ShowtimesApiSource {
    fn source_name(&self) -> &'static str {
        SHOWTIMES_API_SOURCE
    }

    #[instrument(skip(self))]
    async fn fetch_document(&self) -> Result<SourceDocument> {
        let client = reqwest::Client::new();
        info!("HTTP GET request to: {}", self.url);
        let resp = client.get(&self.url).send().await?.error_for_status()?;
        let data: Value = resp.json().await?;
        let listings = collect_listings(&data);
        info!("search API yielded {} film listings", listings.len());
        Ok(SourceDocument::Listings(listings))
    }
}

/// Walks the whole response tree for film listings, in document order.
pub fn collect_listings(data: &Value) -> Vec<FilmListing> {
    let mut listings = Vec::new();
    walk(data, &mut listings);
    listings
}

fn walk(value: &Value, out: &mut Vec<FilmListing>) {
    if let Value::Object(object) = value {
        let film = FILM_KEYS
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_str))
            .map(str::trim)
            .filter(|film| !film.is_empty());
        if let Some(film) = film {
            let mut times = Vec::new();
            for key in TIME_KEYS {
                if let Some(nested) = object.get(key) {
                    collect_time_strings(nested, &mut times);
                }
            }
            if !times.is_empty() {
                let screen = object.get("screen").and_then(screen_label);
                out.push(FilmListing { film: film.to_string(), screen, times });
                // A matched listing is a leaf; descending further would
                // double-collect its own times.
                return;
            }
        }
    }

    match value {
        Value::Object(object) => {
            for (_, nested) in object {
                walk(nested, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, out);
            }
        }
        _ => {}
    }
}

fn collect_time_strings(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(text) => {
            let token = text.trim();
            if TIME_SHAPED.is_match(token) {
                out.push(token.to_string());
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_time_strings(item, out);
            }
        }
        Value::Object(object) => {
            for (_, nested) in object {
                collect_time_strings(nested, out);
            }
        }
        _ => {}
    }
}

fn screen_label(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collects_nested_listings() {
        // Shape loosely after a search API's showtimes block.
        let data = json!({
            "search_metadata": { "status": "Success" },
            "showtimes": [{
                "day": "Today",
                "movies": [
                    {
                        "name": "Blade Runner",
                        "showing": [{ "time": ["6:30PM", "9:05PM"] }]
                    },
                    {
                        "name": "Amelie",
                        "screen": 3,
                        "showing": [{ "time": ["8:00 PM"] }]
                    }
                ]
            }]
        });
        let listings = collect_listings(&data);
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].film, "Blade Runner");
        assert_eq!(listings[0].times, vec!["6:30PM", "9:05PM"]);
        assert_eq!(listings[1].film, "Amelie");
        assert_eq!(listings[1].screen.as_deref(), Some("3"));
    }

    #[test]
    fn test_non_time_strings_are_ignored() {
        let data = json!({
            "title": "Dune",
            "times": ["Sold out", "19:45", "tomorrow"]
        });
        let listings = collect_listings(&data);
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].times, vec!["19:45"]);
    }

    #[test]
    fn test_named_object_without_times_is_not_a_listing() {
        let data = json!({
            "name": "search results",
            "results": [{ "title": "Alien", "times": ["11:00PM"] }]
        });
        let listings = collect_listings(&data);
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].film, "Alien");
    }

    #[test]
    fn test_empty_response_yields_no_listings() {
        assert!(collect_listings(&json!({})).is_empty());
        assert!(collect_listings(&json!(null)).is_empty());
        assert!(collect_listings(&json!([])).is_empty());
    }
}
