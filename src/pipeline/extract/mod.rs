mod structured;
mod text_sweep;

pub use structured::StructuredExtractor;
pub use text_sweep::TextSweepExtractor;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::domain::{FilmListing, ShowingCandidate, SourceDocument};

/// An embedded screen reference ("Screen 3", "screen IMAX").
pub(crate) static SCREEN_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bScreen\s+([A-Za-z0-9]+)\b").unwrap());

/// One extraction strategy over a raw document. Strategies never error:
/// malformed input simply yields an empty candidate list.
pub trait CandidateExtractor: Send + Sync {
    fn name(&self) -> &'static str;
    fn extract(&self, document: &str) -> Vec<ShowingCandidate>;
}

/// Strategies for markup documents in fallback order; each runs only while
/// the ones before it came up empty.
fn markup_chain() -> Vec<Box<dyn CandidateExtractor>> {
    vec![
        Box::new(StructuredExtractor::new()),
        Box::new(TextSweepExtractor::new()),
    ]
}

/// Turns an acquired document into unordered, unvalidated candidates.
pub fn extract_candidates(document: &SourceDocument) -> Vec<ShowingCandidate> {
    match document {
        SourceDocument::Markup(body) => {
            for strategy in markup_chain() {
                let candidates = strategy.extract(body);
                if !candidates.is_empty() {
                    debug!(
                        strategy = strategy.name(),
                        count = candidates.len(),
                        "extraction strategy matched"
                    );
                    return candidates;
                }
                debug!(strategy = strategy.name(), "no candidates, falling back");
            }
            Vec::new()
        }
        SourceDocument::Text(body) => TextSweepExtractor::new().extract(body),
        SourceDocument::Listings(listings) => expand_listings(listings),
    }
}

/// Pre-parsed API listings skip the textual strategies: one candidate per
/// time token, sharing the listing's film and screen.
fn expand_listings(listings: &[FilmListing]) -> Vec<ShowingCandidate> {
    listings
        .iter()
        .flat_map(|listing| {
            listing.times.iter().map(|time| ShowingCandidate {
                film: listing.film.clone(),
                screen: listing.screen.clone(),
                start: time.clone(),
                end: None,
            })
        })
        .collect()
}
