use std::collections::HashSet;

use tracing::debug;

use super::clock::{self, ClockTime};
use crate::domain::{Showing, ShowingCandidate};

/// Validates and orders raw candidates: canonicalizes time tokens (12-hour
/// inputs become 24-hour "HH:MM" here), drops candidates without a parseable
/// start, collapses duplicates from overlapping strategies and sorts
/// ascending by start minute. The sort is stable, so ties keep discovery
/// order.
pub fn normalize(candidates: Vec<ShowingCandidate>) -> Vec<Showing> {
    let mut seen = HashSet::new();
    let mut showings = Vec::new();

    for candidate in candidates {
        let film = candidate.film.trim().to_string();
        if film.is_empty() {
            continue;
        }
        let start = match ClockTime::parse(&candidate.start) {
            Some(start) => start,
            None => {
                debug!(token = %candidate.start, film = %film, "dropping candidate with unparsable start");
                continue;
            }
        };
        // A malformed end drops just the end, not the candidate.
        let end = candidate.end.as_deref().and_then(ClockTime::parse);
        let screen = candidate
            .screen
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        if !seen.insert((film.clone(), start.minutes(), screen.clone())) {
            continue;
        }
        showings.push(Showing {
            film,
            screen,
            start: start.display(),
            end: end.map(ClockTime::display),
        });
    }

    showings.sort_by_key(|showing| clock::sort_key(&showing.start));
    showings
}
