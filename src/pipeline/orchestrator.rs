use chrono::{DateTime, Local, Timelike};
use tracing::{info, warn};

use super::assemble;
use super::derive::{derive_events, DerivePolicy};
use super::extract;
use super::normalize;
use crate::common::error::ScrapeError;
use crate::domain::{ScheduleSnapshot, SourceDocument};

/// Minute-of-day (0..1440) for a local wall-clock instant.
pub fn minute_of_day(now: &DateTime<Local>) -> u16 {
    (now.hour() * 60 + now.minute()) as u16
}

/// Runs extract → normalize → derive → assemble over an acquisition outcome.
///
/// This is the always-publish boundary: every path through here ends in a
/// structurally valid snapshot. Acquisition failures surface only as the
/// snapshot's `error` annotation, never as a crash.
pub fn run(
    source_name: &str,
    acquired: Result<SourceDocument, ScrapeError>,
    now_minute: u16,
    policy: DerivePolicy,
) -> ScheduleSnapshot {
    match acquired {
        Ok(document) => {
            let candidates = extract::extract_candidates(&document);
            info!(source = source_name, candidates = candidates.len(), "extraction complete");
            let showings = normalize::normalize(candidates);
            let derived = derive_events(&showings, now_minute, policy);
            assemble::assemble(Some(source_name), showings, derived)
        }
        Err(error) => {
            warn!(source = source_name, %error, "acquisition failed, publishing placeholder");
            assemble::assemble_failure(Some(source_name), &error.to_string())
        }
    }
}
