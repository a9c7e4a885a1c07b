use chrono::Utc;

use super::derive::DerivedEvents;
use crate::domain::{ScheduleSnapshot, Showing};

/// Packages a pipeline run into the output contract. The snapshot is
/// structurally valid no matter what the run produced.
pub fn assemble(source: Option<&str>, showings: Vec<Showing>, derived: DerivedEvents) -> ScheduleSnapshot {
    let today_block = render_today_block(&showings);
    ScheduleSnapshot {
        generated_at: Utc::now(),
        source: source.map(String::from),
        error: None,
        next_starting: derived.next_starting,
        next_finishing: derived.next_finishing,
        today_showings: showings,
        today_block,
    }
}

/// The empty, annotated snapshot published when acquisition or extraction
/// failed outright. Consumers get a valid document either way.
pub fn assemble_failure(source: Option<&str>, error: &str) -> ScheduleSnapshot {
    ScheduleSnapshot {
        generated_at: Utc::now(),
        source: source.map(String::from),
        error: Some(error.to_string()),
        next_starting: None,
        next_finishing: None,
        today_showings: Vec::new(),
        today_block: None,
    }
}

/// Human-readable rendering: one "HH:MM  Title" line per showing, in
/// schedule order.
fn render_today_block(showings: &[Showing]) -> Option<String> {
    if showings.is_empty() {
        return None;
    }
    Some(
        showings
            .iter()
            .map(|showing| format!("{}  {}", showing.start, showing.film))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}
