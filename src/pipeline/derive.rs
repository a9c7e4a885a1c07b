use serde::{Deserialize, Serialize};

use super::clock::{self, ClockTime};
use crate::domain::{NextFinishing, Showing};

/// Policy knobs for event derivation. Real runtimes vary by title, so the
/// assumed duration is configuration, not law.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivePolicy {
    /// Assumed running time, in minutes, for showings without an explicit
    /// end. Only used for the currently-playing computation; never written
    /// back into the schedule.
    pub default_duration_min: u16,
}

impl Default for DerivePolicy {
    fn default() -> Self {
        Self { default_duration_min: 120 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivedEvents {
    pub next_starting: Option<Showing>,
    pub next_finishing: Option<NextFinishing>,
}

/// Relates the normalized schedule to the current minute-of-day:
/// `next_starting` is the first showing strictly after now, `next_finishing`
/// is the in-progress showing ending soonest. Pure over its inputs.
pub fn derive_events(showings: &[Showing], now_minute: u16, policy: DerivePolicy) -> DerivedEvents {
    let now = u32::from(now_minute);

    let next_starting = showings
        .iter()
        .find(|showing| {
            ClockTime::parse(&showing.start)
                .map(|start| u32::from(start.minutes()) > now)
                .unwrap_or(false)
        })
        .cloned();

    // (start, end, showing) of the containing interval with the earliest end.
    let mut current: Option<(u32, u32, &Showing)> = None;
    for showing in showings {
        let Some(start) = ClockTime::parse(&showing.start) else { continue };
        let start_minute = u32::from(start.minutes());
        let end_minute = showing
            .end
            .as_deref()
            .and_then(ClockTime::parse)
            .map(|end| u32::from(end.minutes()))
            .unwrap_or(start_minute + u32::from(policy.default_duration_min));
        if start_minute <= now && now < end_minute {
            let finishes_sooner = current.map_or(true, |(_, end, _)| end_minute < end);
            if finishes_sooner {
                current = Some((start_minute, end_minute, showing));
            }
        }
    }

    let next_finishing = current.map(|(start_minute, end_minute, showing)| NextFinishing {
        film: showing.film.clone(),
        screen: showing.screen.clone(),
        start: clock::format_clock(start_minute),
        end: clock::format_clock(end_minute),
    });

    DerivedEvents { next_starting, next_finishing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showing(film: &str, start: &str, end: Option<&str>) -> Showing {
        Showing {
            film: film.to_string(),
            screen: None,
            start: start.to_string(),
            end: end.map(String::from),
        }
    }

    fn at(hh: u16, mm: u16) -> u16 {
        hh * 60 + mm
    }

    #[test]
    fn test_next_starting_and_next_finishing() {
        // now = 17:30: X starts next, Y (17:00-19:10) is in progress.
        let showings = vec![
            showing("Y", "17:00", Some("19:10")),
            showing("X", "18:00", None),
        ];
        let derived = derive_events(&showings, at(17, 30), DerivePolicy::default());

        let next = derived.next_starting.unwrap();
        assert_eq!(next.film, "X");
        assert_eq!(next.start, "18:00");

        let finishing = derived.next_finishing.unwrap();
        assert_eq!(finishing.film, "Y");
        assert_eq!(finishing.start, "17:00");
        assert_eq!(finishing.end, "19:10");
    }

    #[test]
    fn test_default_duration_applies_without_explicit_end() {
        let showings = vec![showing("A", "14:00", None)];
        let derived = derive_events(&showings, at(15, 59), DerivePolicy::default());
        let finishing = derived.next_finishing.unwrap();
        assert_eq!(finishing.end, "16:00");

        // One minute later the assumed interval is over.
        let derived = derive_events(&showings, at(16, 0), DerivePolicy::default());
        assert!(derived.next_finishing.is_none());
    }

    #[test]
    fn test_duration_policy_is_configurable() {
        let policy = DerivePolicy { default_duration_min: 90 };
        let showings = vec![showing("A", "14:00", None)];
        let derived = derive_events(&showings, at(15, 15), policy);
        assert_eq!(derived.next_finishing.unwrap().end, "15:30");

        let derived = derive_events(&showings, at(15, 31), policy);
        assert!(derived.next_finishing.is_none());
    }

    #[test]
    fn test_start_equal_to_now_is_not_next_starting() {
        let showings = vec![showing("A", "18:00", None)];
        let derived = derive_events(&showings, at(18, 0), DerivePolicy::default());
        assert!(derived.next_starting.is_none());
        // It is, however, currently playing.
        assert_eq!(derived.next_finishing.unwrap().film, "A");
    }

    #[test]
    fn test_earliest_end_wins_among_overlapping() {
        let showings = vec![
            showing("Long", "13:00", Some("17:00")),
            showing("Short", "14:00", Some("15:30")),
        ];
        let derived = derive_events(&showings, at(14, 30), DerivePolicy::default());
        assert_eq!(derived.next_finishing.unwrap().film, "Short");
    }

    #[test]
    fn test_empty_schedule_derives_nothing() {
        let derived = derive_events(&[], at(12, 0), DerivePolicy::default());
        assert_eq!(derived, DerivedEvents::default());
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let showings = vec![
            showing("Y", "17:00", Some("19:10")),
            showing("X", "18:00", None),
        ];
        let first = derive_events(&showings, at(17, 30), DerivePolicy::default());
        let second = derive_events(&showings, at(17, 30), DerivePolicy::default());
        assert_eq!(first, second);
    }
}
