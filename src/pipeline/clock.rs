use once_cell::sync::Lazy;
use regex::Regex;

pub const MINUTES_PER_DAY: u32 = 1440;

/// Sort key for time tokens that fail to parse: after every valid time, so
/// malformed entries fall to the end of any ordering instead of erroring.
pub const LATE: u32 = u32::MAX;

static TIME_24H: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap());
static TIME_12H: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)(\d{1,2}):(\d{2})\s?([AP]M)$").unwrap());

/// A time of day as minutes since midnight (0..1440).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Parses "H:MM"/"HH:MM" (24-hour) or "H:MM AM"/"9:05PM" style 12-hour
    /// tokens. Noon is 12:00 PM, midnight is 12:00 AM. Anything else is None.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();

        if let Some(caps) = TIME_24H.captures(token) {
            let hours: u16 = caps[1].parse().ok()?;
            let minutes: u16 = caps[2].parse().ok()?;
            if hours < 24 && minutes < 60 {
                return Some(Self { minutes: hours * 60 + minutes });
            }
            return None;
        }

        if let Some(caps) = TIME_12H.captures(token) {
            let hours: u16 = caps[1].parse().ok()?;
            let minutes: u16 = caps[2].parse().ok()?;
            if !(1..=12).contains(&hours) || minutes >= 60 {
                return None;
            }
            let hours_24 = match (hours, caps[3].eq_ignore_ascii_case("pm")) {
                (12, false) => 0,
                (12, true) => 12,
                (h, false) => h,
                (h, true) => h + 12,
            };
            return Some(Self { minutes: hours_24 * 60 + minutes });
        }

        None
    }

    pub fn minutes(self) -> u16 {
        self.minutes
    }

    /// Canonical "HH:MM" display form.
    pub fn display(self) -> String {
        format_clock(u32::from(self.minutes))
    }
}

/// Formats minutes-since-midnight as zero-padded "HH:MM", wrapping into a
/// single day first.
pub fn format_clock(minutes: u32) -> String {
    let wrapped = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

/// Minute value of a token for ordering purposes; unparsable tokens are
/// "infinitely late".
pub fn sort_key(token: &str) -> u32 {
    ClockTime::parse(token).map_or(LATE, |t| u32::from(t.minutes))
}
