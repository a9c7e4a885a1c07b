use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

use super::{CandidateExtractor, SCREEN_REF};
use crate::domain::ShowingCandidate;

static TIME_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{1,2}:\d{2})\b").unwrap());
static ONLY_TIMES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}:\d{2}(\s+\d{1,2}:\d{2})?$").unwrap());
static SCREEN_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bScreen\b").unwrap());

/// Fold state for the line scan: the last title-looking line seen, plus the
/// candidates collected so far.
#[derive(Default)]
struct SweepState {
    title: Option<String>,
    candidates: Vec<ShowingCandidate>,
}

/// Fallback strategy: sweep the document as a flat sequence of lines,
/// carrying a "last seen title" cursor. Works on plain text and on whatever
/// visible text a markup document reduces to.
pub struct TextSweepExtractor;

impl TextSweepExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextSweepExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateExtractor for TextSweepExtractor {
    fn name(&self) -> &'static str {
        "text-sweep"
    }

    fn extract(&self, document: &str) -> Vec<ShowingCandidate> {
        visible_lines(document)
            .into_iter()
            .fold(SweepState::default(), scan_line)
            .candidates
    }
}

/// The document's visible text as ordered, non-empty trimmed lines. Plain
/// text passes through unchanged; markup is reduced to its text nodes with
/// script/style content skipped.
fn visible_lines(document: &str) -> Vec<String> {
    let html = Html::parse_document(document);
    let mut lines = Vec::new();
    for node in html.root_element().descendants() {
        let Some(text) = node.value().as_text() else { continue };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .map(|element| matches!(element.name(), "script" | "style"))
                .unwrap_or(false)
        });
        if hidden {
            continue;
        }
        lines.extend(
            text.split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );
    }
    lines
}

fn scan_line(mut state: SweepState, line: String) -> SweepState {
    // Title heuristic: has a letter, no "Screen", not just one or two times.
    let looks_like_title = line.chars().any(|c| c.is_ascii_alphabetic())
        && !SCREEN_WORD.is_match(&line)
        && !ONLY_TIMES.is_match(&line);
    if looks_like_title {
        state.title = Some(line.clone());
    }

    let times: Vec<String> = TIME_TOKEN
        .captures_iter(&line)
        .map(|caps| caps[1].to_string())
        .collect();
    if times.is_empty() {
        return state;
    }

    let screen = SCREEN_REF.captures(&line).map(|caps| caps[1].to_string());
    if let Some(film) = &state.title {
        // Two or more tokens on one line are an explicit start/end interval.
        if times.len() >= 2 {
            state.candidates.push(ShowingCandidate {
                film: film.clone(),
                screen,
                start: times[0].clone(),
                end: Some(times[1].clone()),
            });
        } else {
            state.candidates.push(ShowingCandidate {
                film: film.clone(),
                screen,
                start: times[0].clone(),
                end: None,
            });
        }
    }
    state
}
