//! Cinema showtime scraping pipeline: tolerant extraction from unreliable
//! sources, normalization, event derivation against the wall clock, and
//! assembly of an always-valid schedule snapshot.

pub mod apis;
pub mod common;
pub mod config;
pub mod domain;
pub mod infra;
pub mod observability;
pub mod pipeline;

pub use domain::{ScheduleSnapshot, Showing, SourceDocument};
