//! `wp-output` — presentation sinks for the position stream.
//!
//! | Feature   | Backend | Files created                            |
//! |-----------|---------|------------------------------------------|
//! | *(none)*  | CSV     | `positions.csv`, `tick_summaries.csv`    |
//! | `sqlite`  | SQLite  | `output.db`                              |
//!
//! Both backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `wp_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wp_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     tracing::error!(error = %e, "output failed");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EventKind, PositionRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
