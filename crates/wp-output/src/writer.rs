//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PositionRow, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver]
/// because observer callbacks cannot fail.
pub trait OutputWriter {
    /// Write a batch of position events.
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()> {
        (**self).write_positions(rows)
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        (**self).write_tick_summary(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}
