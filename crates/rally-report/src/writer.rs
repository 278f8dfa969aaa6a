//! The `ReportWriter` trait implemented by all backend writers.

use crate::{AttendanceReport, FrameRow, ReportResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`FrameLogObserver::take_error`][crate::FrameLogObserver::take_error].
pub trait ReportWriter {
    /// Write a batch of radar-frame rows (one per blip).
    fn write_frame_rows(&mut self, rows: &[FrameRow]) -> ReportResult<()>;

    /// Write a finished meetup's attendance report (one row per member).
    fn write_report(&mut self, report: &AttendanceReport) -> ReportResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> ReportResult<()>;
}
