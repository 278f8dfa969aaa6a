//! `FrameLogObserver<W>` — bridges `TrackerObserver` to a `ReportWriter`.

use rally_tracker::{RadarFrame, TrackerObserver};

use crate::row::FrameRow;
use crate::writer::ReportWriter;
use crate::{AttendanceReport, ReportError};

/// A [`TrackerObserver`] that logs every radar frame to any [`ReportWriter`]
/// backend (CSV, SQLite).
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the tracker run, check for errors with
/// [`take_error`][Self::take_error].
pub struct FrameLogObserver<W: ReportWriter> {
    writer:     W,
    last_error: Option<ReportError>,
}

impl<W: ReportWriter> FrameLogObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Write a finished meetup's attendance report through the backend.
    pub fn log_report(&mut self, report: &AttendanceReport) {
        let result = self.writer.write_report(report);
        self.store_err(result);
    }

    /// Flush and close the backend.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<ReportError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files afterwards).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::ReportResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> TrackerObserver for FrameLogObserver<W> {
    fn on_frame(&mut self, frame: &RadarFrame) {
        let rows: Vec<FrameRow> = frame
            .blips
            .iter()
            .map(|b| FrameRow {
                spot_id:        frame.spot.0,
                member_id:      b.member.0,
                at_unix_secs:   frame.at.0,
                x:              b.x,
                y:              b.y,
                distance_miles: b.distance_miles,
                arrived:        b.within_arrival_radius,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_frame_rows(&rows);
            self.store_err(result);
        }
    }
}
