//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `radar_frames.csv`
//! - `attendance.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{AttendanceReport, FrameRow, ReportResult};

/// Writes radar frames and attendance reports to two CSV files.
pub struct CsvReportWriter {
    frames:     Writer<File>,
    attendance: Writer<File>,
    finished:   bool,
}

impl CsvReportWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let mut frames = Writer::from_path(dir.join("radar_frames.csv"))?;
        frames.write_record([
            "spot_id", "member_id", "at_unix_secs", "x", "y", "distance_miles", "arrived",
        ])?;

        let mut attendance = Writer::from_path(dir.join("attendance.csv"))?;
        attendance.write_record([
            "spot_id", "title", "member_id", "name", "confirmed", "arrived", "arrival_unix_secs",
        ])?;

        Ok(Self {
            frames,
            attendance,
            finished: false,
        })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_frame_rows(&mut self, rows: &[FrameRow]) -> ReportResult<()> {
        for row in rows {
            self.frames.write_record(&[
                row.spot_id.to_string(),
                row.member_id.to_string(),
                row.at_unix_secs.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.distance_miles.to_string(),
                (row.arrived as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_report(&mut self, report: &AttendanceReport) -> ReportResult<()> {
        for row in &report.rows {
            self.attendance.write_record(&[
                report.spot.0.to_string(),
                report.title.clone(),
                row.member.0.to_string(),
                row.name.clone(),
                (row.confirmed as u8).to_string(),
                (row.arrived as u8).to_string(),
                row.arrival_time.map(|t| t.0.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.frames.flush()?;
        self.attendance.flush()?;
        Ok(())
    }
}
