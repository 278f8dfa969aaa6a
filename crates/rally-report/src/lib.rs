//! `rally-report` — attendance reports and radar-frame logging.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend  | Files created                             |
//! |-----------|----------|-------------------------------------------|
//! | *(none)*  | CSV      | `radar_frames.csv`, `attendance.csv`      |
//! | `sqlite`  | SQLite   | `reports.db`                              |
//!
//! Both implement [`ReportWriter`] and are driven by [`FrameLogObserver`],
//! which implements `rally_tracker::TrackerObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rally_report::{AttendanceReport, CsvReportWriter, FrameLogObserver};
//!
//! let writer = CsvReportWriter::new(Path::new("./output"))?;
//! let mut obs = FrameLogObserver::new(writer);
//! tracker.run(sub, &mut source, &mut obs)?;
//!
//! let spot_id = tracker.finish_spot()?;
//! let spot = tracker.spots.archived_spot(spot_id)?;
//! let members = tracker.roster.circle_members(tracker.active_circle())?;
//! obs.log_report(&AttendanceReport::build(spot, &members));
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("report error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvReportWriter;
pub use error::{ReportError, ReportResult};
pub use observer::FrameLogObserver;
pub use report::{AttendanceReport, AttendanceRow};
pub use row::FrameRow;
pub use writer::ReportWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteReportWriter;
