//! SQLite report backend (feature `sqlite`).
//!
//! Creates a single `reports.db` file in the configured output directory with
//! two tables: `radar_frames` and `attendance`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::ReportWriter;
use crate::{AttendanceReport, FrameRow, ReportResult};

/// Writes radar frames and attendance reports to an SQLite database.
pub struct SqliteReportWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteReportWriter {
    /// Open (or create) `reports.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let conn = Connection::open(dir.join("reports.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS radar_frames (
                 spot_id        INTEGER NOT NULL,
                 member_id      INTEGER NOT NULL,
                 at_unix_secs   INTEGER NOT NULL,
                 x              REAL    NOT NULL,
                 y              REAL    NOT NULL,
                 distance_miles REAL    NOT NULL,
                 arrived        INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS attendance (
                 spot_id           INTEGER NOT NULL,
                 title             TEXT    NOT NULL,
                 member_id         INTEGER NOT NULL,
                 name              TEXT    NOT NULL,
                 confirmed         INTEGER NOT NULL,
                 arrived           INTEGER NOT NULL,
                 arrival_unix_secs INTEGER
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl ReportWriter for SqliteReportWriter {
    fn write_frame_rows(&mut self, rows: &[FrameRow]) -> ReportResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO radar_frames \
                 (spot_id, member_id, at_unix_secs, x, y, distance_miles, arrived) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.spot_id,
                    row.member_id,
                    row.at_unix_secs,
                    row.x,
                    row.y,
                    row.distance_miles,
                    row.arrived as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_report(&mut self, report: &AttendanceReport) -> ReportResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO attendance \
                 (spot_id, title, member_id, name, confirmed, arrived, arrival_unix_secs) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in &report.rows {
                stmt.execute(rusqlite::params![
                    report.spot.0,
                    report.title,
                    row.member.0,
                    row.name,
                    row.confirmed as i64,
                    row.arrived as i64,
                    row.arrival_time.map(|t| t.0),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
