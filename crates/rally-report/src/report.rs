//! The attendance report — confirmed vs. actually arrived.

use rally_core::{MemberId, SpotId, Timestamp};
use rally_meetup::MeetingSpot;
use rally_roster::Member;

/// One member's line in the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttendanceRow {
    pub member: MemberId,
    pub name: String,
    /// Said they were coming.
    pub confirmed: bool,
    /// Actually latched inside the arrival threshold.
    pub arrived: bool,
    pub arrival_time: Option<Timestamp>,
}

/// The summary view of one meetup.
///
/// The attendance rate is `round(100 · arrived / confirmed)` — arrivals by
/// members who never confirmed still count toward the numerator, exactly as
/// the shipped report computes it — and 0 when nobody confirmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttendanceReport {
    pub spot: SpotId,
    pub title: String,
    pub confirmed_count: usize,
    pub arrived_count: usize,
    pub attendance_rate_pct: u32,
    pub rows: Vec<AttendanceRow>,
}

impl AttendanceReport {
    /// Assemble the report for `spot` from the circle's members.
    pub fn build(spot: &MeetingSpot, members: &[&Member]) -> Self {
        let rows: Vec<AttendanceRow> = members
            .iter()
            .map(|m| AttendanceRow {
                member: m.id,
                name: m.name.clone(),
                confirmed: spot.is_confirmed(m.id),
                arrived: m.has_arrived(),
                arrival_time: m.arrival_time,
            })
            .collect();

        let confirmed_count = spot.confirmed().len();
        let arrived_count = rows.iter().filter(|r| r.arrived).count();
        let attendance_rate_pct = if confirmed_count > 0 {
            ((arrived_count as f64 / confirmed_count as f64) * 100.0).round() as u32
        } else {
            0
        };

        Self {
            spot: spot.id,
            title: spot.title.clone(),
            confirmed_count,
            arrived_count,
            attendance_rate_pct,
            rows,
        }
    }
}
