//! meetup-demo — end-to-end walkthrough of the rallypoint toolkit.
//!
//! One circle of three friends rallies to a café in São Paulo: the spot is
//! quick-marked, the device member walks in along a scripted route (with a
//! positioning timeout spliced in halfway), friends' snapshot positions
//! latch their own arrivals, and the run ends with an attendance report
//! printed to the terminal and persisted as CSV.
//!
//! Run with `RUST_LOG=debug` to watch the tracker's guard and latch
//! decisions as the stream plays.

use std::path::Path;

use anyhow::Result;
use log::info;

use rally_core::{GeoPoint, MemberId, Timestamp};
use rally_meetup::estimate_travel_minutes;
use rally_radar::RadarConfig;
use rally_report::{AttendanceReport, CsvReportWriter, FrameLogObserver};
use rally_roster::{ChatLog, CircleRoster};
use rally_stream::{LocationFix, ScriptedRoute, StreamError};
use rally_tracker::{RadarFrame, TrackerBuilder, TrackerObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

/// The café everyone is heading to (Jardins, São Paulo).
const CAFE: GeoPoint = GeoPoint { lat: -23.5617, lon: -46.656 };

/// Where the device member starts: ~0.5 mi north-east of the café.
const HOME: GeoPoint = GeoPoint { lat: -23.5555, lon: -46.6515 };

/// Fixed reference start time (a Saturday afternoon, UTC).
const START: Timestamp = Timestamp(1_700_000_000);

const WALK_STEPS: usize = 20;
const FIX_INTERVAL_SECS: u32 = 30;

// ── Observer wrapper to print frames while logging them ──────────────────────

struct PrintingObserver<W: rally_report::ReportWriter> {
    inner:    FrameLogObserver<W>,
    frames:   usize,
    arrivals: usize,
}

impl<W: rally_report::ReportWriter> PrintingObserver<W> {
    fn new(inner: FrameLogObserver<W>) -> Self {
        Self { inner, frames: 0, arrivals: 0 }
    }
}

impl<W: rally_report::ReportWriter> TrackerObserver for PrintingObserver<W> {
    fn on_frame(&mut self, frame: &RadarFrame) {
        self.frames += 1;
        // Print every fourth frame — enough to watch the approach without
        // scrolling the terminal away.
        if self.frames % 4 == 1 {
            println!("  [{}] {} member(s) on the radar:", frame.at, frame.blips.len());
            for b in &frame.blips {
                println!(
                    "      member {:<2} at ({:6.1}, {:6.1})  {:.3} mi  {}",
                    b.member.0,
                    b.x,
                    b.y,
                    b.distance_miles,
                    if b.within_arrival_radius { "ARRIVED" } else { "en route" },
                );
            }
        }
        self.inner.on_frame(frame);
    }

    fn on_arrival(&mut self, member: MemberId, at: Timestamp) {
        self.arrivals += 1;
        println!("  >> member {} arrived at {at}", member.0);
        self.inner.on_arrival(member, at);
    }

    fn on_notice(&mut self, error: StreamError) {
        println!("  !! notice: {error}");
        self.inner.on_notice(error);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== meetup-demo — rallypoint toolkit ===");
    println!();

    // 1. Build the roster: the device member plus two friends.
    let mut roster = CircleRoster::new();
    let me = roster.add_member("You", "https://i.pravatar.cc/150?u=1");
    let ana = roster.add_member("Ana", "https://i.pravatar.cc/150?u=b");
    let ricardo = roster.add_member("Ricardo", "https://i.pravatar.cc/150?u=a");
    let circle = roster.create_circle("Friends", "fa-users", "indigo");
    for m in [me, ana, ricardo] {
        roster.join(circle, m)?;
    }
    roster.set_location(me, HOME)?;
    // Ana is already at the café; Ricardo is out of radar range entirely.
    roster.set_location(ana, GeoPoint::new(CAFE.lat + 0.0003, CAFE.lon + 0.0001))?;
    roster.set_location(ricardo, GeoPoint::new(CAFE.lat + 0.05, CAFE.lon))?;
    println!(
        "Circle \"Friends\": {} members",
        roster.circle(circle)?.member_count()
    );

    // 2. Build the tracker and mark the meeting spot at the café.
    let mut tracker = TrackerBuilder::new(RadarConfig::default(), roster, circle, me).build()?;
    tracker.roster.set_location(me, CAFE)?; // stand at the café to mark it
    let spot_id = tracker.mark_spot_here(START)?;
    tracker.roster.set_location(me, HOME)?; // then head back home
    tracker.spots.confirm(circle, ana)?;
    println!("Marked spot {} at {CAFE}", spot_id.0);

    let eta = estimate_travel_minutes(HOME.distance_miles(CAFE));
    println!("Estimated travel from home: {eta} min");
    println!();

    // 3. A quick word in the chat before leaving.
    let mut chat = ChatLog::new();
    chat.post(me, ana, "Leaving now — save me a seat!", START);
    for msg in chat.conversation(me, ana) {
        println!("  chat [{}] member {}: {}", msg.sent_at, msg.sender.0, msg.text);
    }
    println!();

    // 4. Subscribe and script the walk in, with a GPS timeout halfway.
    let sub = tracker.subscribe();
    let mut route = ScriptedRoute::walk(HOME, CAFE, WALK_STEPS, START.offset_secs(60), FIX_INTERVAL_SECS);
    route.push_error(StreamError::Timeout);
    route.push_fix(LocationFix::new(CAFE, START.offset_secs(60 + (WALK_STEPS as i64 + 1) * 30)));

    std::fs::create_dir_all("output/meetup")?;
    let writer = CsvReportWriter::new(Path::new("output/meetup"))?;
    let mut obs = PrintingObserver::new(FrameLogObserver::new(writer));

    // 5. Friends' snapshot positions latch on the first refresh.
    tracker.refresh(START.offset_secs(30), &mut obs)?;

    // 6. Walk in.
    println!("Walking in ({WALK_STEPS} hops, one fix every {FIX_INTERVAL_SECS} s)...");
    let applied = tracker.run(sub, &mut route, &mut obs)?;
    info!("applied {applied} of {} scripted samples", WALK_STEPS + 2);
    if tracker.notice().is_none() {
        println!("  (timeout notice cleared by the next good fix)");
    }
    println!();

    // 7. Finish the meetup and build the attendance report.
    let archived = tracker.finish_spot()?;
    let spot = tracker.spots.archived_spot(archived)?;
    let members = tracker.roster.circle_members(circle)?;
    let report = AttendanceReport::build(spot, &members);

    println!("=== {} — attendance ===", report.title);
    println!(
        "confirmed: {}   arrived: {}   rate: {}%",
        report.confirmed_count, report.arrived_count, report.attendance_rate_pct
    );
    println!("{:<10} {:<10} {:<9} {:<9}", "Member", "Confirmed", "Arrived", "Time");
    println!("{}", "-".repeat(40));
    for row in &report.rows {
        println!(
            "{:<10} {:<10} {:<9} {:<9}",
            row.name,
            if row.confirmed { "yes" } else { "no" },
            if row.arrived { "yes" } else { "no" },
            row.arrival_time.map(|t| t.to_string()).unwrap_or_else(|| "—".to_owned()),
        );
    }

    // 8. Persist and close the CSV output.
    obs.inner.log_report(&report);
    obs.inner.finish();
    if let Some(e) = obs.inner.take_error() {
        eprintln!("report error: {e}");
    }
    println!();
    println!("Wrote output/meetup/radar_frames.csv and output/meetup/attendance.csv");
    println!("({} frames, {} arrivals)", obs.frames, obs.arrivals);

    Ok(())
}
