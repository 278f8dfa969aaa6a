//! The `Tracker` struct and its per-sample loop.

use log::{debug, info, warn};

use rally_core::{CircleId, MemberId, SpotId, Timestamp};
use rally_meetup::{estimate_travel_minutes, EventListing, SpotBook};
use rally_radar::{project, Blip, RadarConfig};
use rally_roster::{CircleRoster, MemberStatus};
use rally_stream::{FixSource, LocationFix, StreamError};

use crate::{SubscriptionId, TrackerError, TrackerObserver, TrackerResult};

// ── RadarFrame ────────────────────────────────────────────────────────────────

/// One recomputation's output: every in-range member's disc position at a
/// given instant.  Consumers key blips by member identity — blip order is
/// not significant.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarFrame {
    /// The meeting spot this frame was projected against.
    pub spot: SpotId,
    /// The timestamp of the sample (or refresh) that produced the frame.
    pub at: Timestamp,
    pub blips: Vec<Blip>,
}

impl RadarFrame {
    /// The blip for `member`, if in range this frame.
    pub fn blip(&self, member: MemberId) -> Option<&Blip> {
        self.blips.iter().find(|b| b.member == member)
    }

    /// How many of this frame's members are inside the arrival threshold.
    pub fn arrived_count(&self) -> usize {
        self.blips.iter().filter(|b| b.within_arrival_radius).count()
    }
}

// ── Tracker ───────────────────────────────────────────────────────────────────

/// The main update loop.  Owns the roster, the spot book, and the radar
/// config; consumes location samples; produces frames, arrivals, and
/// notices through a [`TrackerObserver`].
///
/// Create via [`TrackerBuilder`][crate::TrackerBuilder].
pub struct Tracker {
    /// Radar tunables (validated at build time).
    pub config: RadarConfig,

    /// Member and circle state.  The surrounding application writes snapshot
    /// updates (friends' positions from its sync collaborator) directly,
    /// then calls [`refresh`][Self::refresh].
    pub roster: CircleRoster,

    /// Per-circle meetup lifecycle state.
    pub spots: SpotBook,

    active_circle: CircleId,
    device_member: MemberId,

    /// Current subscription generation; samples from older generations are
    /// discarded (see [`SubscriptionId`]).
    generation: u64,

    /// The last fix that passed the guards.  Projection keeps working from
    /// this when the stream starts failing.
    last_fix: Option<LocationFix>,

    /// The surfaced-but-not-yet-dismissed positioning failure, if any.
    notice: Option<StreamError>,
}

impl Tracker {
    pub(crate) fn new(
        config: RadarConfig,
        roster: CircleRoster,
        spots: SpotBook,
        active_circle: CircleId,
        device_member: MemberId,
    ) -> Self {
        Self {
            config,
            roster,
            spots,
            active_circle,
            device_member,
            generation: 0,
            last_fix: None,
            notice: None,
        }
    }

    // ── Subscriptions ─────────────────────────────────────────────────────

    /// Open a new subscription window and return its token.  Any token from
    /// an earlier window is stale from this point on.
    pub fn subscribe(&mut self) -> SubscriptionId {
        self.generation += 1;
        debug!("opened subscription window {}", self.generation);
        SubscriptionId(self.generation)
    }

    /// Invalidate every outstanding token without opening a new window —
    /// the consuming view is tearing down.
    pub fn unsubscribe(&mut self) {
        self.generation += 1;
        debug!("closed subscription window; outstanding tokens now stale");
    }

    #[inline]
    fn is_current(&self, sub: SubscriptionId) -> bool {
        sub.0 == self.generation
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn active_circle(&self) -> CircleId {
        self.active_circle
    }

    pub fn device_member(&self) -> MemberId {
        self.device_member
    }

    /// The last fix that passed the guards, if any.
    pub fn last_fix(&self) -> Option<LocationFix> {
        self.last_fix
    }

    /// The undismissed positioning failure, if any.
    pub fn notice(&self) -> Option<StreamError> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// The `{status, arrival_time}` pair the reporting view consumes for the
    /// device member.
    pub fn device_status(&self) -> TrackerResult<(MemberStatus, Option<Timestamp>)> {
        let m = self.roster.member(self.device_member)?;
        Ok((m.status, m.arrival_time))
    }

    // ── Circle and spot changes (each one invalidates the stream) ─────────

    /// Switch the radar to another circle.  Bumps the subscription
    /// generation: samples requested for the old circle must not apply to
    /// the new one.
    pub fn set_active_circle(&mut self, circle: CircleId) -> TrackerResult<()> {
        if !self.roster.circle(circle)?.contains(self.device_member) {
            return Err(TrackerError::DeviceMemberNotInCircle {
                member: self.device_member,
                circle,
            });
        }
        self.active_circle = circle;
        self.generation += 1;
        debug!("active circle -> {circle}; stream invalidated");
        Ok(())
    }

    /// Quick-mark: rally the active circle to the device member's current
    /// position.  Starts a fresh arrival session and invalidates the stream.
    pub fn mark_spot_here(&mut self, at: Timestamp) -> TrackerResult<SpotId> {
        let here = self
            .roster
            .member(self.device_member)?
            .location
            .ok_or(TrackerError::NoKnownLocation(self.device_member))?;

        let id = self
            .spots
            .mark_here(self.active_circle, here, at, self.device_member);
        self.begin_session()?;
        info!("marked spot {id} for circle {} at {here}", self.active_circle);
        Ok(id)
    }

    /// Accept a suggested event as the active circle's meetup, recording a
    /// travel estimate from the device member's current position if known.
    pub fn accept_event(&mut self, listing: EventListing, radius_miles: f64) -> TrackerResult<SpotId> {
        let travel = self
            .roster
            .member(self.device_member)?
            .location
            .map(|loc| estimate_travel_minutes(loc.distance_miles(listing.coords)));

        let id = self
            .spots
            .accept_event(self.active_circle, listing, radius_miles, self.device_member);
        if let Some(minutes) = travel {
            self.spots.set_travel_estimate(self.active_circle, minutes)?;
        }
        self.begin_session()?;
        info!("accepted event as spot {id} for circle {}", self.active_circle);
        Ok(id)
    }

    /// Finish the active meetup and archive its spot.  Arrival state stays
    /// latched so the report still sees who showed up; the next mark resets
    /// it.
    pub fn finish_spot(&mut self) -> TrackerResult<SpotId> {
        let id = self.spots.finish(self.active_circle)?;
        self.generation += 1;
        info!("finished spot {id}; stream invalidated");
        Ok(id)
    }

    /// A new spot means a new arrival session and a fresh stream window.
    fn begin_session(&mut self) -> TrackerResult<()> {
        self.roster.reset_arrivals(self.active_circle)?;
        self.generation += 1;
        Ok(())
    }

    // ── The per-sample loop ───────────────────────────────────────────────

    /// Apply one location sample.
    ///
    /// Returns `Ok(true)` if the sample was applied, `Ok(false)` if a guard
    /// discarded it (stale subscription or invalid coordinates — both are
    /// normal events, not errors).
    pub fn apply_fix<O: TrackerObserver>(
        &mut self,
        sub: SubscriptionId,
        fix: LocationFix,
        observer: &mut O,
    ) -> TrackerResult<bool> {
        // ── Guard phase ───────────────────────────────────────────────────
        if !self.is_current(sub) {
            debug!("discarding stale sample from {sub}");
            return Ok(false);
        }
        if !fix.coords.is_valid() {
            debug!("rejecting sample with invalid coordinates {}", fix.coords);
            return Ok(false);
        }

        // ── Locate phase ──────────────────────────────────────────────────
        // A successful sample clears any standing positioning notice.
        self.notice = None;
        self.roster.set_location(self.device_member, fix.coords)?;
        self.last_fix = Some(fix);
        observer.on_fix(self.device_member, &fix);

        // ── Project + latch + emit ────────────────────────────────────────
        self.recompute(fix.at, observer)?;
        Ok(true)
    }

    /// Recompute the radar from current state without a new device sample —
    /// used after the application updates other members' snapshot locations.
    pub fn refresh<O: TrackerObserver>(
        &mut self,
        at: Timestamp,
        observer: &mut O,
    ) -> TrackerResult<()> {
        self.recompute(at, observer)
    }

    /// Record a positioning failure.  Projection is untouched — the last
    /// known fix stays in effect — but the failure is surfaced as a
    /// dismissible notice.
    pub fn stream_failed<O: TrackerObserver>(&mut self, error: StreamError, observer: &mut O) {
        warn!("positioning stream failed: {error}");
        self.notice = Some(error);
        observer.on_notice(error);
    }

    /// Drain a [`FixSource`] to exhaustion, applying fixes and surfacing
    /// failures.  Returns how many samples were actually applied.
    pub fn run<S: FixSource, O: TrackerObserver>(
        &mut self,
        sub: SubscriptionId,
        source: &mut S,
        observer: &mut O,
    ) -> TrackerResult<usize> {
        let mut applied = 0;
        while let Some(item) = source.next_fix() {
            match item {
                Ok(fix) => {
                    if self.apply_fix(sub, fix, observer)? {
                        applied += 1;
                    }
                }
                Err(e) => self.stream_failed(e, observer),
            }
        }
        Ok(applied)
    }

    fn recompute<O: TrackerObserver>(
        &mut self,
        at: Timestamp,
        observer: &mut O,
    ) -> TrackerResult<()> {
        // No active spot → the radar is off; nothing to compute or emit.
        let Some(spot) = self.spots.active(self.active_circle) else {
            return Ok(());
        };
        let (spot_id, spot_coords) = (spot.id, spot.coords);

        let located = self.roster.located_members(self.active_circle)?;
        let blips = project(spot_coords, located, &self.config);

        // Latch arrivals before emitting so the frame's consumers see status
        // and blips from the same instant.
        for blip in blips.iter().filter(|b| b.within_arrival_radius) {
            if self.roster.mark_arrived(blip.member, at)? {
                info!("member {} arrived at spot {spot_id} ({at})", blip.member);
                observer.on_arrival(blip.member, at);
            }
        }

        let frame = RadarFrame { spot: spot_id, at, blips };
        observer.on_frame(&frame);
        Ok(())
    }
}
