//! The owning store for members and circles.

use rally_core::{CircleId, GeoPoint, MemberId, RallyError, RallyResult, Timestamp};

use crate::{FriendCircle, Member, MemberStatus};

/// Owns every member and every circle.
///
/// IDs are indices into the two tables, handed out densely by the `add_*`
/// constructors.  Plain `Vec`s of structs, not SoA arrays: a roster holds
/// dozens of people, so layout games buy nothing here.
#[derive(Default)]
pub struct CircleRoster {
    members: Vec<Member>,
    circles: Vec<FriendCircle>,
}

impl CircleRoster {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Members ───────────────────────────────────────────────────────────

    /// Register a person and return their identity.
    pub fn add_member(&mut self, name: impl Into<String>, avatar_url: impl Into<String>) -> MemberId {
        let id = MemberId(self.members.len() as u32);
        self.members.push(Member::new(id, name, avatar_url));
        id
    }

    pub fn member(&self, id: MemberId) -> RallyResult<&Member> {
        self.members
            .get(id.index())
            .ok_or(RallyError::MemberNotFound(id))
    }

    fn member_mut(&mut self, id: MemberId) -> RallyResult<&mut Member> {
        self.members
            .get_mut(id.index())
            .ok_or(RallyError::MemberNotFound(id))
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    // ── Circles ───────────────────────────────────────────────────────────

    /// Create a circle and return its identity.
    pub fn create_circle(
        &mut self,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> CircleId {
        let id = CircleId(self.circles.len() as u16);
        self.circles.push(FriendCircle::new(id, name, icon, color));
        id
    }

    pub fn circle(&self, id: CircleId) -> RallyResult<&FriendCircle> {
        self.circles
            .get(id.index())
            .ok_or(RallyError::CircleNotFound(id))
    }

    pub fn circle_count(&self) -> usize {
        self.circles.len()
    }

    /// Put `member` in `circle`.  Idempotent — joining twice is a no-op.
    pub fn join(&mut self, circle: CircleId, member: MemberId) -> RallyResult<()> {
        self.member(member)?;
        let c = self
            .circles
            .get_mut(circle.index())
            .ok_or(RallyError::CircleNotFound(circle))?;
        c.add(member);
        Ok(())
    }

    pub fn leave(&mut self, circle: CircleId, member: MemberId) -> RallyResult<()> {
        let c = self
            .circles
            .get_mut(circle.index())
            .ok_or(RallyError::CircleNotFound(circle))?;
        c.remove(member);
        Ok(())
    }

    /// Borrow the full `Member` for everyone in `circle`, in join order.
    pub fn circle_members(&self, circle: CircleId) -> RallyResult<Vec<&Member>> {
        let c = self.circle(circle)?;
        Ok(c.members().iter().map(|&m| &self.members[m.index()]).collect())
    }

    /// `(id, location)` pairs for every circle member with a known location —
    /// the radar projector's input.  Inclusion is location-only: an `Offline`
    /// member's stale fix still projects; status never gates the disc.
    pub fn located_members(&self, circle: CircleId) -> RallyResult<Vec<(MemberId, GeoPoint)>> {
        let c = self.circle(circle)?;
        Ok(c.members()
            .iter()
            .filter_map(|&m| self.members[m.index()].location.map(|loc| (m, loc)))
            .collect())
    }

    // ── Location and status mutation ──────────────────────────────────────

    /// Record `member`'s latest known position.
    pub fn set_location(&mut self, member: MemberId, location: GeoPoint) -> RallyResult<()> {
        self.member_mut(member)?.location = Some(location);
        Ok(())
    }

    pub fn clear_location(&mut self, member: MemberId) -> RallyResult<()> {
        self.member_mut(member)?.location = None;
        Ok(())
    }

    /// Flag a member as no longer delivering updates.  An `Arrived` member
    /// stays `Arrived` — presence at the spot outranks connectivity.
    pub fn set_offline(&mut self, member: MemberId) -> RallyResult<()> {
        let m = self.member_mut(member)?;
        if m.status != MemberStatus::Arrived {
            m.status = MemberStatus::Offline;
        }
        Ok(())
    }

    /// The arrival latch.  Returns `true` only on the first transition;
    /// the arrival time is stamped then and never overwritten.
    pub fn mark_arrived(&mut self, member: MemberId, at: Timestamp) -> RallyResult<bool> {
        let m = self.member_mut(member)?;
        if m.status == MemberStatus::Arrived {
            return Ok(false);
        }
        m.status = MemberStatus::Arrived;
        m.arrival_time = Some(at);
        Ok(true)
    }

    /// Session boundary: the circle is rallying toward a new spot, so arrival
    /// state from the previous one no longer applies.
    pub fn reset_arrivals(&mut self, circle: CircleId) -> RallyResult<()> {
        let ids: Vec<MemberId> = self.circle(circle)?.members().to_vec();
        for id in ids {
            let m = &mut self.members[id.index()];
            if m.status == MemberStatus::Arrived {
                m.status = MemberStatus::Active;
            }
            m.arrival_time = None;
        }
        Ok(())
    }
}
