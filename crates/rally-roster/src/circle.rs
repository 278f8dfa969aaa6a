//! A named group of members.

use rally_core::{CircleId, MemberId};

/// A friend circle: display metadata plus the member list it owns.
///
/// The member list holds identities only — member state lives in the
/// roster's member table, and everything else (chat, reports, the spot book)
/// refers to members by `MemberId` without duplicating ownership.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FriendCircle {
    pub id: CircleId,
    pub name: String,
    /// Icon slug for the circle list (e.g. `fa-users`).
    pub icon: String,
    /// Accent colour slug for the circle list (e.g. `indigo`).
    pub color: String,
    members: Vec<MemberId>,
}

impl FriendCircle {
    pub(crate) fn new(
        id: CircleId,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            members: Vec::new(),
        }
    }

    /// Member identities in join order.
    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    pub fn contains(&self, member: MemberId) -> bool {
        self.members.contains(&member)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Add `member`; a no-op if already present (the list holds no duplicates).
    pub(crate) fn add(&mut self, member: MemberId) {
        if !self.members.contains(&member) {
            self.members.push(member);
        }
    }

    pub(crate) fn remove(&mut self, member: MemberId) {
        self.members.retain(|&m| m != member);
    }
}
