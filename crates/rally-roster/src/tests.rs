//! Unit tests for the roster.

#[cfg(test)]
mod membership {
    use rally_core::{CircleId, GeoPoint, MemberId};

    use crate::CircleRoster;

    #[test]
    fn ids_are_dense_indices() {
        let mut r = CircleRoster::new();
        let a = r.add_member("Ana", "https://example.com/a.png");
        let b = r.add_member("Ricardo", "https://example.com/b.png");
        assert_eq!((a, b), (MemberId(0), MemberId(1)));
        assert_eq!(r.member(b).unwrap().name, "Ricardo");
    }

    #[test]
    fn unknown_ids_error() {
        let r = CircleRoster::new();
        assert!(r.member(MemberId(0)).is_err());
        assert!(r.circle(CircleId(0)).is_err());
    }

    #[test]
    fn join_is_idempotent() {
        let mut r = CircleRoster::new();
        let m = r.add_member("Ana", "");
        let c = r.create_circle("Friends", "fa-users", "indigo");
        r.join(c, m).unwrap();
        r.join(c, m).unwrap();
        assert_eq!(r.circle(c).unwrap().member_count(), 1);
    }

    #[test]
    fn leave_removes_from_the_circle_only() {
        let mut r = CircleRoster::new();
        let m = r.add_member("Ana", "");
        let c = r.create_circle("Friends", "fa-users", "indigo");
        r.join(c, m).unwrap();
        r.leave(c, m).unwrap();
        assert!(!r.circle(c).unwrap().contains(m));
        assert!(r.member(m).is_ok(), "leaving a circle does not delete the member");
    }

    #[test]
    fn located_members_skips_the_unlocated() {
        let mut r = CircleRoster::new();
        let a = r.add_member("Ana", "");
        let b = r.add_member("Ricardo", "");
        let c = r.create_circle("Friends", "fa-users", "indigo");
        r.join(c, a).unwrap();
        r.join(c, b).unwrap();

        r.set_location(a, GeoPoint::new(-23.56, -46.65)).unwrap();
        let located = r.located_members(c).unwrap();
        assert_eq!(located.len(), 1);
        assert_eq!(located[0].0, a);

        r.clear_location(a).unwrap();
        assert!(r.located_members(c).unwrap().is_empty());
    }
}

#[cfg(test)]
mod arrival_latch {
    use rally_core::Timestamp;

    use crate::{CircleRoster, MemberStatus};

    #[test]
    fn first_transition_latches_and_stamps() {
        let mut r = CircleRoster::new();
        let m = r.add_member("Ana", "");
        let t = Timestamp(1_700_000_000);

        assert!(r.mark_arrived(m, t).unwrap());
        let member = r.member(m).unwrap();
        assert_eq!(member.status, MemberStatus::Arrived);
        assert_eq!(member.arrival_time, Some(t));
    }

    #[test]
    fn latch_is_idempotent() {
        let mut r = CircleRoster::new();
        let m = r.add_member("Ana", "");
        let first = Timestamp(1_700_000_000);
        let later = first.offset_secs(300);

        assert!(r.mark_arrived(m, first).unwrap());
        assert!(!r.mark_arrived(m, later).unwrap());
        // The original timestamp survives.
        assert_eq!(r.member(m).unwrap().arrival_time, Some(first));
    }

    #[test]
    fn offline_does_not_demote_arrived() {
        let mut r = CircleRoster::new();
        let m = r.add_member("Ana", "");
        r.mark_arrived(m, Timestamp(10)).unwrap();
        r.set_offline(m).unwrap();
        assert_eq!(r.member(m).unwrap().status, MemberStatus::Arrived);

        let n = r.add_member("Ricardo", "");
        r.set_offline(n).unwrap();
        assert_eq!(r.member(n).unwrap().status, MemberStatus::Offline);
    }

    #[test]
    fn reset_clears_the_session() {
        let mut r = CircleRoster::new();
        let m = r.add_member("Ana", "");
        let c = r.create_circle("Friends", "fa-users", "indigo");
        r.join(c, m).unwrap();
        r.mark_arrived(m, Timestamp(10)).unwrap();

        r.reset_arrivals(c).unwrap();
        let member = r.member(m).unwrap();
        assert_eq!(member.status, MemberStatus::Active);
        assert_eq!(member.arrival_time, None);

        // And the latch can fire again for the new spot.
        assert!(r.mark_arrived(m, Timestamp(20)).unwrap());
        assert_eq!(r.member(m).unwrap().arrival_time, Some(Timestamp(20)));
    }
}

#[cfg(test)]
mod chat {
    use rally_core::{MemberId, Timestamp};

    use crate::ChatLog;

    #[test]
    fn post_assigns_sequential_ids() {
        let mut log = ChatLog::new();
        let a = log.post(MemberId(0), MemberId(1), "On my way!", Timestamp(100));
        let b = log.post(MemberId(1), MemberId(0), "See you soon.", Timestamp(160));
        assert!(a < b);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn conversation_filters_both_directions() {
        let mut log = ChatLog::new();
        let (me, friend, other) = (MemberId(0), MemberId(1), MemberId(2));
        log.post(me, friend, "Where are you?", Timestamp(100));
        log.post(friend, me, "Two blocks out.", Timestamp(130));
        log.post(me, other, "Different thread.", Timestamp(140));

        let texts: Vec<&str> = log.conversation(me, friend).map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["Where are you?", "Two blocks out."]);
    }
}
