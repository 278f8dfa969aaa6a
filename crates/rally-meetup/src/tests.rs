//! Unit tests for the meetup lifecycle.

use rally_core::{CircleId, EventId, GeoPoint, MemberId, Timestamp};

use crate::{estimate_travel_minutes, EventListing, SpotBook};

fn listing() -> EventListing {
    EventListing::new(
        EventId(0),
        "Saturday ride",
        "Easy 20 km loop around the park.",
        Timestamp(1_700_000_000),
        "Ibirapuera gate 3",
        "Av. Pedro Álvares Cabral",
        -23.5874,
        -46.6576,
    )
    .unwrap()
}

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn quick_mark_installs_an_active_spot() {
        let mut book = SpotBook::new();
        let circle = CircleId(0);
        let here = GeoPoint::new(-23.5617, -46.656);

        let id = book.mark_here(circle, here, Timestamp(100), MemberId(0));
        let spot = book.active(circle).expect("spot should be active");
        assert_eq!(spot.id, id);
        assert_eq!(spot.coords, here);
        assert_eq!(spot.radius_miles, 1.0);
        assert!(spot.is_confirmed(MemberId(0)), "the marker auto-confirms");
        assert!(!spot.archived);
    }

    #[test]
    fn remarking_displaces_the_previous_spot() {
        let mut book = SpotBook::new();
        let circle = CircleId(0);
        let first = book.mark_here(circle, GeoPoint::new(0.0, 0.0), Timestamp(0), MemberId(0));
        let second = book.mark_here(circle, GeoPoint::new(1.0, 1.0), Timestamp(10), MemberId(0));

        assert_ne!(first, second);
        assert_eq!(book.active(circle).unwrap().id, second);
        // The displaced spot is gone, not archived — only `finish` archives.
        assert!(book.archive().is_empty());
    }

    #[test]
    fn circles_rally_independently() {
        let mut book = SpotBook::new();
        let a = book.mark_here(CircleId(0), GeoPoint::new(0.0, 0.0), Timestamp(0), MemberId(0));
        let b = book.mark_here(CircleId(1), GeoPoint::new(5.0, 5.0), Timestamp(0), MemberId(3));
        assert_eq!(book.active(CircleId(0)).unwrap().id, a);
        assert_eq!(book.active(CircleId(1)).unwrap().id, b);
    }

    #[test]
    fn finish_archives_newest_first() {
        let mut book = SpotBook::new();
        let circle = CircleId(0);
        let first = book.mark_here(circle, GeoPoint::new(0.0, 0.0), Timestamp(0), MemberId(0));
        book.finish(circle).unwrap();
        let second = book.mark_here(circle, GeoPoint::new(1.0, 1.0), Timestamp(10), MemberId(0));
        book.finish(circle).unwrap();

        assert!(book.active(circle).is_none());
        let ids: Vec<_> = book.archive().iter().map(|s| s.id).collect();
        assert_eq!(ids, [second, first]);
        assert!(book.archive().iter().all(|s| s.archived));
        assert_eq!(book.archived_spot(first).unwrap().id, first);
    }

    #[test]
    fn finish_without_a_spot_errors() {
        let mut book = SpotBook::new();
        assert!(book.finish(CircleId(0)).is_err());
        assert!(book.archived_spot(rally_core::SpotId(9)).is_err());
    }

    #[test]
    fn confirm_deduplicates() {
        let mut book = SpotBook::new();
        let circle = CircleId(0);
        book.mark_here(circle, GeoPoint::new(0.0, 0.0), Timestamp(0), MemberId(0));

        assert!(book.confirm(circle, MemberId(1)).unwrap());
        assert!(!book.confirm(circle, MemberId(1)).unwrap());
        assert_eq!(book.active(circle).unwrap().confirmed(), [MemberId(0), MemberId(1)]);
    }
}

#[cfg(test)]
mod events {
    use super::*;

    #[test]
    fn accepting_a_listing_becomes_the_active_spot() {
        let mut book = SpotBook::new();
        let circle = CircleId(2);
        let id = book.accept_event(circle, listing(), 0.5, MemberId(7));

        let spot = book.active(circle).unwrap();
        assert_eq!(spot.id, id);
        assert_eq!(spot.title, "Saturday ride");
        assert_eq!(spot.venue_name, "Ibirapuera gate 3");
        assert_eq!(spot.radius_miles, 0.5);
        assert!(spot.is_confirmed(MemberId(7)));
    }

    #[test]
    fn listings_with_garbage_coordinates_are_rejected() {
        let bad = EventListing::new(
            EventId(1),
            "Hallucinated venue",
            "",
            Timestamp(0),
            "",
            "",
            512.0,
            f64::NAN,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn travel_estimate_lands_on_the_active_spot() {
        let mut book = SpotBook::new();
        let circle = CircleId(0);
        book.mark_here(circle, GeoPoint::new(0.0, 0.0), Timestamp(0), MemberId(0));
        book.set_travel_estimate(circle, 25).unwrap();
        assert_eq!(book.active(circle).unwrap().travel_minutes, Some(25));
    }
}

#[cfg(test)]
mod travel {
    use super::*;

    #[test]
    fn follows_the_shipped_heuristic() {
        // 15 min/mile + 10 min buffer.
        assert_eq!(estimate_travel_minutes(1.0), 25);
        assert_eq!(estimate_travel_minutes(2.0), 40);
        assert_eq!(estimate_travel_minutes(0.5), 18); // 17.5 rounds up
    }

    #[test]
    fn never_below_ten_minutes() {
        assert_eq!(estimate_travel_minutes(0.0), 10);
        assert_eq!(estimate_travel_minutes(0.001), 10);
    }
}
