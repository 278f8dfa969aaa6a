//! Unit tests for the radar projection.

use rally_core::{GeoPoint, MemberId};

use crate::{bearing_proxy, project, RadarConfig};

fn cfg() -> RadarConfig {
    RadarConfig::default()
}

#[cfg(test)]
mod config {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_app() {
        let c = cfg();
        assert_eq!(c.max_distance_miles, 1.0);
        assert_eq!(c.arrival_threshold_miles, 0.03);
        assert_eq!(c.disc_diameter, 300.0);
        assert_eq!(c.disc_radius(), 150.0);
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(cfg().validate().is_ok());
    }

    #[test]
    fn validate_rejects_nonsense() {
        let mut c = cfg();
        c.max_distance_miles = -1.0;
        assert!(c.validate().is_err());

        let mut c = cfg();
        c.arrival_threshold_miles = f64::NAN;
        assert!(c.validate().is_err());

        let mut c = cfg();
        c.disc_diameter = 0.0;
        assert!(c.validate().is_err());
    }
}

#[cfg(test)]
mod filtering {
    use super::*;

    #[test]
    fn member_beyond_max_distance_is_absent() {
        // ~69 miles due north of the spot with a 1-mile radar.
        let spot = GeoPoint::new(40.0, -73.0);
        let far = GeoPoint::new(41.0, -73.0);
        let blips = project(spot, [(MemberId(0), far)], &cfg());
        assert!(blips.is_empty());
    }

    #[test]
    fn member_at_the_spot_sits_at_disc_center() {
        let spot = GeoPoint::new(40.0, -73.0);
        let blips = project(spot, [(MemberId(3), spot)], &cfg());
        assert_eq!(blips.len(), 1);
        let b = &blips[0];
        assert_eq!(b.distance_miles, 0.0);
        assert_eq!((b.x, b.y), (150.0, 150.0));
        assert!(b.within_arrival_radius);
    }

    #[test]
    fn boundary_distance_is_inclusive_and_lands_on_the_edge() {
        let spot = GeoPoint::new(0.0, 0.0);
        // 1 degree of latitude ≈ 69.09 mi, so 1 mile ≈ 0.014475 degrees.
        // Binary-search the exact filter boundary instead of trusting a
        // hand-computed constant.
        let mut lo = 0.014;
        let mut hi = 0.015;
        for _ in 0..60 {
            let mid = (lo + hi) / 2.0;
            let d = spot.distance_miles(GeoPoint::new(mid, 0.0));
            if d <= 1.0 { lo = mid } else { hi = mid }
        }
        let edge = GeoPoint::new(lo, 0.0);
        let blips = project(spot, [(MemberId(0), edge)], &cfg());
        assert_eq!(blips.len(), 1);
        let r = ((blips[0].x - 150.0).powi(2) + (blips[0].y - 150.0).powi(2)).sqrt();
        assert!((r - 150.0).abs() < 1e-3, "edge member should sit on the rim, r = {r}");
    }

    #[test]
    fn all_projected_radii_stay_within_the_disc() {
        let spot = GeoPoint::new(-23.5617, -46.656);
        let members: Vec<(MemberId, GeoPoint)> = (0..50)
            .map(|i| {
                let f = i as f64;
                (
                    MemberId(i),
                    GeoPoint::new(spot.lat + 0.0003 * f, spot.lon - 0.0002 * f),
                )
            })
            .collect();
        for b in project(spot, members, &cfg()) {
            let r = ((b.x - 150.0).powi(2) + (b.y - 150.0).powi(2)).sqrt();
            assert!(r <= 150.0 + 1e-9, "member {} escaped the disc, r = {r}", b.member);
        }
    }

    #[test]
    fn zero_max_distance_admits_only_exact_matches() {
        let spot = GeoPoint::new(10.0, 10.0);
        let near = GeoPoint::new(10.00001, 10.0);
        let mut c = cfg();
        c.max_distance_miles = 0.0;

        let blips = project(spot, [(MemberId(0), spot), (MemberId(1), near)], &c);
        assert_eq!(blips.len(), 1);
        assert_eq!(blips[0].member, MemberId(0));
        // No division by zero: the lone survivor is pinned to the center.
        assert_eq!((blips[0].x, blips[0].y), (150.0, 150.0));
    }
}

#[cfg(test)]
mod angles {
    use super::*;

    #[test]
    fn due_north_points_up() {
        let spot = GeoPoint::new(0.0, 0.0);
        let north = GeoPoint::new(0.005, 0.0);
        let blips = project(spot, [(MemberId(0), north)], &cfg());
        let b = &blips[0];
        assert!((b.x - 150.0).abs() < 1e-9, "north member should not drift sideways");
        assert!(b.y < 150.0, "north is up, y decreases");
    }

    #[test]
    fn due_east_points_right() {
        let spot = GeoPoint::new(0.0, 0.0);
        let east = GeoPoint::new(0.0, 0.005);
        let blips = project(spot, [(MemberId(0), east)], &cfg());
        let b = &blips[0];
        assert!(b.x > 150.0);
        assert!((b.y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn opposite_bearings_reflect_through_the_center() {
        let spot = GeoPoint::new(40.0, -73.0);
        let north = GeoPoint::new(40.004, -73.0);
        let south = GeoPoint::new(39.996, -73.0);
        let blips = project(spot, [(MemberId(0), north), (MemberId(1), south)], &cfg());
        assert_eq!(blips.len(), 2);
        let (n, s) = (&blips[0], &blips[1]);
        assert!((n.x + s.x - 300.0).abs() < 1e-6);
        assert!((n.y + s.y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn bearing_proxy_quadrants() {
        use std::f64::consts::FRAC_PI_2;
        let o = GeoPoint::new(0.0, 0.0);
        assert!((bearing_proxy(o, GeoPoint::new(1.0, 0.0)) - 0.0).abs() < 1e-12);
        assert!((bearing_proxy(o, GeoPoint::new(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-12);
        assert!((bearing_proxy(o, GeoPoint::new(-1.0, 0.0)).abs() - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn longitude_is_flattened_by_origin_latitude() {
        // At 60° latitude cos(lat) = 0.5: a longitude step east reads as a
        // shallower angle than the same step at the equator.
        let equator = bearing_proxy(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.01, 0.01));
        let high = bearing_proxy(GeoPoint::new(60.0, 0.0), GeoPoint::new(60.01, 0.01));
        assert!(high < equator);
    }
}

#[cfg(test)]
mod arrival {
    use super::*;

    #[test]
    fn equator_longitude_hairsbreadth_is_arrived() {
        // 0.01° of longitude at the equator ≈ 0.69 mi — in range but not
        // arrived; 0.0004° ≈ 0.028 mi — inside the default threshold.
        let spot = GeoPoint::new(0.0, 0.0);
        let close = GeoPoint::new(0.0, 0.0004);
        let nearby = GeoPoint::new(0.0, 0.01);

        let blips = project(spot, [(MemberId(0), close), (MemberId(1), nearby)], &cfg());
        assert_eq!(blips.len(), 2);
        assert!(blips[0].within_arrival_radius);
        assert!(!blips[1].within_arrival_radius);
    }

    #[test]
    fn threshold_is_strict() {
        let spot = GeoPoint::new(0.0, 0.0);
        let mut c = cfg();
        // Pick a member at a known distance and set the threshold exactly there.
        let m = GeoPoint::new(0.0004, 0.0);
        let d = spot.distance_miles(m);
        c.arrival_threshold_miles = d;
        let blips = project(spot, [(MemberId(0), m)], &c);
        assert!(!blips[0].within_arrival_radius, "classification uses <, not <=");
    }

    #[test]
    fn deterministic_and_duplicate_free() {
        let spot = GeoPoint::new(-23.5617, -46.656);
        let members = [
            (MemberId(0), GeoPoint::new(-23.5610, -46.6555)),
            (MemberId(1), GeoPoint::new(-23.5620, -46.6565)),
        ];
        let a = project(spot, members, &cfg());
        let b = project(spot, members, &cfg());
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert_ne!(a[0].member, a[1].member);
    }
}
