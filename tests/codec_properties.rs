//! Property-based tests for the polyline codec.
//!
//! Invariants asserted for all valid inputs:
//!
//! - **Round-trip fidelity:** decoding an encoded shape recovers every point
//!   within the precision's rounding tolerance.
//! - **Length preservation:** decode returns exactly one point per input
//!   point.
//! - **Determinism:** encoding is a pure function of its arguments.
//! - **Alphabet:** encoded output stays within printable ASCII 63-126.

use proptest::prelude::*;

use polyroute::polyline;

fn coordinate() -> impl Strategy<Value = (f64, f64)> {
    (-90.0f64..=90.0, -180.0f64..=180.0)
}

fn shape() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec(coordinate(), 0..50)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn roundtrip_within_tolerance(points in shape(), precision in 0u32..=9) {
        let encoded = polyline::encode(&points, precision).unwrap();
        let decoded = polyline::decode(&encoded, precision).unwrap();
        prop_assert_eq!(decoded.len(), points.len());

        // Rounding can move each component by at most half a fixed-point
        // unit; allow a sliver for float scaling error on top.
        let tolerance = 0.5 / 10f64.powi(precision as i32) * 1.0001;
        for ((lat, lng), (dlat, dlng)) in points.iter().zip(decoded.iter()) {
            prop_assert!((lat - dlat).abs() <= tolerance,
                "lat {} decoded as {} at precision {}", lat, dlat, precision);
            prop_assert!((lng - dlng).abs() <= tolerance,
                "lng {} decoded as {} at precision {}", lng, dlng, precision);
        }
    }

    #[test]
    fn encode_is_deterministic(points in shape(), precision in 0u32..=9) {
        let first = polyline::encode(&points, precision).unwrap();
        let second = polyline::encode(&points, precision).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn output_stays_in_alphabet(points in shape(), precision in 0u32..=9) {
        let encoded = polyline::encode(&points, precision).unwrap();
        prop_assert!(encoded.bytes().all(|b| (63..=126).contains(&b)));
    }

    #[test]
    fn empty_only_for_empty_input(points in shape(), precision in 0u32..=9) {
        let encoded = polyline::encode(&points, precision).unwrap();
        prop_assert_eq!(encoded.is_empty(), points.is_empty());
    }

    #[test]
    fn reencode_is_stable(points in shape(), precision in 0u32..=9) {
        // Once a shape has been through the codec it sits exactly on the
        // fixed-point lattice, so a second round-trip is lossless.
        let decoded = polyline::decode(
            &polyline::encode(&points, precision).unwrap(),
            precision,
        ).unwrap();
        let reencoded = polyline::encode(&decoded, precision).unwrap();
        let redecoded = polyline::decode(&reencoded, precision).unwrap();
        prop_assert_eq!(decoded, redecoded);
    }
}
