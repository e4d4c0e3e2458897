//! Detailed tests for the region-aware geohash codec.

use geocode_id::*;
use proptest::prelude::*;

#[test]
fn test_known_encodings() {
    let test_cases = vec![
        ((37.7749, -122.4194), "82FM8"), // San Francisco
        ((40.7128, -74.0060), "VT9C4"),  // New York
        ((51.5074, -0.1278), "WFBNU"),   // London
        ((-33.8688, 151.2093), "WQ3FX"), // Sydney
        ((0.0, 0.0), "W7ZZZ"),
    ];

    for ((lat, lon), expected) in test_cases {
        assert_eq!(
            encode_geohash(lat, lon).unwrap(),
            expected,
            "Encoding mismatch for ({}, {})",
            lat,
            lon
        );
    }
}

#[test]
fn test_regional_precision_is_finer() {
    let regional = GeoHashCodec::default().decode_exact("82FM8").unwrap();
    let global = decode_geohash("WFBNU").unwrap();

    assert!(regional.latitude.error() < global.latitude.error());
    assert!(regional.longitude.error() < global.longitude.error());
}

#[test]
fn test_flag_never_inside_a_hash() {
    for lat in (-90..=90).step_by(5) {
        for lon in (-180..=180).step_by(5) {
            let hash = encode_geohash(lat as f64, lon as f64).unwrap();
            assert_eq!(hash.len(), 5);
            assert!(!hash[1..].contains(GLOBAL_FLAG), "flag inside {}", hash);

            let inside = Bounds::CONTINENTAL_US.contains(lat as f64, lon as f64);
            assert_eq!(hash.starts_with(GLOBAL_FLAG), !inside, "regime mismatch for {}", hash);
        }
    }
}

#[test]
fn test_decode_returns_ranges_and_midpoint() {
    let decoded = decode_geohash("WFBNU").unwrap();
    let [min, max, mid] = decoded.latitude.to_array();
    assert!(min <= mid && mid <= max);
    assert_eq!(mid, (min + max) / 2.0);
    assert_eq!(decoded.center().latitude, mid);
}

#[test]
fn test_neighbors_step_back() {
    let hash = encode_geohash(40.7128, -74.0060).unwrap();
    let east = neighbor(&hash, Direction::East).unwrap().unwrap();
    assert_eq!(neighbor(&east, Direction::West).unwrap(), Some(hash.clone()));

    let north = neighbor(&hash, Direction::North).unwrap().unwrap();
    assert_eq!(neighbor(&north, Direction::South).unwrap(), Some(hash));
}

#[test]
fn test_neighbor_cells_touch() {
    let codec = GeoHashCodec::default();
    let center = codec.decode_exact("82FM8").unwrap();
    let east = codec
        .decode_exact(&neighbor("82FM8", Direction::East).unwrap().unwrap())
        .unwrap();

    assert_eq!(center.longitude.max, east.longitude.min);
    assert_eq!(center.latitude.to_array(), east.latitude.to_array());
}

proptest! {
    #[test]
    fn prop_encoded_cell_contains_coordinate(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
        let codec = GeoHashCodec::default();
        let hash = codec.encode(lat, lon).unwrap();
        prop_assert_eq!(hash.len(), 5);

        let cell = codec.decode_exact(&hash).unwrap();
        prop_assert!(cell.contains(lat, lon), "{} does not contain ({}, {})", hash, lat, lon);

        // A global cell near the region edge can have its center inside the
        // region, so only regional cells are guaranteed to re-encode to themselves.
        if !hash.starts_with(GLOBAL_FLAG) {
            let center = cell.center();
            prop_assert_eq!(codec.encode(center.latitude, center.longitude).unwrap(), hash);
        }
    }

    #[test]
    fn prop_normalize_is_idempotent(input in ".{0,40}") {
        let once = normalize_geohash(&input);
        prop_assert_eq!(normalize_geohash(&once), once.clone());
        prop_assert!(once.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn prop_out_of_range_rejected(lat in 90.0001f64..1.0e6, lon in -180.0f64..=180.0) {
        let is_invalid_coordinate = matches!(encode_geohash(lat, lon), Err(GeoIdError::InvalidCoordinate { .. }));
        prop_assert!(is_invalid_coordinate);
        let is_invalid_coordinate = matches!(encode_geohash(-lat, lon), Err(GeoIdError::InvalidCoordinate { .. }));
        prop_assert!(is_invalid_coordinate);
    }
}
