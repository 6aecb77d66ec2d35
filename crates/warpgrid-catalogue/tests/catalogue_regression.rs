//! Regression tests for the measure catalogue.
//!
//! These pin the grid sizes and bounds for reference datasets so that changes to
//! range generation or the literal tables cannot silently alter published grids.

use warpgrid_catalogue::{entries, lookup, CatalogueError, MSM_COST, TWE_LAMBDA, TWE_NU};
use warpgrid_space::{
    incremental_range, incremental_range_int, Flag, ParamSpace, ParamValue, SummaryStats,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn nested(space: &ParamSpace) -> &ParamSpace {
    space.axis(Flag::DistanceMeasure).unwrap().candidates()[0]
        .nested()
        .expect("measure candidate should carry params")
}

fn axis_floats(space: &ParamSpace, flag: Flag) -> Vec<f64> {
    space.axis(flag).unwrap().values().filter_map(ParamValue::as_float).collect()
}

fn axis_ints(space: &ParamSpace, flag: Flag) -> Vec<i64> {
    space.axis(flag).unwrap().values().filter_map(ParamValue::as_int).collect()
}

// ---------------------------------------------------------------------------
// a) configuration counts for a reference dataset
// ---------------------------------------------------------------------------

/// Series length 40 (41 attributes with the class slot), population sd 5.0.
#[test]
fn configuration_counts_match_reference() {
    let stats = SummaryStats::new(41, 5.0);
    let expected: [(&str, usize); 15] = [
        ("ed", 1),
        ("full-dtw", 1),
        ("full-ddtw", 1),
        ("dtw-v1", 40),
        ("dtw-v2", 41),
        ("ddtw-v1", 40),
        ("ddtw-v2", 41),
        ("wdtw-v1", 100),
        ("wdtw-v2", 101),
        ("wddtw-v1", 100),
        ("wddtw-v2", 101),
        ("lcss", 100),
        ("erp", 100),
        ("twe", 100),
        ("msm", 100),
    ];
    assert_eq!(entries().len(), expected.len());
    for (id, size) in expected {
        let space = lookup(id).unwrap().space(&stats).unwrap();
        assert_eq!(space.size(), size, "{id}");
    }
}

// ---------------------------------------------------------------------------
// b) data-driven axes scale with dataset statistics
// ---------------------------------------------------------------------------

#[test]
fn lcss_and_erp_follow_dataset_statistics() {
    let stats = SummaryStats::new(41, 5.0);
    let lcss = lookup("lcss").unwrap().space(&stats).unwrap();
    let erp = lookup("erp").unwrap().space(&stats).unwrap();

    let windows = incremental_range_int(0, 10, 10);
    let thresholds = incremental_range(1.0, 5.0, 10);

    assert_eq!(axis_ints(nested(&lcss), Flag::WindowSize), windows);
    assert_eq!(axis_floats(nested(&lcss), Flag::Epsilon), thresholds);
    assert_eq!(axis_ints(nested(&erp), Flag::WindowSize), windows);
    assert_eq!(axis_floats(nested(&erp), Flag::G), thresholds);
}

#[test]
fn short_series_collapse_band_axis() {
    // Series length 7: a quarter is 1, so the band grid is {0}.
    let stats = SummaryStats::new(8, 1.0);
    let lcss = lookup("lcss").unwrap().params(&stats).unwrap();
    assert_eq!(axis_ints(&lcss, Flag::WindowSize), vec![0]);
}

#[test]
fn dtw_window_grid_changes_with_series_length() {
    let short = lookup("dtw-v2").unwrap().params(&SummaryStats::new(11, 1.0)).unwrap();
    let long = lookup("dtw-v2").unwrap().params(&SummaryStats::new(501, 1.0)).unwrap();
    assert_eq!(axis_ints(&short, Flag::WindowSize), (0..=10).collect::<Vec<_>>());
    let long_windows = axis_ints(&long, Flag::WindowSize);
    assert_eq!(long_windows.len(), 100);
    assert_eq!(long_windows.first(), Some(&0));
    assert_eq!(long_windows.last(), Some(&500));
}

// ---------------------------------------------------------------------------
// c) fixed grids are invariant under dataset substitution
// ---------------------------------------------------------------------------

#[test]
fn fixed_grids_ignore_dataset() {
    let datasets = [
        SummaryStats::new(2, 0.0),
        SummaryStats::new(41, 5.0),
        SummaryStats::new(1025, 123.4),
    ];
    let fixed = [
        "ed", "full-dtw", "full-ddtw", "wdtw-v1", "wdtw-v2", "wddtw-v1", "wddtw-v2", "twe", "msm",
    ];
    for id in fixed {
        let entry = lookup(id).unwrap();
        let reference = entry.space(&datasets[0]).unwrap();
        for stats in &datasets[1..] {
            assert_eq!(entry.space(stats).unwrap(), reference, "{id}");
        }
    }
}

#[test]
fn literal_tables_survive_deduplication() {
    let stats = SummaryStats::new(41, 5.0);
    let twe = lookup("twe").unwrap().params(&stats).unwrap();
    let msm = lookup("msm").unwrap().params(&stats).unwrap();
    assert_eq!(axis_floats(&twe, Flag::Lambda), TWE_LAMBDA);
    assert_eq!(axis_floats(&twe, Flag::Nu), TWE_NU);
    assert_eq!(axis_floats(&msm, Flag::Cost), MSM_COST);
}

// ---------------------------------------------------------------------------
// d) measure handles
// ---------------------------------------------------------------------------

#[test]
fn measure_names_match_ids() {
    let stats = SummaryStats::new(41, 5.0);
    let expected = [
        ("ed", "ED"),
        ("full-dtw", "DTW"),
        ("full-ddtw", "DDTW"),
        ("dtw-v1", "DTW"),
        ("ddtw-v2", "DDTW"),
        ("wdtw-v1", "WDTW"),
        ("wddtw-v2", "WDDTW"),
        ("lcss", "LCSS"),
        ("erp", "ERP"),
        ("twe", "TWE"),
        ("msm", "MSM"),
    ];
    for (id, name) in expected {
        let space = lookup(id).unwrap().space(&stats).unwrap();
        let value = space.axis(Flag::DistanceMeasure).unwrap().candidates()[0].value();
        assert_eq!(value.as_measure().unwrap().name(), name, "{id}");
    }
}

// ---------------------------------------------------------------------------
// e) failures
// ---------------------------------------------------------------------------

#[test]
fn invalid_std_dev_fails_only_data_driven_entries() {
    let stats = SummaryStats::new(41, f64::NAN);
    for entry in entries() {
        let result = entry.space(&stats);
        match entry.id() {
            "lcss" | "erp" => assert!(matches!(result, Err(CatalogueError::InvalidStdDev { .. }))),
            id => assert!(result.is_ok(), "{id} should not depend on std dev"),
        }
    }
}
