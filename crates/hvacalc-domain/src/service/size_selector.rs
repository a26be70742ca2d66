//! Standard Size Selector
//!
//! Maps a continuous requirement onto the smallest catalog entry whose
//! output is at least the requirement (inclusive). A requirement above the
//! largest entry is flagged out of range, never clamped silently.

use crate::constants::{FIT_EXCELLENT_MAX, FIT_GOOD_MAX};
use crate::model::SizeCatalog;
use hvacalc_types::{FitBand, SizeSelection};

/// Select a catalog size for `adjusted`, inflated by `safety_margin_pct`
/// percent before the scan
pub fn select_size(adjusted: f64, catalog: &SizeCatalog, safety_margin_pct: f64) -> SizeSelection {
    let target = adjusted * (1.0 + safety_margin_pct / 100.0);

    let found = catalog
        .sizes
        .iter()
        .copied()
        .find(|size| catalog.output_of(*size) >= target);

    let (selected_size, in_range) = match found {
        Some(size) => (size, true),
        None => (catalog.max_size().unwrap_or(0.0), false),
    };
    let selected_output = catalog.output_of(selected_size);
    let oversize_pct = oversize_fraction(selected_output, adjusted);

    SizeSelection {
        catalog: catalog.name.clone(),
        unit: catalog.unit.clone(),
        selected_size,
        selected_output,
        target,
        safety_margin_pct,
        oversize_pct,
        in_range,
        fit: fit_band(oversize_pct, in_range),
    }
}

/// `(selected_output - adjusted) / adjusted`
pub fn oversize_fraction(selected_output: f64, adjusted: f64) -> f64 {
    if adjusted > 0.0 {
        (selected_output - adjusted) / adjusted
    } else {
        0.0
    }
}

/// Fixed fit bands: <10% excellent, <20% good, otherwise oversized
pub fn fit_band(oversize_pct: f64, in_range: bool) -> FitBand {
    if !in_range {
        FitBand::OutOfRange
    } else if oversize_pct < FIT_EXCELLENT_MAX {
        FitBand::Excellent
    } else if oversize_pct < FIT_GOOD_MAX {
        FitBand::Good
    } else {
        FitBand::Oversized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tonnage() -> SizeCatalog {
        SizeCatalog::new("ac-tonnage", "ton", 12000.0, vec![1.5, 2.0, 2.5, 3.0])
    }

    fn room_ac() -> SizeCatalog {
        SizeCatalog::new(
            "room-ac-btu",
            "BTU/h",
            1.0,
            vec![5000.0, 6000.0, 8000.0, 10000.0, 12000.0],
        )
    }

    // ==========================================
    // Boundaries
    // ==========================================

    #[test]
    fn test_just_over_boundary_rounds_up() {
        let selection = select_size(24001.0, &tonnage(), 0.0);
        assert_eq!(selection.selected_size, 2.5);
        assert!(selection.in_range);
    }

    #[test]
    fn test_exact_boundary_is_inclusive() {
        let selection = select_size(24000.0, &tonnage(), 0.0);
        assert_eq!(selection.selected_size, 2.0);
        assert_eq!(selection.oversize_pct, 0.0);
        assert_eq!(selection.fit, FitBand::Excellent);
    }

    #[test]
    fn test_below_smallest_selects_smallest() {
        let selection = select_size(9000.0, &tonnage(), 0.0);
        assert_eq!(selection.selected_size, 1.5);
        // 18000 vs 9000
        assert!((selection.oversize_pct - 1.0).abs() < f64::EPSILON);
        assert_eq!(selection.fit, FitBand::Oversized);
    }

    #[test]
    fn test_exact_room_size() {
        let selection = select_size(6000.0, &room_ac(), 0.0);
        assert_eq!(selection.selected_size, 6000.0);
        assert_eq!(selection.oversize_pct, 0.0);
    }

    // ==========================================
    // Out of range
    // ==========================================

    #[test]
    fn test_above_catalog_is_flagged() {
        let selection = select_size(40000.0, &tonnage(), 0.0);
        assert!(!selection.in_range);
        assert_eq!(selection.selected_size, 3.0);
        assert_eq!(selection.fit, FitBand::OutOfRange);
        assert!(selection.oversize_pct < 0.0);
    }

    // ==========================================
    // Safety margin
    // ==========================================

    #[test]
    fn test_safety_margin_inflates_target() {
        let selection = select_size(6000.0, &room_ac(), 10.0);
        assert!((selection.target - 6600.0).abs() < 1e-9);
        assert_eq!(selection.selected_size, 8000.0);
        // oversize is measured against the unmargined requirement
        assert!((selection.oversize_pct - 2000.0 / 6000.0).abs() < 1e-12);
    }

    #[test]
    fn test_margin_can_push_out_of_range() {
        let selection = select_size(11500.0, &room_ac(), 10.0);
        assert!(!selection.in_range);
        assert_eq!(selection.selected_size, 12000.0);
    }

    // ==========================================
    // Fit bands
    // ==========================================

    #[test]
    fn test_fit_band_thresholds() {
        assert_eq!(fit_band(0.0, true), FitBand::Excellent);
        assert_eq!(fit_band(0.099, true), FitBand::Excellent);
        assert_eq!(fit_band(0.10, true), FitBand::Good);
        assert_eq!(fit_band(0.199, true), FitBand::Good);
        assert_eq!(fit_band(0.20, true), FitBand::Oversized);
        assert_eq!(fit_band(0.0, false), FitBand::OutOfRange);
    }

    #[test]
    fn test_selection_is_monotonic() {
        let catalog = tonnage();
        let mut previous = 0.0;
        for step in 0..60 {
            let requirement = 10000.0 + step as f64 * 500.0;
            let size = select_size(requirement, &catalog, 0.0).selected_size;
            assert!(size >= previous);
            previous = size;
        }
    }
}
