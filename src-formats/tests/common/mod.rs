//! Shared helpers for the format integration tests

#![allow(dead_code)]

use eqpreset_formats::fabfilter::{BandShape, CutSlope, FabFilterBand, StereoPlacement};

/// `n` log-spaced points between `lo` and `hi`, both included
pub fn log_sweep(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let (a, b) = (lo.ln(), hi.ln());
    (0..n)
        .map(|i| (a + (b - a) * i as f64 / (n - 1) as f64).exp())
        .collect()
}

pub fn relative_error(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

/// A small mix of shapes used across tests
pub fn mixed_bands() -> Vec<FabFilterBand> {
    vec![
        FabFilterBand::new(BandShape::LowCut, 40.0, 0.0, 0.71).with_slope(CutSlope::Slope12),
        FabFilterBand::new(BandShape::LowShelf, 120.0, 3.0, 0.7),
        FabFilterBand::new(BandShape::Bell, 450.0, -4.25, 2.5)
            .with_placement(StereoPlacement::LeftOrMid),
        FabFilterBand::new(BandShape::Notch, 3000.0, 0.0, 8.0),
        FabFilterBand::new(BandShape::HighCut, 16000.0, 0.0, 1.0).with_slope(CutSlope::Slope48),
    ]
}
