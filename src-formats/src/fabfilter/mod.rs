//! FabFilter Pro-Q 1/2/3 binary state.
//!
//! All three generations store a flat `f32` parameter array: 24 band slots
//! followed by a tail of global settings. Frequency and Q are kept in a
//! logarithmic "native" form; normalized 0..1 values appear when the state is
//! carried as plain VST2 program parameters.

use serde::Serialize;
use std::fmt;

/// Per-generation layout tables
pub mod layout;
/// Decode and encode of the parameter array and its wire forms
pub mod proq;

pub use layout::{ProQFamily, ProQLayout};
pub use proq::ProQPreset;

/// Number of band slots in every Pro-Q generation
pub const BAND_SLOTS: usize = 24;

/// Hz to native frequency
pub fn frequency_to_native(hz: f64) -> f64 {
    hz.log2()
}

/// Native frequency to Hz
pub fn native_to_frequency(value: f64) -> f64 {
    2f64.powf(value)
}

fn q_scale() -> f64 {
    1.0 / (40.0f64 / 0.025).log10()
}

/// Q to native, maps the 0.025..40 range onto 0..1
pub fn q_to_native(q: f64) -> f64 {
    q.log10() * q_scale() + 0.5
}

/// Native Q back to Q
pub fn native_to_q(value: f64) -> f64 {
    10f64.powf((value - 0.5) / q_scale())
}

/// Normalized 0..1 frequency parameter to native frequency
pub fn normalized_to_frequency(normalized: f64) -> f64 {
    11.550746344 * normalized + 10f64.log2()
}

/// Affine map of a 0..1 value onto `min..max`
pub fn rescale(value: f64, min: f64, max: f64) -> f64 {
    min + value * (max - min)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Filter shape, with ordinals shared by every generation
///
/// Pro-Q uses the first six, Pro-Q 2 the first eight and Pro-Q 3 all nine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BandShape {
    #[default]
    Bell,
    LowShelf,
    LowCut,
    HighShelf,
    HighCut,
    Notch,
    BandPass,
    TiltShelf,
    FlatTilt,
}

impl BandShape {
    pub const ALL: [BandShape; 9] = [
        BandShape::Bell,
        BandShape::LowShelf,
        BandShape::LowCut,
        BandShape::HighShelf,
        BandShape::HighCut,
        BandShape::Notch,
        BandShape::BandPass,
        BandShape::TiltShelf,
        BandShape::FlatTilt,
    ];

    pub fn is_cut(self) -> bool {
        matches!(self, BandShape::LowCut | BandShape::HighCut)
    }
}

/// Cut filter slope in dB/oct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CutSlope {
    Slope6,
    Slope12,
    Slope18,
    #[default]
    Slope24,
    Slope30,
    Slope36,
    Slope48,
    Slope72,
    Slope96,
    Brickwall,
}

impl CutSlope {
    /// Steepness in dB/oct, `None` for brickwall.
    pub fn db_per_octave(self) -> Option<u32> {
        match self {
            CutSlope::Slope6 => Some(6),
            CutSlope::Slope12 => Some(12),
            CutSlope::Slope18 => Some(18),
            CutSlope::Slope24 => Some(24),
            CutSlope::Slope30 => Some(30),
            CutSlope::Slope36 => Some(36),
            CutSlope::Slope48 => Some(48),
            CutSlope::Slope72 => Some(72),
            CutSlope::Slope96 => Some(96),
            CutSlope::Brickwall => None,
        }
    }
}

/// Which part of the signal a band processes
///
/// `LeftOrMid` and `RightOrSide` follow the preset channel mode on Pro-Q and
/// Pro-Q 2. Pro-Q 3 reads them as plain Left and Right and has explicit
/// `Mid` and `Side` placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum StereoPlacement {
    LeftOrMid,
    RightOrSide,
    #[default]
    Stereo,
    Mid,
    Side,
}

/// Global channel mode of Pro-Q and Pro-Q 2 presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ChannelMode {
    #[default]
    LeftRight,
    MidSide,
}

/// One Pro-Q band in plain units (Hz, dB, Q)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FabFilterBand {
    pub enabled: bool,
    pub frequency: f64,
    pub gain: f64,
    pub q: f64,
    pub shape: BandShape,
    pub slope: CutSlope,
    pub placement: StereoPlacement,
    pub channel_mode: ChannelMode,
    /// Pro-Q 3 only
    pub dynamic_range: f64,
    /// Pro-Q 3 only, 1 means auto
    pub dynamic_threshold: f64,
}

impl Default for FabFilterBand {
    fn default() -> Self {
        Self {
            enabled: false,
            frequency: 1000.0,
            gain: 0.0,
            q: 1.0,
            shape: BandShape::Bell,
            slope: CutSlope::Slope24,
            placement: StereoPlacement::Stereo,
            channel_mode: ChannelMode::LeftRight,
            dynamic_range: 0.0,
            dynamic_threshold: 1.0,
        }
    }
}

impl FabFilterBand {
    /// An enabled band of the given shape
    pub fn new(shape: BandShape, frequency: f64, gain: f64, q: f64) -> Self {
        Self {
            enabled: true,
            frequency,
            gain,
            q,
            shape,
            ..Default::default()
        }
    }

    pub fn with_slope(mut self, slope: CutSlope) -> Self {
        self.slope = slope;
        self
    }

    pub fn with_placement(mut self, placement: StereoPlacement) -> Self {
        self.placement = placement;
        self
    }
}

impl fmt::Display for FabFilterBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {:?} | {:?} @ {:.1} Hz | Gain: {:.1} dB | Q: {:.2}",
            if self.enabled { "Enabled" } else { "Disabled" },
            self.placement,
            self.shape,
            self.frequency,
            self.gain,
            self.q,
        )?;
        if self.shape.is_cut() {
            match self.slope.db_per_octave() {
                Some(db) => write!(f, " | {db} dB/oct")?,
                None => write!(f, " | Brickwall")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_native_values() {
        assert!((frequency_to_native(1000.0) - 9.965784284662087).abs() < 1e-12);
        assert!((q_to_native(1.0) - 0.5).abs() < 1e-12);
        assert!((q_to_native(40.0) - 1.0).abs() < 1e-12);
        assert!(q_to_native(0.025).abs() < 1e-12);
        assert!((native_to_frequency(normalized_to_frequency(0.0)) - 10.0).abs() < 1e-9);
        assert!((native_to_frequency(normalized_to_frequency(1.0)) - 30000.0).abs() < 1.0);
    }

    #[test]
    fn test_rescale() {
        assert_eq!(rescale(0.5, -1.0, 1.0), 0.0);
        assert_eq!(rescale(1.0, 0.0, 4.0), 4.0);
        assert_eq!(rescale(0.0, -1.0, 23.0), -1.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(999.99994), 1000.0);
        assert_eq!(round2(0.7071), 0.71);
        assert_eq!(round2(-2.345001), -2.35);
    }

    #[test]
    fn test_band_display() {
        let band =
            FabFilterBand::new(BandShape::LowCut, 80.0, 0.0, 0.71).with_slope(CutSlope::Slope48);
        assert_eq!(
            band.to_string(),
            "Enabled | Stereo | LowCut @ 80.0 Hz | Gain: 0.0 dB | Q: 0.71 | 48 dB/oct"
        );
        let band = band.with_slope(CutSlope::Brickwall);
        assert!(band.to_string().ends_with("| Brickwall"));
    }

    #[test]
    fn test_slope_only_shown_for_cuts() {
        let band = FabFilterBand::new(BandShape::Bell, 1000.0, -2.5, 1.0);
        assert_eq!(
            band.to_string(),
            "Enabled | Stereo | Bell @ 1000.0 Hz | Gain: -2.5 dB | Q: 1.00"
        );
    }
}
