use eqpreset_formats::fabfilter::{BandShape, CutSlope, FabFilterBand, ProQFamily};
use eqpreset_formats::{AbletonBandMode, AbletonEq8, ProQPreset};

use crate::error::Result;
use crate::require_stereo;

fn proq3_band(mode: AbletonBandMode, freq: f64, gain: f64, q: f64) -> FabFilterBand {
    let (shape, slope) = match mode {
        AbletonBandMode::LowCut48 => (BandShape::LowCut, Some(CutSlope::Slope48)),
        AbletonBandMode::LowCut12 => (BandShape::LowCut, Some(CutSlope::Slope12)),
        AbletonBandMode::LeftShelf => (BandShape::LowShelf, None),
        AbletonBandMode::Bell => (BandShape::Bell, None),
        AbletonBandMode::Notch => (BandShape::Notch, None),
        AbletonBandMode::RightShelf => (BandShape::HighShelf, None),
        AbletonBandMode::HighCut12 => (BandShape::HighCut, Some(CutSlope::Slope12)),
        AbletonBandMode::HighCut48 => (BandShape::HighCut, Some(CutSlope::Slope48)),
    };
    let band = FabFilterBand::new(shape, freq, gain, q);
    match slope {
        Some(slope) => band.with_slope(slope),
        None => band,
    }
}

/// Convert the `ParameterA` bands of an EQ Eight into a Pro-Q 3 preset.
///
/// Bands keep their on/off state and EQ Eight order. The Pro-Q 3 tail is
/// the plug-in default.
pub fn ableton_to_proq3(eq: &AbletonEq8) -> Result<ProQPreset> {
    require_stereo(eq)?;

    let mut preset = ProQPreset::new(ProQFamily::ProQ3);
    preset.bands = eq
        .primary_bands()
        .into_iter()
        .map(|b| FabFilterBand {
            enabled: b.is_on,
            ..proq3_band(b.mode, b.freq, b.gain, b.q)
        })
        .collect();
    log::debug!("EQ Eight -> Pro-Q 3 with {} bands", preset.bands.len());
    Ok(preset)
}
