use eqpreset_formats::steinberg::{
    BandMode1And8, BandMode2To7, BandParam, Channel, SteinbergFrequency,
};
use eqpreset_formats::{AbletonBandMode, AbletonEq8};

use crate::error::Result;
use crate::require_stereo;

/// Frequency band type for an EQ Eight mode in `slot`.
///
/// Slots 1 and 8 have their own enumeration with cut filters. Interior
/// slots cannot cut and get a Peak instead.
pub fn frequency_type(mode: AbletonBandMode, slot: usize) -> f64 {
    if slot == 1 || slot == 8 {
        let outer = match mode {
            AbletonBandMode::LowCut48 | AbletonBandMode::HighCut48 => BandMode1And8::Cut48,
            AbletonBandMode::LowCut12 | AbletonBandMode::HighCut12 => BandMode1And8::Cut12,
            AbletonBandMode::LeftShelf => BandMode1And8::LowShelf,
            AbletonBandMode::Bell => BandMode1And8::Peak,
            AbletonBandMode::Notch => BandMode1And8::Notch,
            AbletonBandMode::RightShelf => BandMode1And8::HighShelf,
        };
        outer.value()
    } else {
        let inner = match mode {
            AbletonBandMode::LeftShelf => BandMode2To7::LowShelf,
            AbletonBandMode::Notch => BandMode2To7::Notch,
            AbletonBandMode::RightShelf => BandMode2To7::HighShelf,
            AbletonBandMode::Bell
            | AbletonBandMode::LowCut48
            | AbletonBandMode::LowCut12
            | AbletonBandMode::HighCut12
            | AbletonBandMode::HighCut48 => BandMode2To7::Peak,
        };
        inner.value()
    }
}

/// Map the eight `ParameterA` bands of an EQ Eight onto Frequency slots 1..=8.
///
/// Band number `n` lands in slot `n + 1`. `ParameterB` bands are ignored.
///
/// # Errors
/// `UnsupportedChannelMode` unless the source is Stereo, and `Format` for a
/// band number outside 0..=7.
pub fn ableton_to_frequency(eq: &AbletonEq8) -> Result<SteinbergFrequency> {
    require_stereo(eq)?;

    let mut frequency = SteinbergFrequency::with_bands_off();
    for band in eq.primary_bands() {
        let slot = band.number as usize + 1;
        log::debug!(
            "EQ Eight band {} ({:?}) -> slot {slot}",
            band.number,
            band.mode
        );

        let band_on = if band.is_on { 1.0 } else { 0.0 };
        let band_type = frequency_type(band.mode, slot);
        frequency.set_param_value(BandParam::BandOn, Channel::One, slot, band_on)?;
        frequency.set_param_value(BandParam::Gain, Channel::One, slot, band.gain)?;
        frequency.set_param_value(BandParam::Freq, Channel::One, slot, band.freq)?;
        frequency.set_param_value(BandParam::Q, Channel::One, slot, band.q)?;
        frequency.set_param_value(BandParam::Type, Channel::One, slot, band_type)?;
    }
    Ok(frequency)
}
