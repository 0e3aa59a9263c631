//! Pro-Q (any generation) to Steinberg Frequency.
//!
//! Frequency has eight fixed slots. Slot 1 is the only place for a low cut
//! and slot 8 the only place for a high cut, so the first band of each cut
//! kind is pinned there. Every other enabled band competes for the interior
//! slots: when there are too many, the loudest ones (by absolute gain) are
//! kept, and the survivors are laid out by ascending frequency.

use eqpreset_formats::ProQPreset;
use eqpreset_formats::fabfilter::{
    BandShape, ChannelMode, CutSlope, FabFilterBand, StereoPlacement,
};
use eqpreset_formats::steinberg::{
    BAND_COUNT, BandMode1And8, BandMode2To7, BandParam, Channel, FrequencyChannelMode,
    SteinbergFrequency,
};

use crate::error::Result;

/// Frequency cut type for a Pro-Q slope. Slopes Frequency lacks fall back to Cut12.
pub fn cut_type(slope: CutSlope) -> BandMode1And8 {
    match slope {
        CutSlope::Slope6 => BandMode1And8::Cut6,
        CutSlope::Slope12 => BandMode1And8::Cut12,
        CutSlope::Slope24 => BandMode1And8::Cut24,
        CutSlope::Slope48 => BandMode1And8::Cut48,
        CutSlope::Slope72 | CutSlope::Slope96 => BandMode1And8::Cut96,
        _ => BandMode1And8::Cut12,
    }
}

/// Frequency band type for `band` placed in `slot`.
pub fn frequency_type(band: &FabFilterBand, slot: usize) -> f64 {
    if slot == 1 || slot == BAND_COUNT {
        let outer = match band.shape {
            BandShape::LowCut | BandShape::HighCut => cut_type(band.slope),
            BandShape::LowShelf => BandMode1And8::LowShelf,
            BandShape::HighShelf => BandMode1And8::HighShelf,
            BandShape::Notch => BandMode1And8::Notch,
            BandShape::Bell | BandShape::BandPass | BandShape::TiltShelf | BandShape::FlatTilt => {
                BandMode1And8::Peak
            }
        };
        outer.value()
    } else {
        let inner = match band.shape {
            BandShape::LowShelf => BandMode2To7::LowShelf,
            BandShape::HighShelf => BandMode2To7::HighShelf,
            BandShape::Notch => BandMode2To7::Notch,
            _ => BandMode2To7::Peak,
        };
        inner.value()
    }
}

/// Reduce the interior pool to `capacity` bands and order them by frequency.
///
/// Selection keeps the largest absolute gains. Ties keep source order.
pub fn select_interior(pool: Vec<&FabFilterBand>, capacity: usize) -> Vec<&FabFilterBand> {
    let mut selected = pool;
    if selected.len() > capacity {
        log::warn!(
            "Frequency has room for {capacity} interior bands, dropping {} with the smallest gain",
            selected.len() - capacity
        );
        selected.sort_by(|a, b| b.gain.abs().total_cmp(&a.gain.abs()));
        selected.truncate(capacity);
    }
    selected.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));
    selected
}

/// Slot assignment for the enabled bands of a preset, in slot order.
pub fn assign_slots(bands: &[FabFilterBand]) -> Vec<(usize, &FabFilterBand)> {
    let mut low_cut = None;
    let mut high_cut = None;
    let mut pool = Vec::new();

    for band in bands.iter().filter(|b| b.enabled) {
        match band.shape {
            BandShape::LowCut if low_cut.is_none() => low_cut = Some(band),
            BandShape::HighCut if high_cut.is_none() => high_cut = Some(band),
            _ => pool.push(band),
        }
    }

    let first = if low_cut.is_some() { 2 } else { 1 };
    let last = if high_cut.is_some() {
        BAND_COUNT - 1
    } else {
        BAND_COUNT
    };

    let mut slots = Vec::with_capacity(BAND_COUNT);
    if let Some(band) = low_cut {
        slots.push((1, band));
    }
    for (slot, band) in (first..=last).zip(select_interior(pool, last + 1 - first)) {
        slots.push((slot, band));
    }
    if let Some(band) = high_cut {
        slots.push((BAND_COUNT, band));
    }
    slots
}

fn edit_channel(band: &FabFilterBand, primary: bool) -> FrequencyChannelMode {
    let mid_side = band.channel_mode == ChannelMode::MidSide
        || matches!(band.placement, StereoPlacement::Mid | StereoPlacement::Side);
    match (mid_side, primary) {
        (true, true) => FrequencyChannelMode::MidSideModeMid,
        (true, false) => FrequencyChannelMode::MidSideModeSide,
        (false, true) => FrequencyChannelMode::LeftRightModeLeft,
        (false, false) => FrequencyChannelMode::LeftRightModeRight,
    }
}

fn write_band(frequency: &mut SteinbergFrequency, slot: usize, band: &FabFilterBand) -> Result<()> {
    frequency.set_param_value(BandParam::BandOn, Channel::One, slot, 1.0)?;

    let channel = match band.placement {
        StereoPlacement::Stereo => {
            frequency.set_param_value(BandParam::On, Channel::One, slot, 1.0)?;
            frequency.set_param_value(BandParam::On, Channel::Two, slot, 1.0)?;
            Channel::One
        }
        placement => {
            let primary = matches!(placement, StereoPlacement::LeftOrMid | StereoPlacement::Mid);
            let (one, two) = if primary { (1.0, 0.0) } else { (0.0, 1.0) };
            frequency.set_param_value(BandParam::On, Channel::One, slot, one)?;
            frequency.set_param_value(BandParam::On, Channel::Two, slot, two)?;
            let mode = edit_channel(band, primary).value();
            frequency.set_param_value(BandParam::EditChannel, Channel::One, slot, mode)?;
            if primary { Channel::One } else { Channel::Two }
        }
    };

    frequency.set_param_value(BandParam::Gain, channel, slot, band.gain)?;
    frequency.set_param_value(BandParam::Freq, channel, slot, band.frequency)?;
    frequency.set_param_value(BandParam::Q, channel, slot, band.q)?;
    frequency.set_param_value(BandParam::Type, channel, slot, frequency_type(band, slot))?;
    Ok(())
}

/// Convert the enabled bands of a Pro-Q preset into a Frequency preset.
///
/// Unmapped slots stay at their defaults with `bandon` off.
pub fn fabfilter_to_frequency(preset: &ProQPreset) -> Result<SteinbergFrequency> {
    let mut frequency = SteinbergFrequency::with_bands_off();
    for (slot, band) in assign_slots(&preset.bands) {
        log::debug!("{band} -> slot {slot}");
        write_band(&mut frequency, slot, band)?;
    }
    Ok(frequency)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bell(frequency: f64, gain: f64) -> FabFilterBand {
        FabFilterBand::new(BandShape::Bell, frequency, gain, 1.0)
    }

    #[test]
    fn test_cut_slopes() {
        assert_eq!(cut_type(CutSlope::Slope6), BandMode1And8::Cut6);
        assert_eq!(cut_type(CutSlope::Slope96), BandMode1And8::Cut96);
        assert_eq!(cut_type(CutSlope::Slope72), BandMode1And8::Cut96);
        assert_eq!(cut_type(CutSlope::Slope18), BandMode1And8::Cut12);
        assert_eq!(cut_type(CutSlope::Brickwall), BandMode1And8::Cut12);
    }

    #[test]
    fn test_peak_like_shapes() {
        let shapes = [
            BandShape::Bell,
            BandShape::BandPass,
            BandShape::TiltShelf,
            BandShape::FlatTilt,
        ];
        for shape in shapes {
            let band = FabFilterBand::new(shape, 500.0, 1.0, 1.0);
            assert_eq!(frequency_type(&band, 1), BandMode1And8::Peak.value());
            assert_eq!(frequency_type(&band, 4), BandMode2To7::Peak.value());
        }
    }

    #[test]
    fn test_gain_ties_keep_source_order() {
        let bands = [bell(100.0, 3.0), bell(200.0, -3.0), bell(300.0, 3.0)];
        let kept = select_interior(bands.iter().collect(), 2);
        let frequencies: Vec<f64> = kept.iter().map(|b| b.frequency).collect();
        assert_eq!(frequencies, vec![100.0, 200.0]);
    }

    #[test]
    fn test_extra_cuts_join_the_pool() {
        let bands = [
            FabFilterBand::new(BandShape::LowCut, 30.0, 0.0, 1.0),
            FabFilterBand::new(BandShape::LowCut, 80.0, 0.0, 1.0),
            bell(1000.0, 2.0),
        ];
        let slots = assign_slots(&bands);
        assert_eq!(slots.len(), 3);
        assert_eq!((slots[0].0, slots[0].1.frequency), (1, 30.0));
        assert_eq!((slots[1].0, slots[1].1.frequency), (2, 80.0));
        let (slot, band) = slots[1];
        assert_eq!(frequency_type(band, slot), BandMode2To7::Peak.value());
        assert_eq!((slots[2].0, slots[2].1.frequency), (3, 1000.0));
    }

    #[test]
    fn test_disabled_bands_are_dropped() {
        let mut off = bell(500.0, 12.0);
        off.enabled = false;
        let bands = [off, bell(700.0, 1.0)];
        let slots = assign_slots(&bands);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].1.frequency, 700.0);
    }
}
