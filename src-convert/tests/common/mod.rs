#![allow(dead_code)]

use eqpreset_formats::steinberg::{BandParam, Channel, SteinbergFrequency};
use eqpreset_formats::{AbletonBandMode, AbletonChannelMode, AbletonEq8, AbletonEq8Band};

pub fn value(
    frequency: &SteinbergFrequency,
    param: BandParam,
    channel: Channel,
    slot: usize,
) -> f64 {
    frequency
        .get_param_value(param, channel, slot)
        .unwrap_or_else(|| panic!("no {param:?} for slot {slot}"))
}

fn off_band(number: u8, mode: AbletonBandMode, freq: f64, gain: f64, q: f64) -> AbletonEq8Band {
    AbletonEq8Band {
        is_on: false,
        ..AbletonEq8Band::new(number, mode, freq, gain, q)
    }
}

/// Stereo EQ Eight with bands 1, 4 and 8 set and the rest left as off bells
pub fn eq_eight() -> AbletonEq8 {
    let mut bands: Vec<AbletonEq8Band> = (0..8)
        .map(|n| off_band(n, AbletonBandMode::Bell, 1000.0, 0.0, 1.0))
        .collect();
    bands[0] = AbletonEq8Band::new(0, AbletonBandMode::LeftShelf, 50.0, 6.0, 0.71);
    bands[3] = off_band(3, AbletonBandMode::Bell, 2000.0, -3.0, 3.0);
    bands[7] = AbletonEq8Band::new(7, AbletonBandMode::HighCut48, 15000.0, 0.0, 1.0);
    AbletonEq8 {
        mode: AbletonChannelMode::Stereo,
        bands,
    }
}
