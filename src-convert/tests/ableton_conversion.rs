use eqpreset_convert::{ConvertError, ableton_to_frequency, ableton_to_proq3};
use eqpreset_formats::fabfilter::{BandShape, CutSlope, ProQFamily};
use eqpreset_formats::steinberg::{
    BandMode1And8, BandMode2To7, BandParam, Channel, SteinbergFrequency,
};
use eqpreset_formats::{AbletonBandMode, AbletonChannelMode, AbletonEq8Band, BandSet, ProQPreset};

mod common;
use common::*;

#[test]
fn test_fixed_mapping() {
    let frequency = ableton_to_frequency(&eq_eight()).unwrap();
    let slot = |param, n| value(&frequency, param, Channel::One, n);

    assert_eq!(slot(BandParam::BandOn, 1), 1.0);
    assert_eq!(slot(BandParam::Gain, 1), 6.0);
    assert_eq!(slot(BandParam::Freq, 1), 50.0);
    assert_eq!(slot(BandParam::Q, 1), 0.71);
    assert_eq!(slot(BandParam::Type, 1), BandMode1And8::LowShelf.value());

    assert_eq!(slot(BandParam::BandOn, 4), 0.0);
    assert_eq!(slot(BandParam::Gain, 4), -3.0);
    assert_eq!(slot(BandParam::Freq, 4), 2000.0);
    assert_eq!(slot(BandParam::Q, 4), 3.0);
    assert_eq!(slot(BandParam::Type, 4), BandMode2To7::Peak.value());

    assert_eq!(slot(BandParam::BandOn, 8), 1.0);
    assert_eq!(slot(BandParam::Gain, 8), 0.0);
    assert_eq!(slot(BandParam::Freq, 8), 15000.0);
    assert_eq!(slot(BandParam::Q, 8), 1.0);
    assert_eq!(slot(BandParam::Type, 8), BandMode1And8::Cut48.value());
}

#[test]
fn test_non_stereo_is_rejected() {
    let mut eq = eq_eight();
    eq.mode = AbletonChannelMode::LeftRight;

    let err = ableton_to_frequency(&eq).unwrap_err();
    assert!(matches!(err, ConvertError::UnsupportedChannelMode(1)));
    assert_eq!(
        err.to_string(),
        "Only Stereo conversion is supported. ChannelMode was 1!"
    );

    eq.mode = AbletonChannelMode::MidSide;
    let err = ableton_to_proq3(&eq).unwrap_err();
    assert!(err.to_string().contains('2'));
}

#[test]
fn test_second_band_set_is_ignored() {
    let mut eq = eq_eight();
    eq.bands.push(AbletonEq8Band {
        parameter: BandSet::ParameterB,
        ..AbletonEq8Band::new(0, AbletonBandMode::Notch, 99.0, 0.0, 9.0)
    });
    let frequency = ableton_to_frequency(&eq).unwrap();
    assert_eq!(value(&frequency, BandParam::Freq, Channel::One, 1), 50.0);
    assert_eq!(value(&frequency, BandParam::Freq, Channel::Two, 1), 25.0);
}

#[test]
fn test_frequency_output_round_trips() {
    let frequency = ableton_to_frequency(&eq_eight()).unwrap();
    let back = SteinbergFrequency::from_bytes(&frequency.to_bytes().unwrap()).unwrap();
    assert_eq!(back.params(), frequency.params());
    let first = back.band(1).unwrap();
    assert!(first.band_on && first.ch1.freq == 50.0);
}

#[test]
fn test_json_input() {
    let json = r#"{
        "mode": 0,
        "bands": [
            { "parameter": "ParameterA", "number": 1, "is_on": true,
              "mode": 1, "freq": 80, "gain": 0, "q": 0.7 },
            { "parameter": "ParameterA", "number": 5, "is_on": true,
              "mode": 4, "freq": 4000, "gain": 0, "q": 6 }
        ]
    }"#;
    let eq = serde_json::from_str(json).unwrap();
    let frequency = ableton_to_frequency(&eq).unwrap();
    let slot = |param, n| value(&frequency, param, Channel::One, n);
    // low cut routed to an interior slot
    assert_eq!(slot(BandParam::Type, 2), BandMode2To7::Peak.value());
    assert_eq!(slot(BandParam::Type, 6), BandMode2To7::Notch.value());
    assert_eq!(slot(BandParam::BandOn, 3), 0.0);
}

#[test]
fn test_proq3_conversion() {
    let preset = ableton_to_proq3(&eq_eight()).unwrap();
    assert_eq!(preset.family, ProQFamily::ProQ3);
    assert_eq!(preset.bands.len(), 8);
    assert_eq!(preset.tail, ProQFamily::ProQ3.layout().default_tail);

    assert_eq!(preset.bands[0].shape, BandShape::LowShelf);
    assert!(preset.bands[0].enabled);
    assert!(!preset.bands[3].enabled);
    assert_eq!(preset.bands[7].shape, BandShape::HighCut);
    assert_eq!(preset.bands[7].slope, CutSlope::Slope48);

    let back = ProQPreset::read_ffp(&preset.to_ffp()).unwrap();
    assert_eq!(back.enabled_bands().count(), 2);
    assert!((back.bands[7].frequency - 15000.0).abs() < 0.05);
}
