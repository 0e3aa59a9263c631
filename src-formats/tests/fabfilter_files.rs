use eqpreset_formats::fabfilter::{ChannelMode, ProQFamily, ProQPreset};
use eqpreset_formats::{DecodedPreset, PresetContainer, VstWrapper, decode};

mod common;
use common::*;

fn preset(family: ProQFamily) -> ProQPreset {
    let mut preset = ProQPreset::new(family);
    preset.name = "Mix Bus".to_string();
    preset.bands = mixed_bands();
    preset
}

#[test]
fn test_every_form_decodes_to_the_same_bands() {
    for family in ProQFamily::ALL {
        let original = preset(family);

        let from_ffp = ProQPreset::read_ffp(&original.to_ffp()).unwrap();
        let from_ffbs = ProQPreset::read_ffbs(family, &original.to_ffbs()).unwrap();
        let from_fxp = ProQPreset::from_fxp(&original.to_fxp()).unwrap();
        let bytes = original.to_bytes().unwrap();
        let container = PresetContainer::read(&bytes).unwrap();
        let from_vst3 = ProQPreset::from_container(&container).unwrap();

        for (decoded, band) in from_ffp.bands.iter().zip(&original.bands) {
            assert_eq!(decoded.shape, band.shape, "{family:?}");
            assert_eq!(decoded.slope, band.slope, "{family:?}");
            assert_eq!(decoded.placement, band.placement, "{family:?}");
            assert_eq!(decoded.gain, band.gain, "{family:?}");
            assert!(relative_error(decoded.frequency, band.frequency) < 1e-5);
            assert!(relative_error(decoded.q, band.q) < 1e-2);
        }
        for decoded in [&from_ffbs, &from_fxp, &from_vst3] {
            assert_eq!(decoded.family, family);
            assert_eq!(decoded.bands, from_ffp.bands, "{family:?}");
            assert_eq!(decoded.tail, from_ffp.tail, "{family:?}");
        }
        assert_eq!(from_fxp.name, "Mix Bus");
        assert_eq!(from_vst3.name, "Mix Bus");
    }
}

#[test]
fn test_vstw_wrapped_container_decodes() {
    let original = preset(ProQFamily::ProQ2);
    let mut container = PresetContainer::new(ProQFamily::ProQ2.layout().vst3_class_id);
    container.comp_chunk = VstWrapper::new(original.to_fxp()).to_bytes();
    container.prepare_for_writing();

    match decode(&container.write().unwrap()).unwrap() {
        DecodedPreset::FabFilter(p) => {
            let direct = ProQPreset::read_ffp(&original.to_ffp()).unwrap();
            assert_eq!(p.bands, direct.bands);
        }
        other => panic!("decoded as {}", other.kind()),
    }
}

#[test]
fn test_mid_side_channel_mode_reaches_bands() {
    let mut original = preset(ProQFamily::ProQ1);
    assert!(original.set_tail_value("ChannelMode", 1.0));
    let back = ProQPreset::read_ffp(&original.to_ffp()).unwrap();
    assert_eq!(back.channel_mode(), ChannelMode::MidSide);
    for band in back.enabled_bands() {
        assert_eq!(band.channel_mode, ChannelMode::MidSide);
    }
    assert_eq!(back.enabled_bands().count(), 5);
}

#[test]
fn test_inspect_json_shape() {
    let decoded = decode(&preset(ProQFamily::ProQ3).to_ffp()).unwrap();
    let value = serde_json::to_value(decoded).unwrap();
    assert_eq!(value["family"], "ProQ3");
    assert_eq!(value["bands"][0]["shape"], "LowCut");
    assert_eq!(value["bands"][4]["slope"], "Slope48");
    assert_eq!(value["bands"].as_array().map(|b| b.len()), Some(24));
}
