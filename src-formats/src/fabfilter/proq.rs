use serde::Serialize;
use std::fmt;

use super::layout::{
    EnabledFlag, Field, Normalized, PLUGIN_CATEGORY, PLUGIN_VENDOR, ProQFamily, ProQLayout,
};
use super::{
    BAND_SLOTS, ChannelMode, FabFilterBand, frequency_to_native, native_to_frequency, native_to_q,
    normalized_to_frequency, q_to_native, rescale, round2,
};
use crate::byte_cursor::{ByteReader, ByteWriter, Endian};
use crate::container::PresetContainer;
use crate::error::{FormatError, Result};
use crate::info_xml::PluginInfo;
use crate::wrapper::{FxpBlob, FxpContent, VstWrapper};

pub const FABF_MAGIC: [u8; 4] = *b"FabF";
pub const FFED_MAGIC: [u8; 4] = *b"FFed";
pub const FFBS_MAGIC: [u8; 4] = *b"FFBS";
pub const DEFAULT_PRESET_NAME: &str = "Default Setting";

const FFBS_VERSION: u32 = 1;

/// A Pro-Q preset of any generation
///
/// `bands` holds up to 24 slots in plug-in order. `tail` is every float after
/// the band slots and is written back exactly as read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProQPreset {
    pub family: ProQFamily,
    pub version: u32,
    pub name: String,
    pub bands: Vec<FabFilterBand>,
    pub tail: Vec<f32>,
}

impl ProQPreset {
    pub fn new(family: ProQFamily) -> Self {
        let layout = family.layout();
        Self {
            family,
            version: layout.version,
            name: DEFAULT_PRESET_NAME.to_string(),
            bands: Vec::new(),
            tail: layout.default_tail.to_vec(),
        }
    }

    pub fn layout(&self) -> &'static ProQLayout {
        self.family.layout()
    }

    pub fn enabled_bands(&self) -> impl Iterator<Item = &FabFilterBand> {
        self.bands.iter().filter(|b| b.enabled)
    }

    /// Named tail float, `None` for unknown names or a short tail.
    pub fn tail_value(&self, name: &str) -> Option<f32> {
        let at = self.layout().tail_names.iter().position(|n| *n == name)?;
        self.tail.get(at).copied()
    }

    /// Set a named tail float. Returns false when the name or slot does not exist.
    pub fn set_tail_value(&mut self, name: &str, value: f32) -> bool {
        let Some(at) = self.layout().tail_names.iter().position(|n| *n == name) else {
            return false;
        };
        match self.tail.get_mut(at) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Global channel mode. Pro-Q 3 has none and reports LeftRight.
    pub fn channel_mode(&self) -> ChannelMode {
        let at = self.layout().channel_mode_at;
        match at.and_then(|at| self.tail.get(at)) {
            Some(&v) if v == 1.0 => ChannelMode::MidSide,
            _ => ChannelMode::LeftRight,
        }
    }

    /// Decode a parameter array already in native units.
    ///
    /// # Errors
    /// `Invalid` when the array is shorter than the band section.
    pub fn from_native(family: ProQFamily, floats: &[f32]) -> Result<Self> {
        let layout = family.layout();
        let band_floats = layout.band_floats();
        if floats.len() < band_floats {
            return Err(FormatError::Invalid(format!(
                "{} needs at least {band_floats} parameters, got {}",
                layout.plugin_name,
                floats.len()
            )));
        }

        let (leading, rest) = floats.split_at(layout.leading_floats());
        let (band_section, tail) = rest.split_at(band_floats - leading.len());
        let active_count = leading.first().copied();

        let mut preset = Self::new(family);
        preset.tail = tail.to_vec();
        let channel_mode = preset.channel_mode();

        for (slot, values) in band_section.chunks_exact(layout.fields.len()).enumerate() {
            let mut band = decode_band(layout, values, slot + 1);
            if let Some(count) = active_count {
                band.enabled = (slot as f32) < count;
            }
            band.channel_mode = channel_mode;
            preset.bands.push(band);
        }
        Ok(preset)
    }

    /// Decode normalized 0..1 VST2 parameters.
    pub fn from_normalized(family: ProQFamily, floats: &[f32]) -> Result<Self> {
        let layout = family.layout();
        let native: Vec<f32> = floats
            .iter()
            .enumerate()
            .map(|(pos, &x)| apply_normalized(normalized_kind(layout, pos), x as f64) as f32)
            .collect();
        Self::from_native(family, &native)
    }

    /// Encode to the native parameter array: band section then tail.
    ///
    /// Pro-Q stores enabled bands as a leading count, so enabled bands are
    /// written first there. Missing slots are filled with disabled defaults.
    pub fn to_native(&self) -> Vec<f32> {
        let layout = self.layout();
        if self.bands.len() > BAND_SLOTS {
            log::warn!(
                "{} holds {BAND_SLOTS} bands, dropping {}",
                layout.plugin_name,
                self.bands.len() - BAND_SLOTS
            );
        }
        let mut bands: Vec<&FabFilterBand> = self.bands.iter().take(BAND_SLOTS).collect();

        let mut out = Vec::with_capacity(layout.band_floats() + self.tail.len());
        if layout.enabled == EnabledFlag::LeadingCount {
            // stable, keeps slot order within each group
            bands.sort_by_key(|b| !b.enabled);
            out.push(bands.iter().filter(|b| b.enabled).count() as f32);
        }

        let empty = FabFilterBand::default();
        for slot in 0..BAND_SLOTS {
            let band = bands.get(slot).copied().unwrap_or(&empty);
            encode_band(layout, band, &mut out);
        }
        out.extend_from_slice(&self.tail);
        out
    }

    /// Read an `.ffp` file. The generation comes from the magic.
    pub fn read_ffp(bytes: &[u8]) -> Result<Self> {
        let mut r = ByteReader::new(bytes, Endian::Little);
        let magic = r.read_tag()?;
        let family = ProQFamily::from_magic(magic)
            .ok_or_else(|| FormatError::corrupt("FabFilter preset", magic))?;
        let version = r.read_u32()?;
        let floats = read_float_array(&mut r)?;
        log::debug!("{magic:?} version {version}, {} parameters", floats.len());

        let mut preset = Self::from_native(family, &floats)?;
        preset.version = version;
        Ok(preset)
    }

    pub fn to_ffp(&self) -> Vec<u8> {
        let mut w = ByteWriter::new(Endian::Little);
        w.write_bytes(&self.layout().ffp_magic)
            .write_u32(self.version);
        write_float_array(&mut w, &self.to_native());
        w.into_inner()
    }

    /// Read a FabFilter binary state (`FFBS`), as found in FXP chunks.
    pub fn read_ffbs(family: ProQFamily, bytes: &[u8]) -> Result<Self> {
        let mut r = ByteReader::new(bytes, Endian::Little);
        let magic = r.read_tag()?;
        if magic != FFBS_MAGIC {
            return Err(FormatError::corrupt("FabFilter binary state", magic));
        }
        let _state_version = r.read_u32()?;
        let floats = read_float_array(&mut r)?;
        Self::from_native(family, &floats)
    }

    /// FabFilter binary state. Pro-Q 3 gets the preset trailer it needs to load as active.
    pub fn to_ffbs(&self) -> Vec<u8> {
        let layout = self.layout();
        let mut w = ByteWriter::new(Endian::Little);
        w.write_bytes(&FFBS_MAGIC).write_u32(FFBS_VERSION);
        write_float_array(&mut w, &self.to_native());

        if self.family == ProQFamily::ProQ3 {
            w.write_bytes(&layout.ffp_magic).write_u32(1);
            w.write_u32(self.name.chars().count() as u32)
                .write_ascii(&self.name);
            w.write_i32(-1).write_u32(1);
            let short_name = "Pro-Q";
            w.write_u32(short_name.len() as u32).write_ascii(short_name);
        }
        w.into_inner()
    }

    /// Wrap the binary state as an `FPCh` FXP program.
    pub fn to_fxp(&self) -> FxpBlob {
        FxpBlob::program_chunk(self.layout().ffp_magic, 1, &self.name, &self.to_ffbs())
    }

    /// Decode an FXP blob whose fxID names a Pro-Q generation.
    ///
    /// Chunk programs carry an `FFBS` state. Parameter programs and banks
    /// carry normalized values; a bank yields its first program.
    pub fn from_fxp(blob: &FxpBlob) -> Result<Self> {
        let fx_id = blob
            .fx_id()
            .ok_or_else(|| FormatError::Invalid("FXP blob has no fxID".to_string()))?;
        let family = ProQFamily::from_magic(fx_id).ok_or_else(|| {
            FormatError::UnknownClassFormat(String::from_utf8_lossy(&fx_id).into_owned())
        })?;

        let content = blob.content()?;
        let mut preset = match &content {
            FxpContent::ProgramChunk { chunk, .. } | FxpContent::BankChunk(chunk) => {
                Self::read_ffbs(family, chunk)?
            }
            _ => {
                let params = content
                    .params()
                    .ok_or_else(|| FormatError::Invalid("FXP bank holds no program".to_string()))?;
                Self::from_normalized(family, params)?
            }
        };
        match content {
            FxpContent::ProgramChunk { name, .. } if !name.is_empty() => preset.name = name,
            FxpContent::Program(program) if !program.name.is_empty() => preset.name = program.name,
            _ => {}
        }
        Ok(preset)
    }

    /// Decode a `.vstpreset` container.
    ///
    /// The Comp chunk is either a `FabF` state or a `VstW` envelope around an FXP blob.
    pub fn from_container(container: &PresetContainer) -> Result<Self> {
        let family = ProQFamily::from_class_id(&container.class_id)
            .ok_or_else(|| FormatError::UnknownClassFormat(container.class_id.clone()))?;

        if VstWrapper::is_wrapped(&container.comp_chunk) {
            let wrapper = VstWrapper::read(&container.comp_chunk)?;
            let mut preset = Self::from_fxp(&wrapper.fxp)?;
            if preset.family != family {
                log::warn!(
                    "class id says {family:?} but the FXP fxID says {:?}",
                    preset.family
                );
                preset.family = family;
            }
            return Ok(preset);
        }

        let mut r = ByteReader::new(&container.comp_chunk, Endian::Little);
        let magic = r.read_tag()?;
        if magic != FABF_MAGIC {
            return Err(FormatError::corrupt("FabFilter component chunk", magic));
        }
        let version = r.read_u32()?;
        let name_len = r.read_u32()? as usize;
        let name = r.read_ascii(name_len)?;
        let _reserved = r.read_u32()?;
        let floats = read_float_array(&mut r)?;

        let mut preset = Self::from_native(family, &floats)?;
        preset.version = version;
        preset.name = name;
        Ok(preset)
    }

    /// Container with a `FabF` Comp chunk, an `FFed` Cont chunk and plug-in info.
    pub fn to_container(&self) -> PresetContainer {
        let layout = self.layout();

        let mut comp = ByteWriter::new(Endian::Little);
        comp.write_bytes(&FABF_MAGIC).write_u32(self.version);
        comp.write_u32(self.name.chars().count() as u32)
            .write_ascii(&self.name);
        comp.write_u32(0);
        write_float_array(&mut comp, &self.to_native());
        comp.write_i32(1).write_i32(1);

        let mut cont = ByteWriter::new(Endian::Little);
        cont.write_bytes(&FFED_MAGIC).write_f32(0.0).write_f32(1.0);

        let mut container = PresetContainer::new(layout.vst3_class_id);
        container.comp_chunk = comp.into_inner();
        container.cont_chunk = cont.into_inner();
        let info = PluginInfo::new(PLUGIN_CATEGORY, layout.plugin_name, PLUGIN_VENDOR);
        container.info_xml = info.to_xml_bytes();
        container.prepare_for_writing();
        container
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.to_container().write()
    }
}

impl fmt::Display for ProQPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} '{}' (version {})",
            self.layout().plugin_name,
            self.name,
            self.version
        )?;
        for (i, band) in self.bands.iter().enumerate().filter(|(_, b)| b.enabled) {
            writeln!(f, "{:>2}: {band}", i + 1)?;
        }
        Ok(())
    }
}

fn read_float_array(r: &mut ByteReader<'_>) -> Result<Vec<f32>> {
    let count = r.read_u32()? as u64;
    if count * 4 > r.remaining() {
        return Err(FormatError::Truncated {
            offset: r.position(),
            wanted: count * 4,
        });
    }
    (0..count).map(|_| r.read_f32()).collect()
}

fn write_float_array(w: &mut ByteWriter, floats: &[f32]) {
    w.write_u32(floats.len() as u32);
    for &v in floats {
        w.write_f32(v);
    }
}

fn normalized_kind(layout: &ProQLayout, pos: usize) -> Normalized {
    let leading = layout.leading_floats();
    if pos < leading {
        layout.normalized_leading
    } else if pos < layout.band_floats() {
        layout.normalized_fields[(pos - leading) % layout.fields.len()]
    } else {
        layout
            .normalized_tail
            .get(pos - layout.band_floats())
            .copied()
            .unwrap_or(Normalized::Verbatim)
    }
}

fn apply_normalized(kind: Normalized, x: f64) -> f64 {
    match kind {
        Normalized::Verbatim => x,
        Normalized::Frequency => normalized_to_frequency(x),
        Normalized::Decibel => x * 60.0 - 30.0,
        Normalized::Floor(max) => (x * max).floor(),
        Normalized::Round(max) => (x * max).round(),
        Normalized::Range(min, max) => rescale(x, min, max),
    }
}

/// Table entry at an integral ordinal, or the type's default with a warning.
fn lookup<T: Copy + Default + fmt::Debug>(table: &[T], value: f64, what: &str, slot: usize) -> T {
    let found = if value >= 0.0 && value.fract() == 0.0 {
        table.get(value as usize).copied()
    } else {
        None
    };
    found.unwrap_or_else(|| {
        let fallback = T::default();
        log::warn!("band {slot}: {what} {value} is out of range, using {fallback:?}");
        fallback
    })
}

fn ordinal_of<T>(table: &[T], value: T, plugin: &str) -> f32
where
    T: Copy + Default + PartialEq + fmt::Debug,
{
    let position = table.iter().position(|t| *t == value);
    let position = position.or_else(|| {
        log::warn!("{plugin} has no {value:?}, writing {:?}", T::default());
        table.iter().position(|t| *t == T::default())
    });
    position.unwrap_or(0) as f32
}

fn decode_band(layout: &ProQLayout, values: &[f32], slot: usize) -> FabFilterBand {
    let mut band = FabFilterBand::default();
    for (field, &raw) in layout.fields.iter().zip(values) {
        let v = raw as f64;
        match field {
            Field::Enabled => band.enabled = raw == 1.0,
            Field::Frequency => band.frequency = round2(native_to_frequency(v)),
            Field::Gain => band.gain = round2(v),
            Field::Q => band.q = round2(native_to_q(v)),
            Field::Shape => band.shape = lookup(layout.shapes, v, "shape", slot),
            Field::Slope => band.slope = lookup(layout.slopes, v, "slope", slot),
            Field::Placement => {
                band.placement = lookup(layout.placements, v, "stereo placement", slot)
            }
            Field::DynamicRange => band.dynamic_range = v,
            Field::DynamicThreshold => band.dynamic_threshold = v,
            Field::Constant(_) => {}
        }
    }
    band
}

fn encode_band(layout: &ProQLayout, band: &FabFilterBand, out: &mut Vec<f32>) {
    for field in layout.fields {
        out.push(match field {
            Field::Enabled => match layout.enabled {
                EnabledFlag::PerBand { off } if !band.enabled => off,
                _ => 1.0,
            },
            Field::Frequency => frequency_to_native(band.frequency) as f32,
            Field::Gain => band.gain as f32,
            Field::Q => q_to_native(band.q) as f32,
            Field::Shape => ordinal_of(layout.shapes, band.shape, layout.plugin_name),
            Field::Slope => ordinal_of(layout.slopes, band.slope, layout.plugin_name),
            Field::Placement => ordinal_of(layout.placements, band.placement, layout.plugin_name),
            Field::DynamicRange => band.dynamic_range as f32,
            Field::DynamicThreshold => band.dynamic_threshold as f32,
            Field::Constant(c) => *c,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fabfilter::{BandShape, CutSlope, StereoPlacement};

    fn sample(family: ProQFamily) -> ProQPreset {
        let mut preset = ProQPreset::new(family);
        preset.bands = vec![
            FabFilterBand::new(BandShape::LowCut, 30.0, 0.0, 0.71).with_slope(CutSlope::Slope48),
            FabFilterBand::new(BandShape::Bell, 1000.0, -3.5, 2.0),
            FabFilterBand::new(BandShape::HighShelf, 8000.0, 2.0, 1.0)
                .with_placement(StereoPlacement::RightOrSide),
        ];
        preset
    }

    #[test]
    fn test_native_counts() {
        assert_eq!(sample(ProQFamily::ProQ1).to_native().len(), 180);
        assert_eq!(sample(ProQFamily::ProQ2).to_native().len(), 190);
        assert_eq!(sample(ProQFamily::ProQ3).to_native().len(), 24 * 13 + 46);
    }

    #[test]
    fn test_native_round_trip_all_families() {
        for family in ProQFamily::ALL {
            let preset = sample(family);
            let back = ProQPreset::from_native(family, &preset.to_native()).unwrap();
            assert_eq!(back.bands.len(), BAND_SLOTS);
            assert_eq!(&back.bands[..3], &preset.bands[..], "{family:?}");
            assert!(back.bands[3..].iter().all(|b| !b.enabled));
            assert_eq!(back.tail, preset.tail);
        }
    }

    #[test]
    fn test_pro_q1_leading_count_orders_enabled_first() {
        let mut preset = ProQPreset::new(ProQFamily::ProQ1);
        let mut off = FabFilterBand::new(BandShape::Notch, 500.0, 0.0, 4.0);
        off.enabled = false;
        preset.bands = vec![off, FabFilterBand::new(BandShape::Bell, 2000.0, 3.0, 1.0)];

        let floats = preset.to_native();
        assert_eq!(floats[0], 1.0);
        let back = ProQPreset::from_native(ProQFamily::ProQ1, &floats).unwrap();
        assert_eq!(back.bands[0].frequency, 2000.0);
        assert!(back.bands[0].enabled);
        assert_eq!(back.bands[1].shape, BandShape::Notch);
        assert!(!back.bands[1].enabled);
    }

    #[test]
    fn test_pro_q2_disabled_flag_is_two() {
        let mut preset = ProQPreset::new(ProQFamily::ProQ2);
        preset.bands = vec![FabFilterBand::default()];
        let floats = preset.to_native();
        assert_eq!(floats[0], 2.0);
        assert_eq!(floats[7], 2.0);
    }

    #[test]
    fn test_tail_is_kept_verbatim() {
        let mut floats = sample(ProQFamily::ProQ3).to_native();
        floats.truncate(24 * 13);
        floats.extend([0.123, f32::MIN_POSITIVE, -7.0, 42.5]);
        let preset = ProQPreset::from_native(ProQFamily::ProQ3, &floats).unwrap();
        assert_eq!(preset.tail, vec![0.123, f32::MIN_POSITIVE, -7.0, 42.5]);
        assert_eq!(preset.to_native(), floats);
    }

    #[test]
    fn test_out_of_range_enumerants_fall_back() {
        let mut floats = sample(ProQFamily::ProQ3).to_native();
        floats[8] = 42.0;
        floats[9] = -1.0;
        floats[10] = 2.5;
        let preset = ProQPreset::from_native(ProQFamily::ProQ3, &floats).unwrap();
        let band = &preset.bands[0];
        assert_eq!(band.shape, BandShape::Bell);
        assert_eq!(band.slope, CutSlope::Slope24);
        assert_eq!(band.placement, StereoPlacement::Stereo);
    }

    #[test]
    fn test_unsupported_shape_written_as_bell() {
        let mut preset = ProQPreset::new(ProQFamily::ProQ1);
        preset.bands = vec![FabFilterBand::new(BandShape::FlatTilt, 100.0, 1.0, 1.0)];
        let floats = preset.to_native();
        assert_eq!(floats[1 + 3], 0.0);
    }

    #[test]
    fn test_short_array_is_rejected() {
        let result = ProQPreset::from_native(ProQFamily::ProQ2, &[0.0; 20]);
        assert!(matches!(result, Err(FormatError::Invalid(_))));
    }

    #[test]
    fn test_channel_mode_from_tail() {
        let mut preset = sample(ProQFamily::ProQ2);
        assert!(preset.set_tail_value("ChannelMode", 1.0));
        assert!(!preset.set_tail_value("NoSuchThing", 1.0));
        let back = ProQPreset::from_native(ProQFamily::ProQ2, &preset.to_native()).unwrap();
        assert_eq!(back.channel_mode(), ChannelMode::MidSide);
        for band in &back.bands {
            assert_eq!(band.channel_mode, ChannelMode::MidSide);
        }
        assert_eq!(back.tail_value("SoloBand"), Some(-1.0));
    }

    #[test]
    fn test_normalized_pro_q1() {
        let mut floats = vec![0.0f32; 1 + 24 * 7 + 11];
        floats[0] = 1.5 / 24.0;
        // band 1: 10 Hz, +30 dB, q native 0.5, HighCut (4/5), 48 dB (3/3), stereo (2/2)
        floats[1..8].copy_from_slice(&[0.0, 1.0, 0.5, 0.8, 1.0, 1.0, 1.0]);
        floats[8..15].copy_from_slice(&[0.5, 0.25, 0.5, 0.0, 0.0, 0.5, 1.0]);
        floats[1 + 24 * 7 + 10] = 0.0;

        let preset = ProQPreset::from_normalized(ProQFamily::ProQ1, &floats).unwrap();
        let first = &preset.bands[0];
        assert!(first.enabled);
        assert!((first.frequency - 10.0).abs() < 0.01);
        assert_eq!(first.gain, 30.0);
        assert_eq!(first.q, 1.0);
        assert_eq!(first.shape, BandShape::HighCut);
        assert_eq!(first.slope, CutSlope::Slope48);
        assert_eq!(preset.bands[1].gain, -15.0);
        assert_eq!(preset.bands[1].placement, StereoPlacement::RightOrSide);
        assert!(!preset.bands[2].enabled);
        assert_eq!(preset.tail_value("SoloBand"), Some(-1.0));
    }

    #[test]
    fn test_ffp_round_trip() {
        let preset = sample(ProQFamily::ProQ3);
        let bytes = preset.to_ffp();
        assert_eq!(&bytes[..4], b"FQ3p");
        assert_eq!(&bytes[4..8], &4u32.to_le_bytes());
        assert_eq!(&bytes[8..12], &(24u32 * 13 + 46).to_le_bytes());
        let back = ProQPreset::read_ffp(&bytes).unwrap();
        assert_eq!(back.to_ffp(), bytes);
    }

    #[test]
    fn test_ffp_bad_magic() {
        let mut bytes = sample(ProQFamily::ProQ1).to_ffp();
        bytes[..4].copy_from_slice(b"NOPE");
        let result = ProQPreset::read_ffp(&bytes);
        assert!(matches!(result, Err(FormatError::CorruptContainer { .. })));
    }

    #[test]
    fn test_ffp_truncated_float_array() {
        let bytes = sample(ProQFamily::ProQ2).to_ffp();
        let result = ProQPreset::read_ffp(&bytes[..100]);
        assert!(matches!(result, Err(FormatError::Truncated { .. })));
    }

    #[test]
    fn test_container_round_trip() {
        let mut preset = sample(ProQFamily::ProQ2);
        preset.name = "Vocal".to_string();
        let bytes = preset.to_bytes().unwrap();
        let container = PresetContainer::read(&bytes).unwrap();
        assert_eq!(&container.comp_chunk[..4], b"FabF");
        assert_eq!(&container.cont_chunk[..4], b"FFed");
        let info = PluginInfo::from_xml_bytes(&container.info_xml);
        assert_eq!(info.name, "FabFilter Pro-Q 2");

        let back = ProQPreset::from_container(&container).unwrap();
        assert_eq!(back.name, "Vocal");
        assert_eq!(back.to_native(), preset.to_native());
    }

    #[test]
    fn test_wrapped_fxp_in_container() {
        let preset = sample(ProQFamily::ProQ3);
        let wrapper = VstWrapper::new(preset.to_fxp());

        let mut container = PresetContainer::new(ProQFamily::ProQ3.layout().vst2_class_id);
        container.comp_chunk = wrapper.to_bytes();
        container.prepare_for_writing();
        let bytes = container.write().unwrap();

        let back = ProQPreset::from_container(&PresetContainer::read(&bytes).unwrap()).unwrap();
        assert_eq!(back.family, ProQFamily::ProQ3);
        assert_eq!(back.to_native(), preset.to_native());
    }

    #[test]
    fn test_normalized_fxp_program() {
        let mut params = vec![0.0f32; 24 * 13];
        params[0] = 1.0;
        params[2] = 0.5;
        params[3] = 0.75;
        params[7] = 0.5;
        params[8] = 1.0 / 8.0;
        let blob = FxpBlob::program(*b"FQ3p", 1, "Norm", &params);

        let preset = ProQPreset::from_fxp(&blob).unwrap();
        assert_eq!(preset.name, "Norm");
        assert_eq!(preset.bands[0].gain, 15.0);
        assert_eq!(preset.bands[0].shape, BandShape::LowShelf);
        assert!(preset.tail.is_empty());
    }

    #[test]
    fn test_unknown_class_id() {
        let container = PresetContainer::new("00000000000000000000000000000000");
        let result = ProQPreset::from_container(&container);
        assert!(matches!(result, Err(FormatError::UnknownClassFormat(_))));
    }
}
