//! Steinberg Frequency: 8 bands, two channels, index-addressed parameters.
//!
//! Every key and numeric index is derived from the band number by
//! [`param_key`]. The index numbering is what the host reads, so it must stay
//! stable across versions of this crate.

use serde::Serialize;
use std::fmt;

use super::records::{COMP_HEADER_SIZE, RecordChunk};
use crate::container::PresetContainer;
use crate::error::{FormatError, Result};
use crate::info_xml::PluginInfo;
use crate::params::Parameters;

/// VST3 class id of Steinberg Frequency
pub const CLASS_ID: &str = "01F6CCC94CAE4668B7C6EC85E681E419";
/// Component chunk header written by Frequency
pub const START_BYTES: u32 = 19728;
/// Number of band slots
pub const BAND_COUNT: usize = 8;

pub const PLUGIN_CATEGORY: &str = "Fx|EQ";
pub const PLUGIN_NAME: &str = "Frequency";
pub const PLUGIN_VENDOR: &str = "Steinberg Media Technologies";

/// Band types available on slots 1 and 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BandMode1And8 {
    Cut6 = 0,
    Cut12 = 1,
    Cut24 = 2,
    Cut48 = 3,
    Cut96 = 4,
    LowShelf = 5,
    Peak = 6,
    HighShelf = 7,
    Notch = 8,
}

impl BandMode1And8 {
    const ALL: [BandMode1And8; 9] = [
        BandMode1And8::Cut6,
        BandMode1And8::Cut12,
        BandMode1And8::Cut24,
        BandMode1And8::Cut48,
        BandMode1And8::Cut96,
        BandMode1And8::LowShelf,
        BandMode1And8::Peak,
        BandMode1And8::HighShelf,
        BandMode1And8::Notch,
    ];

    pub fn value(self) -> f64 {
        self as u8 as f64
    }

    pub fn from_value(value: f64) -> Option<Self> {
        ordinal(value).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Band types available on slots 2 to 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BandMode2To7 {
    LowShelf = 0,
    Peak = 1,
    HighShelf = 2,
    Notch = 3,
}

impl BandMode2To7 {
    const ALL: [BandMode2To7; 4] = [
        BandMode2To7::LowShelf,
        BandMode2To7::Peak,
        BandMode2To7::HighShelf,
        BandMode2To7::Notch,
    ];

    pub fn value(self) -> f64 {
        self as u8 as f64
    }

    pub fn from_value(value: f64) -> Option<Self> {
        ordinal(value).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Which channel pair a band edits (`equalizerAeditchannel`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FrequencyChannelMode {
    LeftRightModeLeft = 0,
    LeftRightModeRight = 1,
    StereoMode = 2,
    MidSideModeMid = 3,
    MidSideModeSide = 4,
}

impl FrequencyChannelMode {
    const ALL: [FrequencyChannelMode; 5] = [
        FrequencyChannelMode::LeftRightModeLeft,
        FrequencyChannelMode::LeftRightModeRight,
        FrequencyChannelMode::StereoMode,
        FrequencyChannelMode::MidSideModeMid,
        FrequencyChannelMode::MidSideModeSide,
    ];

    pub fn value(self) -> f64 {
        self as u8 as f64
    }

    pub fn from_value(value: f64) -> Option<Self> {
        ordinal(value).and_then(|i| Self::ALL.get(i).copied())
    }
}

fn ordinal(value: f64) -> Option<usize> {
    (value >= 0.0 && value.fract() == 0.0).then_some(value as usize)
}

/// Band type as read back from a slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FrequencyBandType {
    Outer(BandMode1And8),
    Inner(BandMode2To7),
    Unknown(f64),
}

impl FrequencyBandType {
    fn for_slot(slot: usize, value: f64) -> Self {
        let decoded = if slot == 1 || slot == BAND_COUNT {
            BandMode1And8::from_value(value).map(FrequencyBandType::Outer)
        } else {
            BandMode2To7::from_value(value).map(FrequencyBandType::Inner)
        };
        decoded.unwrap_or(FrequencyBandType::Unknown(value))
    }
}

impl fmt::Display for FrequencyBandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrequencyBandType::Outer(m) => write!(f, "{m:?}"),
            FrequencyBandType::Inner(m) => write!(f, "{m:?}"),
            FrequencyBandType::Unknown(v) => write!(f, "?{v}"),
        }
    }
}

/// The two channel parameter sets of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Channel {
    One,
    Two,
}

/// Per-slot parameter names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandParam {
    On,
    Gain,
    Freq,
    Q,
    Type,
    Invert,
    EditChannel,
    BandOn,
    LinearPhase,
}

impl BandParam {
    const PER_CHANNEL: [BandParam; 6] = [
        BandParam::On,
        BandParam::Gain,
        BandParam::Freq,
        BandParam::Q,
        BandParam::Type,
        BandParam::Invert,
    ];
    const SHARED: [BandParam; 3] = [
        BandParam::EditChannel,
        BandParam::BandOn,
        BandParam::LinearPhase,
    ];

    /// Shared parameters have one value per slot regardless of channel.
    pub fn is_shared(self) -> bool {
        matches!(
            self,
            BandParam::EditChannel | BandParam::BandOn | BandParam::LinearPhase
        )
    }

    fn stem(self) -> &'static str {
        match self {
            BandParam::On => "equalizerAon",
            BandParam::Gain => "equalizerAgain",
            BandParam::Freq => "equalizerAfreq",
            BandParam::Q => "equalizerAq",
            BandParam::Type => "equalizerAtype",
            BandParam::Invert => "invert",
            BandParam::EditChannel => "equalizerAeditchannel",
            BandParam::BandOn => "equalizerAbandon",
            BandParam::LinearPhase => "linearphase",
        }
    }

    fn base_offset(self, channel: Channel) -> i32 {
        match (self, channel) {
            (BandParam::On, Channel::One) => 100,
            (BandParam::Gain, Channel::One) => 108,
            (BandParam::Freq, Channel::One) => 116,
            (BandParam::Q, Channel::One) => 124,
            (BandParam::Type, Channel::One) => 132,
            (BandParam::Invert, Channel::One) => 1022,
            (BandParam::On, Channel::Two) => 260,
            (BandParam::Gain, Channel::Two) => 268,
            (BandParam::Freq, Channel::Two) => 276,
            (BandParam::Q, Channel::Two) => 284,
            (BandParam::Type, Channel::Two) => 292,
            (BandParam::Invert, Channel::Two) => 1030,
            (BandParam::EditChannel, _) => 50,
            (BandParam::BandOn, _) => 58,
            (BandParam::LinearPhase, _) => 66,
        }
    }
}

/// Key and host index of a slot parameter, `None` outside slots 1..=8.
///
/// Channel two keys carry a `Ch2` suffix. The channel is ignored for shared
/// parameters.
pub fn param_key(param: BandParam, channel: Channel, band: usize) -> Option<(String, i32)> {
    if !(1..=BAND_COUNT).contains(&band) {
        return None;
    }
    let suffix = match channel {
        Channel::Two if !param.is_shared() => "Ch2",
        _ => "",
    };
    let key = format!("{}{}{}", param.stem(), band, suffix);
    Some((key, param.base_offset(channel) + (band as i32 - 1)))
}

/// Global parameters written after the band slots, with their defaults
const POST_PARAMETERS: [(&str, i32, f64); 16] = [
    ("equalizerAbypass", 1, 0.0),
    ("equalizerAoutput", 2, 0.0),
    ("bypass", 1002, 0.0),
    ("reset", 1003, 0.0),
    ("autoListen", 1005, 0.0),
    ("spectrumonoff", 1007, 1.0),
    ("spectrum2ChMode", 1008, 0.0),
    ("spectrumintegrate", 1010, 40.0),
    ("spectrumPHonoff", 1011, 1.0),
    ("spectrumslope", 1012, 0.0),
    ("draweq", 1013, 1.0),
    ("draweqfilled", 1014, 1.0),
    ("spectrumbargraph", 1015, 0.0),
    ("showPianoRoll", 1019, 1.0),
    ("transparency", 1020, 0.3),
    ("autoGainOutputValue", 1021, 0.0),
];

fn default_value(param: BandParam, channel: Channel, band: usize) -> f64 {
    let outer = band == 1 || band == BAND_COUNT;
    match param {
        BandParam::On | BandParam::Q | BandParam::BandOn => 1.0,
        BandParam::Gain | BandParam::Invert | BandParam::LinearPhase => 0.0,
        BandParam::Freq => match channel {
            Channel::One => 100.0 * band as f64,
            Channel::Two => 25.0,
        },
        BandParam::Type if outer => BandMode1And8::Cut48.value(),
        BandParam::Type => BandMode2To7::Peak.value(),
        BandParam::EditChannel => FrequencyChannelMode::StereoMode.value(),
    }
}

/// Settings of one channel within a slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelSettings {
    pub on: bool,
    pub gain: f64,
    pub freq: f64,
    pub q: f64,
    pub band_type: FrequencyBandType,
    pub invert: bool,
}

/// Typed read-back of a slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyBand {
    pub slot: usize,
    pub band_on: bool,
    pub edit_channel: Option<FrequencyChannelMode>,
    pub linear_phase: bool,
    pub ch1: ChannelSettings,
    pub ch2: ChannelSettings,
}

/// Steinberg Frequency preset
#[derive(Debug, Clone, PartialEq)]
pub struct SteinbergFrequency {
    params: Parameters,
    start_bytes: u32,
    controller: Vec<u8>,
    info: PluginInfo,
}

impl Default for SteinbergFrequency {
    fn default() -> Self {
        Self::new()
    }
}

impl SteinbergFrequency {
    /// A preset holding the host defaults for every slot and global parameter.
    pub fn new() -> Self {
        let mut params = Parameters::new();
        for band in 1..=BAND_COUNT {
            for channel in [Channel::One, Channel::Two] {
                for param in BandParam::PER_CHANNEL {
                    if let Some((key, index)) = param_key(param, channel, band) {
                        let value = default_value(param, channel, band);
                        params.set_number_with_index(&key, index, value);
                    }
                }
            }
            for param in BandParam::SHARED {
                if let Some((key, index)) = param_key(param, Channel::One, band) {
                    let value = default_value(param, Channel::One, band);
                    params.set_number_with_index(&key, index, value);
                }
            }
        }
        for (key, index, value) in POST_PARAMETERS {
            params.set_number_with_index(key, index, value);
        }

        Self {
            params,
            start_bytes: START_BYTES,
            controller: Vec::new(),
            info: PluginInfo::new(PLUGIN_CATEGORY, PLUGIN_NAME, PLUGIN_VENDOR),
        }
    }

    /// Defaults with every `equalizerAbandon` slot switched off.
    pub fn with_bands_off() -> Self {
        let mut preset = Self::new();
        for band in 1..=BAND_COUNT {
            if let Some((key, index)) = param_key(BandParam::BandOn, Channel::One, band) {
                preset.params.set_number_with_index(&key, index, 0.0);
            }
        }
        preset
    }

    /// Write a slot parameter.
    ///
    /// # Errors
    /// `Invalid` when `band` is outside 1..=8.
    pub fn set_param_value(
        &mut self,
        param: BandParam,
        channel: Channel,
        band: usize,
        value: f64,
    ) -> Result<()> {
        let (key, index) = param_key(param, channel, band)
            .ok_or_else(|| FormatError::Invalid(format!("Frequency has no band {band}")))?;
        self.params.set_number_with_index(&key, index, value);
        Ok(())
    }

    /// Read a slot parameter, `None` when the slot does not exist.
    pub fn get_param_value(&self, param: BandParam, channel: Channel, band: usize) -> Option<f64> {
        let (key, _) = param_key(param, channel, band)?;
        self.params.number(&key)
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn info(&self) -> &PluginInfo {
        &self.info
    }

    pub fn start_bytes(&self) -> u32 {
        self.start_bytes
    }

    /// Typed view of slot `band`.
    pub fn band(&self, band: usize) -> Option<FrequencyBand> {
        let get = |param, channel| self.get_param_value(param, channel, band);
        let settings = |channel| -> Option<ChannelSettings> {
            Some(ChannelSettings {
                on: get(BandParam::On, channel)? != 0.0,
                gain: get(BandParam::Gain, channel)?,
                freq: get(BandParam::Freq, channel)?,
                q: get(BandParam::Q, channel)?,
                band_type: FrequencyBandType::for_slot(band, get(BandParam::Type, channel)?),
                invert: get(BandParam::Invert, channel)? != 0.0,
            })
        };

        let edit = get(BandParam::EditChannel, Channel::One)?;
        Some(FrequencyBand {
            slot: band,
            band_on: get(BandParam::BandOn, Channel::One)? != 0.0,
            edit_channel: FrequencyChannelMode::from_value(edit),
            linear_phase: get(BandParam::LinearPhase, Channel::One)? != 0.0,
            ch1: settings(Channel::One)?,
            ch2: settings(Channel::Two)?,
        })
    }

    /// Every slot that could be read back.
    pub fn bands(&self) -> Vec<FrequencyBand> {
        (1..=BAND_COUNT)
            .filter_map(|band| self.band(band))
            .collect()
    }

    /// Build a container ready for writing.
    pub fn to_container(&self) -> PresetContainer {
        let mut comp = RecordChunk::new(self.start_bytes.to_le_bytes().to_vec());
        comp.params = self.params.clone();

        let mut container = PresetContainer::new(CLASS_ID);
        container.comp_chunk = comp.to_bytes();
        container.cont_chunk = self.controller.clone();
        container.info_xml = self.info.to_xml_bytes();
        container.prepare_for_writing();
        container
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.to_container().write()
    }

    /// Rebuild the model from a container holding a Frequency preset.
    ///
    /// The controller chunk is kept verbatim.
    pub fn from_container(container: &PresetContainer) -> Result<Self> {
        if container.class_id != CLASS_ID {
            return Err(FormatError::UnknownClassFormat(container.class_id.clone()));
        }
        let comp = RecordChunk::read(&container.comp_chunk, COMP_HEADER_SIZE)?;
        let mut header = [0u8; COMP_HEADER_SIZE];
        header.copy_from_slice(&comp.header);
        let start_bytes = u32::from_le_bytes(header);
        if start_bytes != START_BYTES {
            log::debug!("Frequency start bytes {start_bytes} (expected {START_BYTES})");
        }

        let info = if container.info_xml.is_empty() {
            PluginInfo::new(PLUGIN_CATEGORY, PLUGIN_NAME, PLUGIN_VENDOR)
        } else {
            PluginInfo::from_xml_bytes(&container.info_xml)
        };

        Ok(Self {
            params: comp.params,
            start_bytes,
            controller: container.cont_chunk.clone(),
            info,
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_container(&PresetContainer::read(bytes)?)
    }
}

#[derive(Serialize)]
struct FrequencyView<'a> {
    info: &'a PluginInfo,
    bands: Vec<FrequencyBand>,
    globals: Vec<(&'a str, f64)>,
}

impl Serialize for SteinbergFrequency {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let globals = POST_PARAMETERS
            .iter()
            .filter_map(|(key, _, _)| self.params.number(key).map(|v| (*key, v)))
            .collect();
        FrequencyView {
            info: &self.info,
            bands: self.bands(),
            globals,
        }
        .serialize(serializer)
    }
}

impl fmt::Display for SteinbergFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} by {}", self.info.name, self.info.vendor)?;
        writeln!(
            f,
            "{:>4} | {:>4} | {:>8} | {:>7} | {:>5} | {:<10} | {}",
            "slot", "ch", "freq", "gain", "q", "type", "edit"
        )?;
        for band in self.bands().iter().filter(|b| b.band_on) {
            let edit = band
                .edit_channel
                .map_or_else(|| "?".to_string(), |m| format!("{m:?}"));
            for (name, ch) in [("1", &band.ch1), ("2", &band.ch2)] {
                if !ch.on {
                    continue;
                }
                writeln!(
                    f,
                    "{:>4} | {:>4} | {:>8.1} | {:>+7.2} | {:>5.2} | {:<10} | {}",
                    band.slot,
                    name,
                    ch.freq,
                    ch.gain,
                    ch.q,
                    ch.band_type.to_string(),
                    edit
                )?;
            }
        }
        Ok(())
    }
}
