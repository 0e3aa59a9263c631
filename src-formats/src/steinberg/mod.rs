//! Steinberg stock plug-ins: parameter-record chunks and the Frequency EQ model

/// Steinberg Frequency 8-band EQ parameter model
pub mod frequency;
/// Name/index/value record chunks used by Steinberg plug-ins
pub mod records;

pub use frequency::{
    BAND_COUNT, BandMode1And8, BandMode2To7, BandParam, Channel, ChannelSettings, FrequencyBand,
    FrequencyBandType, FrequencyChannelMode, SteinbergFrequency, param_key,
};
pub use records::RecordChunk;
