//! EQ preset formats
//!
//! Binary codecs for the preset files of DAW equalizer plug-ins:
//!
//! - `container`: the VST3 `.vstpreset` chunk container
//! - `fabfilter`: FabFilter Pro-Q 1/2/3 parameter arrays
//! - `steinberg`: Steinberg parameter-record chunks and the Frequency EQ
//! - `ableton`: Ableton Live EQ Eight band description
//! - `registry`: class id to decoder table

/// Ableton EQ Eight model
pub mod ableton;
/// Endian-aware reader and writer over byte buffers
pub mod byte_cursor;
/// VST3 preset container
pub mod container;
/// Format errors
pub mod error;
/// FabFilter Pro-Q codecs
pub mod fabfilter;
/// Info chunk XML
pub mod info_xml;
/// Ordered parameter map
pub mod params;
/// Class id registry and format sniffing
pub mod registry;
/// Steinberg plug-ins
pub mod steinberg;
/// Legacy VstW / FXP envelope
pub mod wrapper;

pub use ableton::{AbletonBandMode, AbletonChannelMode, AbletonEq8, AbletonEq8Band, BandSet};
pub use byte_cursor::{ByteReader, ByteWriter, Endian};
pub use container::{ChunkLayout, PresetContainer};
pub use error::{FormatError, Result};
pub use fabfilter::{
    BandShape, ChannelMode, CutSlope, FabFilterBand, ProQFamily, ProQPreset, StereoPlacement,
};
pub use info_xml::PluginInfo;
pub use params::{Parameter, ParameterKind, ParameterValue, Parameters};
pub use registry::{DecodedPreset, decode};
pub use steinberg::SteinbergFrequency;
pub use wrapper::{FxpBlob, FxpContent, VstWrapper};
