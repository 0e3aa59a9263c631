//! Class id to decoder table, and format sniffing for raw preset files.

use serde::Serialize;
use std::fmt;

use crate::container::{HEADER_MAGIC, PresetContainer};
use crate::error::{FormatError, Result};
use crate::fabfilter::{ProQFamily, ProQPreset};
use crate::info_xml::PluginInfo;
use crate::steinberg::SteinbergFrequency;
use crate::steinberg::frequency;
use crate::wrapper::{CCNK_MAGIC, FxpBlob};

/// A decoded preset of any supported kind
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedPreset {
    FabFilter(ProQPreset),
    Frequency(SteinbergFrequency),
    /// Container of an unknown plug-in. Chunks are kept opaque.
    Generic(PresetContainer),
}

type Decoder = fn(&PresetContainer) -> Result<DecodedPreset>;

struct Entry {
    class_id: &'static str,
    name: &'static str,
    decode: Decoder,
}

fn decode_pro_q(container: &PresetContainer) -> Result<DecodedPreset> {
    ProQPreset::from_container(container).map(DecodedPreset::FabFilter)
}

fn decode_frequency(container: &PresetContainer) -> Result<DecodedPreset> {
    SteinbergFrequency::from_container(container).map(DecodedPreset::Frequency)
}

static DECODERS: [Entry; 7] = [
    Entry {
        class_id: frequency::CLASS_ID,
        name: "SteinbergFrequency",
        decode: decode_frequency,
    },
    Entry {
        class_id: "E45D59E8CB2540FAB0F346E115F8AFD4",
        name: "FabFilterProQ",
        decode: decode_pro_q,
    },
    Entry {
        class_id: "5653544650517266616266696C746572",
        name: "FabFilterProQx64",
        decode: decode_pro_q,
    },
    Entry {
        class_id: "55FD08E6C00B44A697DA68F61C6FD576",
        name: "FabFilterProQ2",
        decode: decode_pro_q,
    },
    Entry {
        class_id: "5653544651327066616266696C746572",
        name: "FabFilterProQ2x64",
        decode: decode_pro_q,
    },
    Entry {
        class_id: "5653544651337066616266696C746572",
        name: "FabFilterProQ3",
        decode: decode_pro_q,
    },
    Entry {
        class_id: "72C4DB717A4D459AB97E51745D84B39D",
        name: "FabfilterProQ3VST3",
        decode: decode_pro_q,
    },
];

fn entry(class_id: &str) -> Option<&'static Entry> {
    DECODERS.iter().find(|e| e.class_id == class_id)
}

/// Registered name of a class id
pub fn class_name(class_id: &str) -> Option<&'static str> {
    entry(class_id).map(|e| e.name)
}

/// Decode a container, falling back to [`DecodedPreset::Generic`] for unknown class ids.
pub fn decode_container(container: PresetContainer) -> Result<DecodedPreset> {
    match entry(&container.class_id) {
        Some(e) => (e.decode)(&container),
        None => {
            log::info!(
                "no decoder for class id {}, keeping chunks opaque",
                container.class_id
            );
            Ok(DecodedPreset::Generic(container))
        }
    }
}

/// Decode a container and refuse unknown class ids.
pub fn decode_container_strict(container: &PresetContainer) -> Result<DecodedPreset> {
    let e = entry(&container.class_id)
        .ok_or_else(|| FormatError::UnknownClassFormat(container.class_id.clone()))?;
    (e.decode)(container)
}

/// Decode a `.vstpreset`, `.ffp` or `.fxp` byte buffer, picked by its leading magic.
pub fn decode(bytes: &[u8]) -> Result<DecodedPreset> {
    let magic: [u8; 4] = bytes
        .get(..4)
        .and_then(|m| m.try_into().ok())
        .ok_or(FormatError::Truncated {
            offset: 0,
            wanted: 4,
        })?;

    if magic == HEADER_MAGIC {
        decode_container(PresetContainer::read(bytes)?)
    } else if magic == CCNK_MAGIC {
        ProQPreset::from_fxp(&FxpBlob::from_bytes(bytes)?).map(DecodedPreset::FabFilter)
    } else if ProQFamily::from_magic(magic).is_some() {
        ProQPreset::read_ffp(bytes).map(DecodedPreset::FabFilter)
    } else {
        Err(FormatError::corrupt("preset file", magic))
    }
}

impl DecodedPreset {
    pub fn kind(&self) -> &'static str {
        match self {
            DecodedPreset::FabFilter(p) => p.layout().plugin_name,
            DecodedPreset::Frequency(_) => frequency::PLUGIN_NAME,
            DecodedPreset::Generic(_) => "generic",
        }
    }
}

#[derive(Serialize)]
struct GenericView<'a> {
    class_id: &'a str,
    comp_size: usize,
    cont_size: usize,
    info: Option<PluginInfo>,
}

impl<'a> GenericView<'a> {
    fn new(container: &'a PresetContainer) -> Self {
        Self {
            class_id: &container.class_id,
            comp_size: container.comp_chunk.len(),
            cont_size: container.cont_chunk.len(),
            info: (!container.info_xml.is_empty())
                .then(|| PluginInfo::from_xml_bytes(&container.info_xml)),
        }
    }
}

impl Serialize for DecodedPreset {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match self {
            DecodedPreset::FabFilter(p) => p.serialize(serializer),
            DecodedPreset::Frequency(p) => p.serialize(serializer),
            DecodedPreset::Generic(c) => GenericView::new(c).serialize(serializer),
        }
    }
}

impl fmt::Display for DecodedPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedPreset::FabFilter(p) => write!(f, "{p}"),
            DecodedPreset::Frequency(p) => write!(f, "{p}"),
            DecodedPreset::Generic(c) => {
                let view = GenericView::new(c);
                writeln!(f, "class id {}", view.class_id)?;
                if let Some(info) = view.info {
                    writeln!(f, "{} by {} ({})", info.name, info.vendor, info.category)?;
                }
                writeln!(
                    f,
                    "comp chunk {} bytes, cont chunk {} bytes",
                    view.comp_size, view.cont_size
                )
            }
        }
    }
}
