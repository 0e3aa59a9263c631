use serde::Serialize;

use super::{BandShape, CutSlope, StereoPlacement};

/// How a generation marks a band as enabled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnabledFlag {
    /// One leading float holds the number of enabled bands.
    /// Slot `i` is on iff `i < count`.
    LeadingCount,
    /// Per-band float, 1 = on, anything else off. Writes `off` for disabled bands.
    PerBand { off: f32 },
}

/// One float of a band record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    Enabled,
    Frequency,
    Gain,
    Q,
    Shape,
    Slope,
    Placement,
    DynamicRange,
    DynamicThreshold,
    /// Unknown float, written with the given value and ignored on read
    Constant(f32),
}

/// Mapping of one normalized 0..1 float onto its native value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalized {
    Verbatim,
    Frequency,
    /// `x * 60 - 30`
    Decibel,
    /// `floor(x * max)`
    Floor(f64),
    /// `round(x * max)`
    Round(f64),
    Range(f64, f64),
}

/// Everything that differs between Pro-Q generations
#[derive(Debug)]
pub struct ProQLayout {
    pub enabled: EnabledFlag,
    pub fields: &'static [Field],
    pub shapes: &'static [BandShape],
    pub slopes: &'static [CutSlope],
    pub placements: &'static [StereoPlacement],
    /// Names of the tail floats, in order. Floats past the list stay anonymous.
    pub tail_names: &'static [&'static str],
    /// Tail used by a fresh preset
    pub default_tail: &'static [f32],
    /// Tail position of the global channel mode, if the generation has one
    pub channel_mode_at: Option<usize>,
    pub normalized_leading: Normalized,
    pub normalized_fields: &'static [Normalized],
    pub normalized_tail: &'static [Normalized],
    pub ffp_magic: [u8; 4],
    pub version: u32,
    pub vst3_class_id: &'static str,
    pub vst2_class_id: &'static str,
    pub plugin_name: &'static str,
}

impl ProQLayout {
    pub fn leading_floats(&self) -> usize {
        match self.enabled {
            EnabledFlag::LeadingCount => 1,
            EnabledFlag::PerBand { .. } => 0,
        }
    }

    /// Floats before the tail
    pub fn band_floats(&self) -> usize {
        self.leading_floats() + super::BAND_SLOTS * self.fields.len()
    }
}

/// The three Pro-Q generations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProQFamily {
    ProQ1,
    ProQ2,
    ProQ3,
}

impl ProQFamily {
    pub const ALL: [ProQFamily; 3] = [ProQFamily::ProQ1, ProQFamily::ProQ2, ProQFamily::ProQ3];

    pub fn layout(self) -> &'static ProQLayout {
        match self {
            ProQFamily::ProQ1 => &PRO_Q1,
            ProQFamily::ProQ2 => &PRO_Q2,
            ProQFamily::ProQ3 => &PRO_Q3,
        }
    }

    /// Generation owning an `.ffp` magic or an FXP fxID
    pub fn from_magic(magic: [u8; 4]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.layout().ffp_magic == magic)
    }

    /// Generation owning a VST3 or VST2 class id
    pub fn from_class_id(class_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| {
            let layout = family.layout();
            layout.vst3_class_id == class_id || layout.vst2_class_id == class_id
        })
    }
}

pub const PLUGIN_CATEGORY: &str = "Fx|EQ";
pub const PLUGIN_VENDOR: &str = "FabFilter";

const PRO_Q1_FIELDS: [Field; 7] = [
    Field::Frequency,
    Field::Gain,
    Field::Q,
    Field::Shape,
    Field::Slope,
    Field::Placement,
    Field::Constant(1.0),
];

const PRO_Q2_FIELDS: [Field; 7] = [
    Field::Enabled,
    Field::Frequency,
    Field::Gain,
    Field::Q,
    Field::Shape,
    Field::Slope,
    Field::Placement,
];

const PRO_Q3_FIELDS: [Field; 13] = [
    Field::Enabled,
    Field::Constant(1.0),
    Field::Frequency,
    Field::Gain,
    Field::DynamicRange,
    Field::Constant(1.0),
    Field::DynamicThreshold,
    Field::Q,
    Field::Shape,
    Field::Slope,
    Field::Placement,
    Field::Constant(1.0),
    Field::Constant(0.0),
];

const PRO_Q1_SHAPES: [BandShape; 6] = [
    BandShape::Bell,
    BandShape::LowShelf,
    BandShape::LowCut,
    BandShape::HighShelf,
    BandShape::HighCut,
    BandShape::Notch,
];

const PRO_Q2_SHAPES: [BandShape; 8] = [
    BandShape::Bell,
    BandShape::LowShelf,
    BandShape::LowCut,
    BandShape::HighShelf,
    BandShape::HighCut,
    BandShape::Notch,
    BandShape::BandPass,
    BandShape::TiltShelf,
];

const PRO_Q1_SLOPES: [CutSlope; 4] = [
    CutSlope::Slope6,
    CutSlope::Slope12,
    CutSlope::Slope24,
    CutSlope::Slope48,
];

const PRO_Q2_SLOPES: [CutSlope; 9] = [
    CutSlope::Slope6,
    CutSlope::Slope12,
    CutSlope::Slope18,
    CutSlope::Slope24,
    CutSlope::Slope30,
    CutSlope::Slope36,
    CutSlope::Slope48,
    CutSlope::Slope72,
    CutSlope::Slope96,
];

const PRO_Q3_SLOPES: [CutSlope; 10] = [
    CutSlope::Slope6,
    CutSlope::Slope12,
    CutSlope::Slope18,
    CutSlope::Slope24,
    CutSlope::Slope30,
    CutSlope::Slope36,
    CutSlope::Slope48,
    CutSlope::Slope72,
    CutSlope::Slope96,
    CutSlope::Brickwall,
];

const TWO_SIDED: [StereoPlacement; 3] = [
    StereoPlacement::LeftOrMid,
    StereoPlacement::RightOrSide,
    StereoPlacement::Stereo,
];

const FIVE_WAY: [StereoPlacement; 5] = [
    StereoPlacement::LeftOrMid,
    StereoPlacement::RightOrSide,
    StereoPlacement::Stereo,
    StereoPlacement::Mid,
    StereoPlacement::Side,
];

static PRO_Q1: ProQLayout = ProQLayout {
    enabled: EnabledFlag::LeadingCount,
    fields: &PRO_Q1_FIELDS,
    shapes: &PRO_Q1_SHAPES,
    slopes: &PRO_Q1_SLOPES,
    placements: &TWO_SIDED,
    tail_names: &[
        "OutputGain",
        "OutputPan",
        "DisplayRange",
        "ProcessMode",
        "ChannelMode",
        "Bypass",
        "ReceiveMidi",
        "Analyzer",
        "AnalyzerResolution",
        "AnalyzerSpeed",
        "SoloBand",
    ],
    default_tail: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0],
    channel_mode_at: Some(4),
    normalized_leading: Normalized::Range(0.0, 24.0),
    normalized_fields: &[
        Normalized::Frequency,
        Normalized::Decibel,
        Normalized::Verbatim,
        Normalized::Floor(5.0),
        Normalized::Floor(3.0),
        Normalized::Floor(2.0),
        Normalized::Verbatim,
    ],
    normalized_tail: &[
        Normalized::Range(-1.0, 1.0),
        Normalized::Range(-1.0, 1.0),
        Normalized::Range(0.0, 3.0),
        Normalized::Range(0.0, 4.0),
        Normalized::Verbatim,
        Normalized::Verbatim,
        Normalized::Verbatim,
        Normalized::Range(0.0, 3.0),
        Normalized::Range(0.0, 3.0),
        Normalized::Range(0.0, 3.0),
        Normalized::Range(-1.0, 1.0),
    ],
    ffp_magic: *b"FPQr",
    version: 2,
    vst3_class_id: "E45D59E8CB2540FAB0F346E115F8AFD4",
    vst2_class_id: "5653544650517266616266696C746572",
    plugin_name: "FabFilter Pro-Q",
};

static PRO_Q2: ProQLayout = ProQLayout {
    enabled: EnabledFlag::PerBand { off: 2.0 },
    fields: &PRO_Q2_FIELDS,
    shapes: &PRO_Q2_SHAPES,
    slopes: &PRO_Q2_SLOPES,
    placements: &TWO_SIDED,
    tail_names: &[
        "ProcessingMode",
        "ProcessingResolution",
        "ChannelMode",
        "GainScale",
        "OutputLevel",
        "OutputPan",
        "ByPass",
        "OutputInvertPhase",
        "AutoGain",
        "AnalyzerShowPreProcessing",
        "AnalyzerShowPostProcessing",
        "AnalyzerShowSidechain",
        "AnalyzerRange",
        "AnalyzerResolution",
        "AnalyzerSpeed",
        "AnalyzerTilt",
        "AnalyzerFreeze",
        "SpectrumGrab",
        "DisplayRange",
        "ReceiveMidi",
        "SoloBand",
        "SoloGain",
    ],
    default_tail: &[
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, -1.0, 0.0,
    ],
    channel_mode_at: Some(2),
    normalized_leading: Normalized::Verbatim,
    normalized_fields: &[
        Normalized::Verbatim,
        Normalized::Frequency,
        Normalized::Decibel,
        Normalized::Verbatim,
        Normalized::Floor(7.0),
        Normalized::Floor(8.0),
        Normalized::Floor(2.0),
    ],
    normalized_tail: &[
        Normalized::Range(0.0, 2.0),
        Normalized::Range(0.0, 4.0),
        Normalized::Verbatim,
        Normalized::Verbatim,
        Normalized::Range(-1.0, 1.0),
        Normalized::Range(-1.0, 1.0),
        Normalized::Verbatim,
        Normalized::Verbatim,
        Normalized::Verbatim,
        Normalized::Verbatim,
        Normalized::Verbatim,
        Normalized::Verbatim,
        Normalized::Range(0.0, 2.0),
        Normalized::Range(0.0, 3.0),
        Normalized::Range(0.0, 4.0),
        Normalized::Range(0.0, 4.0),
        Normalized::Verbatim,
        Normalized::Verbatim,
        Normalized::Range(0.0, 3.0),
        Normalized::Verbatim,
        Normalized::Range(-1.0, 23.0),
        Normalized::Verbatim,
    ],
    ffp_magic: *b"FQ2p",
    version: 2,
    vst3_class_id: "55FD08E6C00B44A697DA68F61C6FD576",
    vst2_class_id: "5653544651327066616266696C746572",
    plugin_name: "FabFilter Pro-Q 2",
};

static PRO_Q3: ProQLayout = ProQLayout {
    enabled: EnabledFlag::PerBand { off: 0.0 },
    fields: &PRO_Q3_FIELDS,
    shapes: &BandShape::ALL,
    slopes: &PRO_Q3_SLOPES,
    placements: &FIVE_WAY,
    tail_names: &[],
    default_tail: &[
        0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, -1.0, 1.0, 2.0, 2.0, 3.0, 0.0, 1.0,
        1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ],
    channel_mode_at: None,
    normalized_leading: Normalized::Verbatim,
    normalized_fields: &[
        Normalized::Verbatim,
        Normalized::Verbatim,
        Normalized::Frequency,
        Normalized::Decibel,
        Normalized::Decibel,
        Normalized::Verbatim,
        Normalized::Verbatim,
        Normalized::Verbatim,
        Normalized::Round(8.0),
        Normalized::Round(9.0),
        Normalized::Round(4.0),
        Normalized::Verbatim,
        Normalized::Verbatim,
    ],
    normalized_tail: &[],
    ffp_magic: *b"FQ3p",
    version: 4,
    vst3_class_id: "72C4DB717A4D459AB97E51745D84B39D",
    vst2_class_id: "5653544651337066616266696C746572",
    plugin_name: "FabFilter Pro-Q 3",
};
