//! Shared workflow steps used by the eqpreset binary
//!
//! Each subcommand is a thin wrapper over one function here, so the same
//! pipeline can be driven from tests.

use crate::cli::Target;
use eqpreset_convert::{ableton_to_frequency, ableton_to_proq3, fabfilter_to_frequency};
use eqpreset_env::env_utils::get_output_dir;
use eqpreset_formats::{AbletonEq8, DecodedPreset, PresetContainer, ProQPreset, decode};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A preset that can be converted
#[derive(Debug, Clone)]
pub enum Source {
    Ableton(AbletonEq8),
    FabFilter(ProQPreset),
}

/// Load a conversion source: `.json` files are EQ Eight descriptions,
/// anything else must decode to a Pro-Q preset.
pub fn load_source(path: &Path) -> Result<Source, Box<dyn Error>> {
    let is_json = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        let text = fs::read_to_string(path)?;
        let eq: AbletonEq8 = serde_json::from_str(&text)?;
        log::info!(
            "loaded EQ Eight with {} bands from {}",
            eq.bands.len(),
            path.display()
        );
        return Ok(Source::Ableton(eq));
    }

    match decode(&fs::read(path)?)? {
        DecodedPreset::FabFilter(preset) => {
            log::info!(
                "loaded {} from {}",
                preset.layout().plugin_name,
                path.display()
            );
            Ok(Source::FabFilter(preset))
        }
        other => Err(format!("cannot convert a {} preset", other.kind()).into()),
    }
}

/// Convert a source and encode the result as a `.vstpreset`.
pub fn convert_source(source: &Source, target: Target) -> Result<Vec<u8>, Box<dyn Error>> {
    let bytes = match (source, target) {
        (Source::Ableton(eq), Target::Frequency) => ableton_to_frequency(eq)?.to_bytes()?,
        (Source::Ableton(eq), Target::Proq3) => ableton_to_proq3(eq)?.to_bytes()?,
        (Source::FabFilter(preset), Target::Frequency) => {
            fabfilter_to_frequency(preset)?.to_bytes()?
        }
        (Source::FabFilter(_), Target::Proq3) => {
            return Err("Pro-Q 3 output is only available for EQ Eight sources".into());
        }
    };
    Ok(bytes)
}

/// Where a converted preset goes: `output` when given, otherwise
/// `<stem>-<target>.vstpreset` in the output directory.
pub fn output_path(
    input: &Path,
    target: Target,
    output: Option<&Path>,
) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(path) = output {
        return Ok(path.to_path_buf());
    }
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("preset");
    let dir = get_output_dir(None)?;
    Ok(dir.join(format!("{stem}-{}.vstpreset", target.suffix())))
}

/// Convert `input` and write the result. Returns the written path.
pub fn convert_file(
    input: &Path,
    target: Target,
    output: Option<&Path>,
) -> Result<PathBuf, Box<dyn Error>> {
    let source = load_source(input)?;
    let bytes = convert_source(&source, target)?;
    let path = output_path(input, target, output)?;
    fs::write(&path, &bytes)?;
    log::debug!("{} bytes written", bytes.len());
    Ok(path)
}

/// Human summary or pretty JSON of any supported preset file.
pub fn inspect(path: &Path, json: bool) -> Result<String, Box<dyn Error>> {
    let preset = decode(&fs::read(path)?)?;
    if json {
        Ok(serde_json::to_string_pretty(&preset)? + "\n")
    } else {
        Ok(preset.to_string())
    }
}

/// Outcome of rewriting a container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTripReport {
    pub class_id: String,
    pub kind: &'static str,
    pub original_size: usize,
    pub rewritten_size: usize,
    /// First differing byte, `None` when the files are identical
    pub first_difference: Option<usize>,
}

impl RoundTripReport {
    pub fn is_identical(&self) -> bool {
        self.first_difference.is_none()
    }
}

impl fmt::Display for RoundTripReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} -> {} bytes, ",
            self.kind, self.class_id, self.original_size, self.rewritten_size
        )?;
        match self.first_difference {
            None => write!(f, "identical"),
            Some(at) => write!(f, "first difference at byte {at}"),
        }
    }
}

/// Read a `.vstpreset`, write it back and compare.
pub fn roundtrip(path: &Path) -> Result<RoundTripReport, Box<dyn Error>> {
    let original = fs::read(path)?;
    let mut container = PresetContainer::read(&original)?;
    let rewritten = container.to_bytes()?;

    let shorter = original.len().min(rewritten.len());
    let first_difference = original
        .iter()
        .zip(&rewritten)
        .position(|(a, b)| a != b)
        .or_else(|| (original.len() != rewritten.len()).then_some(shorter));

    let class_id = container.class_id.clone();
    let kind = eqpreset_formats::registry::decode_container(container)?.kind();
    Ok(RoundTripReport {
        class_id,
        kind,
        original_size: original.len(),
        rewritten_size: rewritten.len(),
        first_difference,
    })
}
