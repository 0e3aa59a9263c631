//! Equalizer band conversion between plug-in models
//!
//! Every converter is a pure function from a source model to a freshly
//! built target model. Targets are returned unwritten so callers can pick
//! the output form.

pub mod ableton_to_frequency;
pub mod ableton_to_proq3;
pub mod error;
pub mod fabfilter_to_frequency;

pub use ableton_to_frequency::ableton_to_frequency;
pub use ableton_to_proq3::ableton_to_proq3;
pub use error::{ConvertError, Result};
pub use fabfilter_to_frequency::{fabfilter_to_frequency, select_interior};

use eqpreset_formats::{AbletonChannelMode, AbletonEq8};

/// EQ Eight sources are only accepted in Stereo mode.
pub(crate) fn require_stereo(eq: &AbletonEq8) -> Result<()> {
    match eq.mode {
        AbletonChannelMode::Stereo => Ok(()),
        other => Err(ConvertError::UnsupportedChannelMode(other.into())),
    }
}
