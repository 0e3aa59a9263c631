use eqpreset_formats::FormatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Only Stereo conversion is supported. ChannelMode was {0}!")]
    UnsupportedChannelMode(i32),

    #[error(transparent)]
    Format(#[from] FormatError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
