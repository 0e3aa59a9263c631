use std::fmt;

/// Errors raised while decoding or encoding preset bytes
///
/// Structural problems (magic, version, truncated chunk list) are always fatal.
/// Bad values inside an otherwise valid structure never end up here: they are
/// replaced by a default and logged.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("corrupt {context}: unexpected magic {found}")]
    CorruptContainer { context: &'static str, found: Magic },

    #[error("unsupported preset container version: {0}")]
    UnsupportedVersion(i32),

    #[error("truncated data: needed {wanted} byte(s) at offset {offset}")]
    Truncated { offset: u64, wanted: u64 },

    #[error("chunk offsets are stale, call prepare_for_writing() before write()")]
    StaleLayout,

    #[error("no decoder registered for class id {0}")]
    UnknownClassFormat(String),

    #[error("invalid preset data: {0}")]
    Invalid(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used across the codecs
pub type Result<T> = std::result::Result<T, FormatError>;

/// Four raw bytes read where a tag was expected, printed as text when possible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magic(pub [u8; 4]);

impl fmt::Display for Magic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            write!(f, "'{}'", String::from_utf8_lossy(&self.0))
        } else {
            write!(f, "{:02X?}", self.0)
        }
    }
}

impl FormatError {
    pub(crate) fn corrupt(context: &'static str, found: [u8; 4]) -> Self {
        FormatError::CorruptContainer {
            context,
            found: Magic(found),
        }
    }
}
