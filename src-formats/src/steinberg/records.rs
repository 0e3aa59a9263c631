use crate::byte_cursor::{ByteReader, ByteWriter, Endian};
use crate::error::{FormatError, Result};
use crate::params::{ParameterValue, Parameters};

/// Bytes reserved for a record name
pub const NAME_SIZE: usize = 128;
/// Name + i32 index + f64 value
pub const RECORD_SIZE: usize = NAME_SIZE + 4 + 8;
/// Header in front of the component (Comp) records
pub const COMP_HEADER_SIZE: usize = 4;
/// Header in front of the controller (Cont) records
pub const CONT_HEADER_SIZE: usize = 24;

/// A Steinberg chunk: opaque header followed by fixed-size parameter records
///
/// Each record is a 128-byte NUL-padded ASCII name, an `i32` index and an
/// `f64` value, all little-endian. Records run until the end of the chunk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordChunk {
    pub header: Vec<u8>,
    pub params: Parameters,
}

impl RecordChunk {
    pub fn new(header: Vec<u8>) -> Self {
        Self {
            header,
            params: Parameters::new(),
        }
    }

    /// Parse a chunk whose header is `header_size` bytes long.
    pub fn read(data: &[u8], header_size: usize) -> Result<Self> {
        let mut r = ByteReader::new(data, Endian::Little);
        let header = r.read_bytes(header_size)?;
        let mut chunk = RecordChunk::new(header);

        let mut counter = 0usize;
        while r.remaining() > 0 {
            if r.remaining() < RECORD_SIZE as u64 {
                return Err(FormatError::Truncated {
                    offset: r.position(),
                    wanted: RECORD_SIZE as u64,
                });
            }
            let name = r.read_nul_padded(NAME_SIZE)?;
            let index = r.read_i32()?;
            let value = r.read_f64()?;
            counter += 1;
            log::debug!("record {counter} {name}, index: {index}, value: {value}");
            chunk.params.set_number_with_index(&name, index, value);
        }
        Ok(chunk)
    }

    /// Header then every number parameter as a record, in map order.
    ///
    /// String parameters are written as raw ASCII and byte parameters verbatim,
    /// so callers can splice extra data between records when a plug-in needs it.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut w = ByteWriter::new(Endian::Little);
        w.write_bytes(&self.header);
        for param in &self.params {
            match &param.value {
                ParameterValue::Number(v) => {
                    w.write_padded(&param.key, NAME_SIZE);
                    w.write_i32(param.index);
                    w.write_f64(*v);
                }
                ParameterValue::String(s) => {
                    w.write_ascii(s);
                }
                ParameterValue::Bytes(b) => {
                    w.write_bytes(b);
                }
            }
        }
        w.into_inner()
    }
}
