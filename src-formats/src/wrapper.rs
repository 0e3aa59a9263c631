//! Legacy VST2 envelope found inside some Comp chunks.
//!
//! ```text
//! "VstW" | size u32 BE (= 8) | version u32 BE | bypass u32 BE | FXP blob
//! FXP blob: "CcnK" | byteSize u32 BE | fxMagic | ...
//! ```
//! The FXP blob is kept as raw bytes. Only its size field is rewritten on
//! output; [`FxpBlob::content`] offers a read-only view of the program.

use crate::byte_cursor::{ByteReader, ByteWriter, Endian};
use crate::error::{FormatError, Result};

pub const VSTW_MAGIC: [u8; 4] = *b"VstW";
pub const CCNK_MAGIC: [u8; 4] = *b"CcnK";

const VSTW_HEADER_SIZE: u32 = 8;
const PROGRAM_NAME_SIZE: usize = 28;
const BANK_FUTURE_SIZE: u64 = 128;
/// Program header, parameter count and name of one bank entry
const BANK_PROGRAM_MIN_SIZE: u64 = 24 + 4 + PROGRAM_NAME_SIZE as u64;

/// The four FXP/FXB flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FxpKind {
    /// `FxCk`: one program as normalized parameters
    Program,
    /// `FPCh`: one program as an opaque chunk
    ProgramChunk,
    /// `FxBk`: bank of parameter programs
    Bank,
    /// `FBCh`: bank as an opaque chunk
    BankChunk,
}

impl FxpKind {
    pub fn from_magic(magic: [u8; 4]) -> Option<Self> {
        match &magic {
            b"FxCk" => Some(FxpKind::Program),
            b"FPCh" => Some(FxpKind::ProgramChunk),
            b"FxBk" => Some(FxpKind::Bank),
            b"FBCh" => Some(FxpKind::BankChunk),
            _ => None,
        }
    }

    pub fn magic(self) -> [u8; 4] {
        match self {
            FxpKind::Program => *b"FxCk",
            FxpKind::ProgramChunk => *b"FPCh",
            FxpKind::Bank => *b"FxBk",
            FxpKind::BankChunk => *b"FBCh",
        }
    }
}

/// Decoded view of an FXP program
#[derive(Debug, Clone, PartialEq)]
pub struct FxProgram {
    pub name: String,
    pub params: Vec<f32>,
}

/// Decoded view of an FXP/FXB blob
#[derive(Debug, Clone, PartialEq)]
pub enum FxpContent {
    Program(FxProgram),
    ProgramChunk { name: String, chunk: Vec<u8> },
    Bank(Vec<FxProgram>),
    BankChunk(Vec<u8>),
}

impl FxpContent {
    /// Opaque chunk payload, if this is a chunk program or bank
    pub fn chunk(&self) -> Option<&[u8]> {
        match self {
            FxpContent::ProgramChunk { chunk, .. } | FxpContent::BankChunk(chunk) => Some(chunk),
            _ => None,
        }
    }

    /// Normalized parameters of the first (or only) program
    pub fn params(&self) -> Option<&[f32]> {
        match self {
            FxpContent::Program(p) => Some(&p.params),
            FxpContent::Bank(programs) => programs.first().map(|p| p.params.as_slice()),
            _ => None,
        }
    }
}

/// Raw FXP/FXB bytes, validated on construction
#[derive(Debug, Clone, PartialEq)]
pub struct FxpBlob {
    bytes: Vec<u8>,
}

impl FxpBlob {
    /// Read a blob starting at the reader's position.
    ///
    /// The blob length is taken from the big-endian size field plus 8.
    pub fn read(reader: &mut ByteReader<'_>) -> Result<Self> {
        let start = reader.position();
        let magic = reader.read_tag()?;
        if magic != CCNK_MAGIC {
            return Err(FormatError::corrupt("FXP blob", magic));
        }
        let size = reader.read_u32_in(Endian::Big)? as u64 + 8;
        let fx_magic = reader.read_tag()?;
        if FxpKind::from_magic(fx_magic).is_none() {
            return Err(FormatError::corrupt("FXP program type", fx_magic));
        }
        reader.seek(start)?;
        let bytes = reader.read_bytes(size as usize)?;
        Ok(Self { bytes })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(bytes, Endian::Big);
        Self::read(&mut reader)
    }

    /// Build an `FPCh` program around an opaque chunk.
    pub fn program_chunk(fx_id: [u8; 4], fx_version: i32, name: &str, chunk: &[u8]) -> Self {
        let mut w = Self::start(FxpKind::ProgramChunk, fx_id, fx_version, 1);
        w.write_padded(name, PROGRAM_NAME_SIZE);
        w.write_i32(chunk.len() as i32);
        w.write_bytes(chunk);
        Self::finish(w)
    }

    /// Build an `FxCk` program from normalized parameters.
    pub fn program(fx_id: [u8; 4], fx_version: i32, name: &str, params: &[f32]) -> Self {
        let mut w = Self::start(FxpKind::Program, fx_id, fx_version, params.len() as i32);
        w.write_padded(name, PROGRAM_NAME_SIZE);
        for &p in params {
            w.write_f32(p);
        }
        Self::finish(w)
    }

    fn start(kind: FxpKind, fx_id: [u8; 4], fx_version: i32, count: i32) -> ByteWriter {
        let mut w = ByteWriter::new(Endian::Big);
        w.write_bytes(&CCNK_MAGIC).write_u32(0);
        w.write_bytes(&kind.magic()).write_i32(1);
        w.write_bytes(&fx_id).write_i32(fx_version).write_i32(count);
        w
    }

    fn finish(w: ByteWriter) -> Self {
        let mut blob = Self {
            bytes: w.into_inner(),
        };
        blob.refresh_size();
        blob
    }

    fn refresh_size(&mut self) {
        let size = (self.bytes.len() as u32).saturating_sub(8);
        self.bytes[4..8].copy_from_slice(&size.to_be_bytes());
    }

    pub fn kind(&self) -> Option<FxpKind> {
        let magic: [u8; 4] = self.bytes.get(8..12)?.try_into().ok()?;
        FxpKind::from_magic(magic)
    }

    pub fn fx_id(&self) -> Option<[u8; 4]> {
        self.bytes.get(16..20)?.try_into().ok()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bytes for output, with the size field recomputed.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut copy = self.clone();
        copy.refresh_size();
        copy.bytes
    }

    /// Decode the program header and payload.
    ///
    /// Counts are checked against the bytes left before anything is
    /// allocated.
    pub fn content(&self) -> Result<FxpContent> {
        let mut r = ByteReader::new(&self.bytes, Endian::Big);
        r.skip(8)?;
        let fx_magic = r.read_tag()?;
        let kind = FxpKind::from_magic(fx_magic)
            .ok_or_else(|| FormatError::corrupt("FXP program type", fx_magic))?;
        let _version = r.read_i32()?;
        let _fx_id = r.read_tag()?;
        let _fx_version = r.read_i32()?;
        let count = r.read_i32()?;

        Ok(match kind {
            FxpKind::Program => FxpContent::Program(read_params_program(&mut r, count)?),
            FxpKind::ProgramChunk => {
                let name = r.read_nul_padded(PROGRAM_NAME_SIZE)?;
                let size = r.read_i32()?;
                let size = checked_count(&r, size, 1)?;
                FxpContent::ProgramChunk {
                    name,
                    chunk: r.read_bytes(size)?,
                }
            }
            FxpKind::Bank => {
                r.skip(BANK_FUTURE_SIZE)?;
                let count = checked_count(&r, count, BANK_PROGRAM_MIN_SIZE)?;
                let mut programs = Vec::with_capacity(count);
                for _ in 0..count {
                    // each program carries its own 28-byte FXP header
                    r.skip(24)?;
                    let params = r.read_i32()?;
                    programs.push(read_params_program(&mut r, params)?);
                }
                FxpContent::Bank(programs)
            }
            FxpKind::BankChunk => {
                r.skip(BANK_FUTURE_SIZE)?;
                let size = r.read_i32()?;
                let size = checked_count(&r, size, 1)?;
                FxpContent::BankChunk(r.read_bytes(size)?)
            }
        })
    }
}

/// Number of `item_size` items a count field announces, if the buffer can hold them.
fn checked_count(r: &ByteReader<'_>, count: i32, item_size: u64) -> Result<usize> {
    let offset = r.position();
    let count = u64::try_from(count)
        .map_err(|_| FormatError::Invalid(format!("negative FXP count {count} at {offset}")))?;
    let wanted = count.saturating_mul(item_size);
    if wanted > r.remaining() {
        return Err(FormatError::Truncated { offset, wanted });
    }
    Ok(count as usize)
}

fn read_params_program(r: &mut ByteReader<'_>, count: i32) -> Result<FxProgram> {
    let name = r.read_nul_padded(PROGRAM_NAME_SIZE)?;
    let count = checked_count(r, count, 4)?;
    let mut params = Vec::with_capacity(count);
    for _ in 0..count {
        params.push(r.read_f32()?);
    }
    Ok(FxProgram { name, params })
}

/// `VstW` envelope around an FXP blob
#[derive(Debug, Clone, PartialEq)]
pub struct VstWrapper {
    pub version: u32,
    pub bypass: u32,
    pub fxp: FxpBlob,
}

impl VstWrapper {
    pub fn new(fxp: FxpBlob) -> Self {
        Self {
            version: 1,
            bypass: 0,
            fxp,
        }
    }

    pub fn is_wrapped(data: &[u8]) -> bool {
        data.starts_with(&VSTW_MAGIC)
    }

    pub fn read(data: &[u8]) -> Result<Self> {
        let mut r = ByteReader::new(data, Endian::Big);
        let magic = r.read_tag()?;
        if magic != VSTW_MAGIC {
            return Err(FormatError::corrupt("VstW header", magic));
        }
        let size = r.read_u32()?;
        let version = r.read_u32()?;
        let bypass = r.read_u32()?;
        if size > VSTW_HEADER_SIZE {
            r.skip((size - VSTW_HEADER_SIZE) as u64)?;
        }
        log::debug!("VstW size {size}, version {version}, bypass {bypass}");
        let fxp = FxpBlob::read(&mut r)?;
        Ok(Self {
            version,
            bypass,
            fxp,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut w = ByteWriter::new(Endian::Big);
        w.write_bytes(&VSTW_MAGIC);
        w.write_u32(VSTW_HEADER_SIZE)
            .write_u32(self.version)
            .write_u32(self.bypass);
        w.write_bytes(&self.fxp.to_bytes());
        w.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_chunk_layout() {
        let blob = FxpBlob::program_chunk(*b"FQ3p", 1, "Preset", b"FFBS-data");
        let bytes = blob.as_bytes();
        assert_eq!(&bytes[0..4], b"CcnK");
        let size = u32::from_be_bytes(bytes[4..8].try_into().unwrap());
        assert_eq!(size as usize, bytes.len() - 8);
        assert_eq!(&bytes[8..12], b"FPCh");
        assert_eq!(blob.fx_id(), Some(*b"FQ3p"));
        match blob.content().unwrap() {
            FxpContent::ProgramChunk { name, chunk } => {
                assert_eq!(name, "Preset");
                assert_eq!(chunk, b"FFBS-data");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_params_program() {
        let blob = FxpBlob::program(*b"FPQr", 1, "Init", &[0.25, 0.5, 1.0]);
        assert_eq!(blob.kind(), Some(FxpKind::Program));
        let content = blob.content().unwrap();
        assert_eq!(content.params(), Some(&[0.25f32, 0.5, 1.0][..]));
        assert!(content.chunk().is_none());
    }

    #[test]
    fn test_wrapper_round_trip_is_byte_exact() {
        let wrapper = VstWrapper::new(FxpBlob::program_chunk(*b"FQ2p", 2, "A", &[1, 2, 3, 4]));
        let bytes = wrapper.to_bytes();
        assert!(VstWrapper::is_wrapped(&bytes));
        assert_eq!(&bytes[4..8], &[0, 0, 0, 8]);
        let back = VstWrapper::read(&bytes).unwrap();
        assert_eq!(back, wrapper);
        assert_eq!(back.to_bytes(), bytes);
    }

    #[test]
    fn test_rejects_unknown_fxp_magic() {
        let blob = FxpBlob::program(*b"FPQr", 1, "x", &[0.0]);
        let mut bytes = blob.as_bytes().to_vec();
        bytes[8..12].copy_from_slice(b"XXXX");
        let result = FxpBlob::from_bytes(&bytes);
        assert!(matches!(result, Err(FormatError::CorruptContainer { .. })));
    }

    #[test]
    fn test_size_field_is_recomputed() {
        let mut blob = FxpBlob::program(*b"FPQr", 1, "x", &[0.0, 1.0]);
        let expected = blob.as_bytes().to_vec();
        blob.bytes[4..8].copy_from_slice(&[0xFF; 4]);
        assert_eq!(blob.to_bytes(), expected);
    }
}
