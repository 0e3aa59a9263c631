//! VST3 preset container (`.vstpreset`) codec.
//!
//! ```text
//! offset 0            "VST3"
//! offset 4            version (i32, always 1)
//! offset 8            class id (32 bytes ASCII, NUL padded)
//! offset 40           list position (i64)
//! offset 48           Comp payload
//! 48 + compSize       Cont payload
//! ...                 Info payload (UTF-8 XML with BOM)
//! list position       "List", count (i32), count x { id[4], offset i64, size i64 }
//! ```
//! Everything in the container itself is little-endian.

use crate::byte_cursor::{ByteReader, ByteWriter, Endian};
use crate::error::{FormatError, Result};
use serde::Serialize;

pub const HEADER_MAGIC: [u8; 4] = *b"VST3";
pub const VERSION: i32 = 1;
pub const CLASS_ID_SIZE: usize = 32;
/// Magic + version + class id + list position
pub const HEADER_SIZE: u64 = 48;

pub const CHUNK_LIST: [u8; 4] = *b"List";
pub const CHUNK_COMP: [u8; 4] = *b"Comp";
pub const CHUNK_CONT: [u8; 4] = *b"Cont";
pub const CHUNK_INFO: [u8; 4] = *b"Info";

/// Absolute positions and sizes of the three chunks and of the chunk list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChunkLayout {
    pub comp_start: u64,
    pub comp_size: u64,
    pub cont_start: u64,
    pub cont_size: u64,
    pub info_start: u64,
    pub info_size: u64,
    pub list_pos: u64,
}

impl ChunkLayout {
    /// Layout of chunks written back to back right after the header.
    pub fn compute(comp_size: u64, cont_size: u64, info_size: u64) -> Self {
        let comp_start = HEADER_SIZE;
        let cont_start = comp_start + comp_size;
        let info_start = cont_start + cont_size;
        Self {
            comp_start,
            comp_size,
            cont_start,
            cont_size,
            info_start,
            info_size,
            list_pos: info_start + info_size,
        }
    }

    /// True when chunks are contiguous and the list follows the last one.
    pub fn is_contiguous(&self) -> bool {
        *self == Self::compute(self.comp_size, self.cont_size, self.info_size)
    }
}

/// Raw container: class id plus the three chunk payloads
///
/// An empty payload means the chunk is absent. Comp and Cont always appear
/// in the written chunk list, Info only when it has content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetContainer {
    pub class_id: String,
    pub comp_chunk: Vec<u8>,
    pub cont_chunk: Vec<u8>,
    pub info_xml: Vec<u8>,
    layout: ChunkLayout,
}

impl PresetContainer {
    pub fn new(class_id: impl Into<String>) -> Self {
        Self {
            class_id: class_id.into(),
            ..Default::default()
        }
    }

    pub fn layout(&self) -> &ChunkLayout {
        &self.layout
    }

    /// Parse a `.vstpreset` byte buffer.
    ///
    /// # Errors
    /// - `CorruptContainer` when the header or list magic is wrong
    /// - `UnsupportedVersion` when the version is not 1
    /// - `Truncated` when the list or a chunk points outside the buffer
    pub fn read(bytes: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(bytes, Endian::Little);

        let magic = reader.read_tag()?;
        if magic != HEADER_MAGIC {
            return Err(FormatError::corrupt("preset header", magic));
        }
        let version = reader.read_i32()?;
        if version != VERSION {
            return Err(FormatError::UnsupportedVersion(version));
        }
        let class_id = reader.read_nul_padded(CLASS_ID_SIZE)?;
        let list_pos = read_offset(&mut reader)?;
        log::debug!("class id {class_id}, chunk list at {list_pos}");

        reader.seek(list_pos)?;
        let list_magic = reader.read_tag()?;
        if list_magic != CHUNK_LIST {
            return Err(FormatError::corrupt("chunk list", list_magic));
        }
        let count = reader.read_i32()?;
        if count < 0 {
            return Err(FormatError::Invalid(format!("negative chunk count {count}")));
        }

        let mut container = PresetContainer::new(class_id);
        let mut comp: Option<(u64, u64)> = None;
        let mut cont: Option<(u64, u64)> = None;
        let mut info: Option<(u64, u64)> = None;

        for i in 0..count {
            let id = reader.read_tag()?;
            let offset = read_offset(&mut reader)?;
            let size = read_offset(&mut reader)?;
            log::debug!(
                "chunk {i}: {} at {offset} ({size} bytes)",
                String::from_utf8_lossy(&id)
            );

            let end = offset.checked_add(size).unwrap_or(u64::MAX);
            if end > reader.len() {
                return Err(FormatError::Truncated {
                    offset,
                    wanted: size,
                });
            }
            let payload = bytes[offset as usize..end as usize].to_vec();
            match id {
                CHUNK_COMP => {
                    container.comp_chunk = payload;
                    comp = Some((offset, size));
                }
                CHUNK_CONT => {
                    container.cont_chunk = payload;
                    cont = Some((offset, size));
                }
                CHUNK_INFO => {
                    container.info_xml = payload;
                    info = Some((offset, size));
                }
                _ => log::debug!("ignoring chunk {}", String::from_utf8_lossy(&id)),
            }
        }

        let (comp_start, comp_size) = comp.unwrap_or((HEADER_SIZE, 0));
        let (cont_start, cont_size) = cont.unwrap_or((comp_start + comp_size, 0));
        let (info_start, info_size) = info.unwrap_or((cont_start + cont_size, 0));
        container.layout = ChunkLayout {
            comp_start,
            comp_size,
            cont_start,
            cont_size,
            info_start,
            info_size,
            list_pos,
        };
        if !container.layout.is_contiguous() {
            log::warn!(
                "chunks of {} are not stored back to back",
                container.class_id
            );
        }

        Ok(container)
    }

    /// Recompute every offset from the current payload sizes.
    pub fn prepare_for_writing(&mut self) {
        self.layout = ChunkLayout::compute(
            self.comp_chunk.len() as u64,
            self.cont_chunk.len() as u64,
            self.info_xml.len() as u64,
        );
    }

    /// Serialize the container.
    ///
    /// # Errors
    /// `StaleLayout` if payloads changed since the last
    /// [`prepare_for_writing`](Self::prepare_for_writing).
    pub fn write(&self) -> Result<Vec<u8>> {
        let expected = ChunkLayout::compute(
            self.comp_chunk.len() as u64,
            self.cont_chunk.len() as u64,
            self.info_xml.len() as u64,
        );
        if self.layout != expected {
            return Err(FormatError::StaleLayout);
        }
        let layout = &self.layout;

        let mut w = ByteWriter::new(Endian::Little);
        w.write_bytes(&HEADER_MAGIC);
        w.write_i32(VERSION);
        w.write_padded(&self.class_id, CLASS_ID_SIZE);
        w.write_i64(layout.list_pos as i64);

        w.write_bytes(&self.comp_chunk);
        w.write_bytes(&self.cont_chunk);
        w.write_bytes(&self.info_xml);

        let has_info = layout.info_size > 0;
        w.write_bytes(&CHUNK_LIST);
        w.write_i32(if has_info { 3 } else { 2 });
        w.write_bytes(&CHUNK_COMP)
            .write_i64(layout.comp_start as i64)
            .write_i64(layout.comp_size as i64);
        w.write_bytes(&CHUNK_CONT)
            .write_i64(layout.cont_start as i64)
            .write_i64(layout.cont_size as i64);
        if has_info {
            w.write_bytes(&CHUNK_INFO)
                .write_i64(layout.info_start as i64)
                .write_i64(layout.info_size as i64);
        }

        Ok(w.into_inner())
    }

    /// Prepare and write in one go.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        self.prepare_for_writing();
        self.write()
    }
}

fn read_offset(reader: &mut ByteReader<'_>) -> Result<u64> {
    let at = reader.position();
    let value = reader.read_i64()?;
    u64::try_from(value).map_err(|_| FormatError::Truncated {
        offset: at,
        wanted: 8,
    })
}

/// Peek at the class id without parsing the chunk list.
///
/// Returns `None` when the header or version does not match.
pub fn extract_class_id(bytes: &[u8]) -> Option<String> {
    let mut reader = ByteReader::new(bytes, Endian::Little);
    if reader.read_tag().ok()? != HEADER_MAGIC || reader.read_i32().ok()? != VERSION {
        return None;
    }
    reader.read_nul_padded(CLASS_ID_SIZE).ok()
}
