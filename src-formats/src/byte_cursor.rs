//! Sequential reader and writer over byte buffers with a switchable byte order.
//!
//! Preset files mix byte orders: the VST3 container is little-endian while the
//! VstW / FXP envelope is big-endian. Codecs flip [`Endian`] per region
//! instead of picking one globally.

use crate::error::{FormatError, Result};
use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

/// Byte order used by a reader or writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

macro_rules! read_num {
    ($name:ident, $ty:ty, $method:ident, $size:expr) => {
        #[doc = concat!("Read a `", stringify!($ty), "` in the current byte order.")]
        pub fn $name(&mut self) -> Result<$ty> {
            let offset = self.cursor.position();
            let value = match self.endian {
                Endian::Little => self.cursor.$method::<LittleEndian>(),
                Endian::Big => self.cursor.$method::<BigEndian>(),
            };
            value.map_err(|_| FormatError::Truncated {
                offset,
                wanted: $size,
            })
        }
    };
}

/// Reader over a borrowed byte slice with absolute seeking
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    cursor: Cursor<&'a [u8]>,
    endian: Endian,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8], endian: Endian) -> Self {
        Self {
            cursor: Cursor::new(data),
            endian,
        }
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    pub fn len(&self) -> u64 {
        self.cursor.get_ref().len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.get_ref().is_empty()
    }

    /// Bytes left between the current position and the end of the buffer
    pub fn remaining(&self) -> u64 {
        self.len().saturating_sub(self.position())
    }

    /// Move to an absolute offset. Seeking to `len()` is allowed, past it is not.
    pub fn seek(&mut self, pos: u64) -> Result<()> {
        if pos > self.len() {
            return Err(FormatError::Truncated {
                offset: pos,
                wanted: 0,
            });
        }
        self.cursor.set_position(pos);
        Ok(())
    }

    pub fn skip(&mut self, count: u64) -> Result<()> {
        let target = self.position().saturating_add(count);
        if target > self.len() {
            return Err(FormatError::Truncated {
                offset: self.position(),
                wanted: count,
            });
        }
        self.cursor.set_position(target);
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let offset = self.cursor.position();
        self.cursor
            .read_u8()
            .map_err(|_| FormatError::Truncated { offset, wanted: 1 })
    }

    read_num!(read_u32, u32, read_u32, 4);
    read_num!(read_i32, i32, read_i32, 4);
    read_num!(read_i64, i64, read_i64, 8);
    read_num!(read_f32, f32, read_f32, 4);
    read_num!(read_f64, f64, read_f64, 8);

    /// Read a `u32` in the given byte order without changing the reader's default.
    pub fn read_u32_in(&mut self, endian: Endian) -> Result<u32> {
        let saved = self.endian;
        self.endian = endian;
        let value = self.read_u32();
        self.endian = saved;
        value
    }

    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let offset = self.cursor.position();
        if (count as u64) > self.remaining() {
            return Err(FormatError::Truncated {
                offset,
                wanted: count as u64,
            });
        }
        let mut buf = vec![0u8; count];
        self.cursor
            .read_exact(&mut buf)
            .map_err(|_| FormatError::Truncated {
                offset,
                wanted: count as u64,
            })?;
        Ok(buf)
    }

    pub fn read_tag(&mut self) -> Result<[u8; 4]> {
        let offset = self.cursor.position();
        let mut tag = [0u8; 4];
        self.cursor
            .read_exact(&mut tag)
            .map_err(|_| FormatError::Truncated { offset, wanted: 4 })?;
        Ok(tag)
    }

    /// Read a fixed-size ASCII field, keeping every byte (NUL padding included).
    pub fn read_ascii(&mut self, count: usize) -> Result<String> {
        let bytes = self.read_bytes(count)?;
        Ok(bytes.iter().map(|&b| b as char).collect())
    }

    /// Read a fixed-size field and return the text before the first NUL.
    pub fn read_nul_padded(&mut self, count: usize) -> Result<String> {
        let bytes = self.read_bytes(count)?;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Ok(bytes[..end].iter().map(|&b| b as char).collect())
    }
}

/// Growable writer; writes to memory never fail
#[derive(Debug, Clone)]
pub struct ByteWriter {
    buf: Vec<u8>,
    endian: Endian,
}

macro_rules! write_num {
    ($name:ident, $ty:ty, $method:ident, $size:expr) => {
        #[doc = concat!("Append a `", stringify!($ty), "` in the current byte order.")]
        pub fn $name(&mut self, value: $ty) -> &mut Self {
            let endian = self.endian;
            let slot = self.grow($size);
            match endian {
                Endian::Little => LittleEndian::$method(slot, value),
                Endian::Big => BigEndian::$method(slot, value),
            }
            self
        }
    };
}

impl ByteWriter {
    pub fn new(endian: Endian) -> Self {
        Self {
            buf: Vec::new(),
            endian,
        }
    }

    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn grow(&mut self, count: usize) -> &mut [u8] {
        let start = self.buf.len();
        self.buf.resize(start + count, 0);
        &mut self.buf[start..]
    }

    write_num!(write_u32, u32, write_u32, 4);
    write_num!(write_i32, i32, write_i32, 4);
    write_num!(write_i64, i64, write_i64, 8);
    write_num!(write_f32, f32, write_f32, 4);
    write_num!(write_f64, f64, write_f64, 8);

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Write `text` as single bytes; characters above 0x7F become `?`.
    pub fn write_ascii(&mut self, text: &str) -> &mut Self {
        for c in text.chars() {
            self.buf.push(if c.is_ascii() { c as u8 } else { b'?' });
        }
        self
    }

    /// Write `text` into a field of exactly `width` bytes, truncating or NUL-padding.
    pub fn write_padded(&mut self, text: &str, width: usize) -> &mut Self {
        let start = self.buf.len();
        self.write_ascii(text);
        self.buf.resize(start + width, 0);
        self
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
