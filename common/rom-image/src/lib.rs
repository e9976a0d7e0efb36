//! Fixed-size 6502 ROM images: allocate a filled buffer, poke bytes at checked offsets, persist it.

pub mod boot;
pub mod file;

use std::path::Path;
use thiserror::Error;

pub use file::{RomFileError, read_image, write_image};

/// Size of the ROM chip in bytes (32KB).
pub const ROM_LEN: usize = 0x8000;

/// NOP on the 6502; every byte that is not explicitly written holds this value.
pub const FILL_BYTE: u8 = 0xEA;

/// CPU address where the first byte of the ROM is mapped.
pub const ROM_BASE_ADDRESS: u16 = 0x8000;

/// CPU address of the RESET vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomImageError {
    #[error("ROM image size must be non-zero")]
    ZeroLength,
    #[error("ROM offset ${offset:04X} is out of bounds for image of {len} bytes")]
    OutOfBounds { offset: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomImage {
    bytes: Box<[u8]>,
}

impl RomImage {
    /// Allocate an image of `size` bytes with every byte set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is 0.
    pub fn new(size: usize, fill: u8) -> Result<Self, RomImageError> {
        if size == 0 {
            return Err(RomImageError::ZeroLength);
        }

        Ok(Self { bytes: vec![fill; size].into_boxed_slice() })
    }

    /// Overwrite exactly one byte. The image is left unmodified if `offset` is out of bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if `offset` is not less than the image length.
    pub fn set_byte(&mut self, offset: usize, value: u8) -> Result<(), RomImageError> {
        let len = self.bytes.len();
        let Some(byte) = self.bytes.get_mut(offset) else {
            return Err(RomImageError::OutOfBounds { offset, len });
        };

        *byte = value;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn byte(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Read the RESET vector as the CPU would see it with this image mapped at `$8000`.
    ///
    /// Returns `None` if the image is too small to contain the vector.
    #[must_use]
    pub fn reset_vector(&self) -> Option<u16> {
        let offset = usize::from(RESET_VECTOR - ROM_BASE_ADDRESS);
        let lsb = self.byte(offset)?;
        let msb = self.byte(offset + 1)?;
        Some(u16::from_le_bytes([lsb, msb]))
    }

    /// Persist the image to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error encountered while writing; see [`write_image`].
    pub fn write_to(&self, path: &Path) -> Result<(), RomFileError> {
        write_image(path, &self.bytes)
    }
}

impl AsRef<[u8]> for RomImage {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
