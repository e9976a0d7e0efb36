use crate::{FILL_BYTE, ROM_LEN, RomImage, RomImageError};

/// Bytes written over the fill value, applied in order.
///
/// ```text
/// $8000  A9 42     LDA #$42
/// $8002  8D 00 60  STA $6000
/// $FFFC  00 80     RESET -> $8000
/// ```
pub const BOOT_PROGRAM: [(usize, u8); 7] = [
    (0x0000, 0xA9),
    (0x0001, 0x42),
    (0x0002, 0x8D),
    (0x0003, 0x00),
    (0x0004, 0x60),
    (0x7FFC, 0x00),
    (0x7FFD, 0x80),
];

/// Build the 32KB boot ROM: a NOP-filled image with [`BOOT_PROGRAM`] written over it.
///
/// # Errors
///
/// Returns an error if an entry in the program table does not fit in the image, which would
/// indicate a bad table rather than a runtime condition.
pub fn build_boot_rom() -> Result<RomImage, RomImageError> {
    let mut image = RomImage::new(ROM_LEN, FILL_BYTE)?;

    for (offset, value) in BOOT_PROGRAM {
        image.set_byte(offset, value)?;
        log::debug!("ROM[${offset:04X}] set to ${value:02X}");
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn boot_rom_length() {
        let image = build_boot_rom().unwrap();
        assert_eq!(image.len(), 32768);
    }

    #[test]
    fn boot_rom_literals() {
        let image = build_boot_rom().unwrap();
        let bytes = image.as_bytes();

        assert_eq!(&bytes[..5], &[0xA9, 0x42, 0x8D, 0x00, 0x60]);
        assert_eq!(bytes[0x7FFC], 0x00);
        assert_eq!(bytes[0x7FFD], 0x80);
    }

    #[test]
    fn boot_rom_fill() {
        let image = build_boot_rom().unwrap();
        let written = [0, 1, 2, 3, 4, 0x7FFC, 0x7FFD];

        for (i, &b) in image.as_bytes().iter().enumerate() {
            if !written.contains(&i) {
                assert_eq!(b, 0xEA, "byte {i:04X}");
            }
        }

        // Bytes adjacent to the written ranges keep the fill value
        assert_eq!(image.byte(5), Some(0xEA));
        assert_eq!(image.byte(0x7FFB), Some(0xEA));
        assert_eq!(image.byte(0x7FFE), Some(0xEA));
        assert_eq!(image.byte(0x7FFF), Some(0xEA));
    }

    #[test]
    fn boot_rom_resets_to_start_of_rom() {
        let image = build_boot_rom().unwrap();
        assert_eq!(image.reset_vector(), Some(crate::ROM_BASE_ADDRESS));
    }

    #[test]
    fn boot_rom_deterministic() {
        assert_eq!(build_boot_rom().unwrap(), build_boot_rom().unwrap());
    }
}
