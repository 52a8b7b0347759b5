use crate::vga::buffer::{Color, ColorCode};

/// Physical address of the VGA text buffer.
pub const VGA_PHYS_ADDR: u64 = 0xb8000;

/// Attribute used for every cell we write: white on black.
pub const ATTRIBUTE: ColorCode = ColorCode::new(Color::White, Color::Black);

/// Boot message and the linear cell index it starts at.
pub const MESSAGE: &[u8] = b"SHAKE IT OFF";
pub const MESSAGE_OFFSET: usize = 1;

/// Capacity of the in-memory debug log in bytes.
pub const DEBUG_LOG_SIZE: usize = 4096;

pub fn debug_enabled() -> bool {
    cfg!(feature = "debug-log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vga::buffer::CELLS;

    #[test]
    fn message_fits_on_screen() {
        assert!(MESSAGE_OFFSET + MESSAGE.len() <= CELLS);
        assert_eq!(MESSAGE.len(), 12);
    }

    #[test]
    fn text_buffer_ends_at_0xb8fa0() {
        assert_eq!(VGA_PHYS_ADDR + (CELLS as u64) * 2, 0xb8fa0);
    }
}
