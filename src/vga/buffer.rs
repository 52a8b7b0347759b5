use core::fmt;

/// VGA text mode buffer dimensions.
pub const WIDTH: usize = 80;
pub const HEIGHT: usize = 25;

/// Number of cells in the text buffer.
pub const CELLS: usize = WIDTH * HEIGHT;

/// VGA text mode colors (16 colors).
#[allow(dead_code)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    DarkBlue = 1,
    DarkGreen = 2,
    DarkCyan = 3,
    DarkRed = 4,
    DarkMagenta = 5,
    DarkYellow = 6,
    LightGrey = 7,
    //
    Grey = 8,
    Blue = 9,
    Green = 10,
    Cyan = 11,
    Red = 12,
    Magenta = 13,
    Yellow = 14,
    White = 15,
}

/// Attribute byte combining the foreground and background color nibbles.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self((bg as u8) << 4 | (fg as u8))
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

/// A single character on the screen: low byte is the glyph, high byte the attribute.
#[derive(Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct Cell(u16);

impl Cell {
    pub const fn new(ascii: u8, color: ColorCode) -> Self {
        Self((color.as_u8() as u16) << 8 | ascii as u16)
    }

    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({:#06x})", self.0)
    }
}

/// The whole 80x25 text screen laid out exactly like video memory.
///
/// On real hardware this is a view over `0xb8000` (see [`super::screen::hardware`]);
/// anywhere else it is an ordinary value, which is how the tests drive it.
#[repr(transparent)]
pub struct TextBuffer {
    cells: [Cell; CELLS],
}

impl TextBuffer {
    /// Creates an in-memory buffer with every cell zeroed.
    #[cfg(test)]
    pub const fn zeroed() -> Self {
        Self {
            cells: [Cell(0); CELLS],
        }
    }

    pub(super) fn cells_mut(&mut self) -> &mut [Cell; CELLS] {
        &mut self.cells
    }

    /// All cells, indexed linearly as `row * WIDTH + col`.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }
}

/// Volatile store into a single slot. The display controller reads this memory,
/// the CPU never does, so plain stores may be dropped by the optimiser.
pub(super) fn store(slot: &mut Cell, cell: Cell) {
    // SAFETY: `slot` is a live, aligned, exclusive reference.
    unsafe {
        core::ptr::write_volatile(slot as *mut Cell, cell);
    }
}

/// Errors reported when inspecting the text buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VgaError {
    /// A cell did not hold the value it should after the boot passes.
    Mismatch {
        index: usize,
        expected: Cell,
        found: Cell,
    },
}

impl fmt::Display for VgaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VgaError::Mismatch { index, expected, found } => write!(
                f,
                "cell {} holds {:#06x}, expected {:#06x}",
                index,
                found.as_u16(),
                expected.as_u16()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_code_packs_background_high() {
        assert_eq!(ColorCode::new(Color::White, Color::Black).as_u8(), 0x0f);
        assert_eq!(ColorCode::new(Color::Yellow, Color::DarkBlue).as_u8(), 0x1e);
    }

    #[test]
    fn cell_puts_attribute_in_the_high_byte() {
        let white = Cell::new(b'S', ColorCode::new(Color::White, Color::Black));
        let red_on_blue = Cell::new(b'S', ColorCode::new(Color::Red, Color::DarkBlue));

        assert_eq!(white.as_u16(), 0x0f53);
        assert_eq!(red_on_blue.as_u16(), 0x1c53);
    }

    #[test]
    fn buffer_matches_video_memory_layout() {
        assert_eq!(core::mem::size_of::<Cell>(), 2);
        assert_eq!(core::mem::size_of::<TextBuffer>(), 4000);
        assert_eq!(TextBuffer::zeroed().cells().len(), 2000);
    }

    #[test]
    fn last_cell_is_bottom_right() {
        let buffer = TextBuffer::zeroed();
        let last = (HEIGHT - 1) * WIDTH + (WIDTH - 1);

        assert_eq!(last, CELLS - 1);
        assert_eq!(buffer.cells().get(last), Some(&Cell(0)));
        assert_eq!(buffer.cells().get(CELLS), None);
    }

    #[test]
    fn mismatch_is_readable() {
        let err = VgaError::Mismatch {
            index: 3,
            expected: Cell(0x0f41),
            found: Cell(0x0f00),
        };

        assert_eq!(
            std::format!("{}", err),
            "cell 3 holds 0x0f00, expected 0x0f41"
        );
    }
}
