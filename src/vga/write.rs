use crate::init::config;
use crate::vga::buffer::{self, Cell, TextBuffer, VgaError};
use crate::vga::screen::BLANK;

/// Renders the fixed boot message at cells `MESSAGE_OFFSET..MESSAGE_OFFSET + MESSAGE.len()`.
/// Anything the screen held there is overwritten, so this has to run after [`screen::clear`].
///
/// [`screen::clear`]: crate::vga::screen::clear
pub fn message(screen: &mut TextBuffer) {
    let end = config::MESSAGE_OFFSET + config::MESSAGE.len();

    if let Some(slots) = screen.cells_mut().get_mut(config::MESSAGE_OFFSET..end) {
        for (slot, &byte) in slots.iter_mut().zip(config::MESSAGE) {
            buffer::store(slot, Cell::new(byte, config::ATTRIBUTE));
        }
    }
}

/// Value a cell should hold once the screen has been cleared and the message written.
pub fn expected(index: usize) -> Cell {
    index
        .checked_sub(config::MESSAGE_OFFSET)
        .and_then(|pos| config::MESSAGE.get(pos))
        .map_or(BLANK, |&byte| Cell::new(byte, config::ATTRIBUTE))
}

/// Reads the whole screen back and reports the first cell that differs from [`expected`].
pub fn verify(screen: &TextBuffer) -> Result<(), VgaError> {
    for (index, &found) in screen.cells().iter().enumerate() {
        let expected = expected(index);

        if found != expected {
            return Err(VgaError::Mismatch {
                index,
                expected,
                found,
            });
        }
    }

    Ok(())
}
