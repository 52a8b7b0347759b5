use x86_64::{PhysAddr, VirtAddr};

use crate::init::config;
use crate::vga::buffer::{self, Cell, TextBuffer};

/// Cell written everywhere by [`clear`]: glyph 0x00, white on black.
pub const BLANK: Cell = Cell::new(0x00, config::ATTRIBUTE);

/// Resolves the text buffer at its physical address.
///
/// This is the only place where raw video memory becomes a `TextBuffer`.
/// Every other routine in the crate works on the returned reference.
///
/// # Safety
///
/// The caller must guarantee that `config::VGA_PHYS_ADDR` is identity mapped,
/// writable, laid out as 80x25 text mode, and that no other reference to it is
/// alive while the returned one is used.
pub unsafe fn hardware() -> &'static mut TextBuffer {
    let phys = PhysAddr::new(config::VGA_PHYS_ADDR);
    let virt = VirtAddr::new(phys.as_u64());

    // SAFETY: upheld by the caller, see above.
    unsafe { &mut *virt.as_mut_ptr::<TextBuffer>() }
}

/// Resets every cell of the screen to [`BLANK`], from index 0 upwards.
pub fn clear(screen: &mut TextBuffer) {
    for slot in screen.cells_mut().iter_mut() {
        buffer::store(slot, BLANK);
    }
}
