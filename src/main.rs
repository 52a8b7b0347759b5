// Enable static analysis features for clippy
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![deny(clippy::panic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(clippy::expect_used)]

#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]

#[macro_use]
mod debug;

mod init;
mod vga;

/// Kernel entrypoint, jumped to by the boot stub once the CPU is in long mode
/// and the text buffer is mapped.
#[unsafe(no_mangle)]
pub extern "C" fn kmain() {
    debugln!("Kernel loaded");

    init::result::record("Check interrupts masked", init::cpu::check_interrupts());

    // SAFETY: the boot stub identity maps the first megabyte and nothing else
    // runs yet, so this is the only reference to the text buffer.
    let screen = unsafe { vga::screen::hardware() };

    let stage = init::run(screen);
    debugln!("Reached {:?}", stage);

    init::report(screen);
}

//
//
//

#[cfg(not(test))]
use core::panic::PanicInfo;

/// Panic handler for panic function invocations
#[cfg(not(test))]
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    use core::fmt::Write;

    if let Some(mut log) = debug::DEBUG_LOG.try_lock() {
        match info.location() {
            Some(location) => {
                let _ = writeln!(log, "panic at {}:{}", location.file(), location.line());
            }
            None => {
                let _ = writeln!(log, "panic at unknown location");
            }
        }
    }

    init::cpu::halt()
}
