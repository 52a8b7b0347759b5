pub mod config;
pub mod cpu;
pub mod result;

use crate::vga::{buffer::TextBuffer, screen, write};
use result::{record, InitResult};

/// Progress of the boot passes over the text buffer.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Stage {
    Start,
    Cleared,
    MessageWritten,
}

impl Stage {
    /// Performs the pass that leads out of this stage and returns the next one.
    /// `MessageWritten` is terminal and leaves the screen alone.
    pub fn advance(self, screen: &mut TextBuffer) -> Stage {
        match self {
            Stage::Start => {
                screen::clear(screen);
                Stage::Cleared
            }
            Stage::Cleared => {
                write::message(screen);
                Stage::MessageWritten
            }
            Stage::MessageWritten => Stage::MessageWritten,
        }
    }
}

/// Clears the screen and then writes the boot message.
pub fn run(screen: &mut TextBuffer) -> Stage {
    let mut stage = Stage::Start;

    while stage != Stage::MessageWritten {
        let next = stage.advance(screen);
        debugln!("init: {:?} -> {:?}", stage, next);
        stage = next;
    }

    stage
}

/// Read-only checks of the finished screen. Results only go to the debug log.
pub fn report(screen: &TextBuffer) {
    match write::verify(screen) {
        Ok(()) => record("Verify text buffer", InitResult::Passed),
        Err(err) => {
            debugln!("init: {}", err);
            record("Verify text buffer", InitResult::Failed);
        }
    }
}
