use core::fmt::{self, Write};
use spin::Mutex;

use crate::init::config::DEBUG_LOG_SIZE;

/// In-memory log. Nothing here talks to hardware; a full log silently drops
/// further bytes.
pub struct DebugLog {
    buffer: [u8; DEBUG_LOG_SIZE],
    len: usize,
}

impl DebugLog {
    pub const fn new() -> Self {
        Self {
            buffer: [0; DEBUG_LOG_SIZE],
            len: 0,
        }
    }

    #[allow(dead_code)]
    pub fn data(&self) -> &[u8] {
        self.buffer.get(..self.len).unwrap_or(&[])
    }

    pub fn append(&mut self, data: &[u8]) {
        let to_copy = data.len().min(DEBUG_LOG_SIZE - self.len);

        if let Some(dst) = self.buffer.get_mut(self.len..self.len + to_copy) {
            if let Some(src) = data.get(..to_copy) {
                dst.copy_from_slice(src);
                self.len += to_copy;
            }
        }
    }
}

impl Write for DebugLog {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s.as_bytes());
        Ok(())
    }
}

use lazy_static::lazy_static;

lazy_static! {
    pub static ref DEBUG_LOG: Mutex<DebugLog> = Mutex::new(DebugLog::new());
}

/// Appends one formatted line to the debug log when logging is enabled.
#[macro_export]
macro_rules! debugln {
    ($($arg:tt)*) => ({
        if $crate::init::config::debug_enabled() {
            use core::fmt::Write;
            let mut dbg = $crate::debug::DEBUG_LOG.lock();
            let _ = writeln!(dbg, $($arg)*);
        }
    });
}
