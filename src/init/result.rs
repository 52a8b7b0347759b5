use core::fmt::{self, Write};

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum InitResult {
    Passed,
    Failed,
}

impl InitResult {
    pub fn format(&self) -> &'static str {
        match self {
            InitResult::Passed => "  OK  ",
            InitResult::Failed => " FAIL ",
        }
    }
}

const MAX_MSG_LEN: usize = 40;

/// Writes `message ........ [ RESULT ]` followed by a newline.
pub fn write_line<W: Write>(out: &mut W, message: &str, result: InitResult) -> fmt::Result {
    out.write_str(message)?;

    for _ in message.len()..MAX_MSG_LEN {
        out.write_char('.')?;
    }

    writeln!(out, " [{}]", result.format())
}

/// Records the outcome of a boot step into the debug log.
pub fn record(message: &str, result: InitResult) {
    if !crate::init::config::debug_enabled() {
        return;
    }

    let mut log = crate::debug::DEBUG_LOG.lock();
    let _ = write_line(&mut *log, message, result);
}
