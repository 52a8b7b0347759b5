use x86_64::instructions::{hlt, interrupts};

use super::result::InitResult;

/// Nothing at this stage installs handlers, so interrupts must arrive masked.
pub fn check_interrupts() -> InitResult {
    if interrupts::are_enabled() {
        return InitResult::Failed;
    }

    InitResult::Passed
}

/// Parks the CPU for good.
#[cfg_attr(test, allow(dead_code))]
pub fn halt() -> ! {
    loop {
        hlt();
    }
}
