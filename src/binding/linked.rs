use super::SafeArithmetic;
use crate::arith::ArithmeticResult;
use crate::ffi::SafeResult;
use std::os::raw::c_int;

mod sys {
    use super::{SafeResult, c_int};

    // Resolved at link time against the unmangled exports in `crate::ffi`.
    unsafe extern "C" {
        pub fn magic_number() -> c_int;
        pub fn add_safe(x: c_int, y: c_int) -> SafeResult;
        pub fn sub_safe(x: c_int, y: c_int) -> SafeResult;
    }
}

/// Calls the exported C symbols through a link-time `extern "C"` block.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedBinding;

impl SafeArithmetic for LinkedBinding {
    fn magic_number(&self) -> i32 {
        // SAFETY: the symbol is defined in this crate with a matching signature.
        unsafe { sys::magic_number() }
    }

    fn add_safe(&self, a: i32, b: i32) -> ArithmeticResult {
        // SAFETY: as above; the callee takes no pointers.
        unsafe { sys::add_safe(a, b) }.into()
    }

    fn sub_safe(&self, a: i32, b: i32) -> ArithmeticResult {
        // SAFETY: as above; the callee takes no pointers.
        unsafe { sys::sub_safe(a, b) }.into()
    }
}
