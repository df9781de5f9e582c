//! C ABI surface of the library.
//!
//! These are the symbols a host links against when it consumes `safe_arith`
//! as a shared (`cdylib`) or static (`staticlib`) library. The layout matches
//! `c/safe_arith.h`:
//!
//! ```c
//! struct Result { int answer; int invalid; };
//! int magic_number(void);
//! struct Result add_safe(int x, int y);
//! struct Result sub_safe(int x, int y);
//! ```

use crate::arith::{self, ArithmeticResult};
use std::os::raw::c_int;

pub const MAGIC_NUMBER_SYMBOL: &[u8] = b"magic_number\0";
pub const ADD_SAFE_SYMBOL: &[u8] = b"add_safe\0";
pub const SUB_SAFE_SYMBOL: &[u8] = b"sub_safe\0";

/// `struct Result` as seen from C. `invalid` is 0 or 1.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeResult {
    pub answer: c_int,
    pub invalid: c_int,
}

impl From<ArithmeticResult> for SafeResult {
    fn from(res: ArithmeticResult) -> Self {
        Self {
            answer: res.answer,
            invalid: c_int::from(res.invalid),
        }
    }
}

impl From<SafeResult> for ArithmeticResult {
    fn from(res: SafeResult) -> Self {
        Self {
            answer: res.answer,
            invalid: res.invalid != 0,
        }
    }
}

pub type MagicNumberFn = unsafe extern "C" fn() -> c_int;
pub type BinaryOpFn = unsafe extern "C" fn(c_int, c_int) -> SafeResult;

#[unsafe(no_mangle)]
pub extern "C" fn magic_number() -> c_int {
    arith::magic_number()
}

#[unsafe(no_mangle)]
pub extern "C" fn add_safe(x: c_int, y: c_int) -> SafeResult {
    arith::add_safe(x, y).into()
}

#[unsafe(no_mangle)]
pub extern "C" fn sub_safe(x: c_int, y: c_int) -> SafeResult {
    arith::sub_safe(x, y).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_match_rust_functions() {
        assert_eq!(magic_number(), arith::magic_number());
        for (a, b) in [(2, 3), (i32::MAX, 1), (i32::MIN, -1), (0, i32::MIN), (-5, 9)] {
            assert_eq!(ArithmeticResult::from(add_safe(a, b)), arith::add_safe(a, b));
            assert_eq!(ArithmeticResult::from(sub_safe(a, b)), arith::sub_safe(a, b));
        }
    }

    #[test]
    fn invalid_flag_is_zero_or_one() {
        assert_eq!(add_safe(2, 3).invalid, 0);
        assert_eq!(add_safe(i32::MAX, i32::MAX).invalid, 1);
        assert_eq!(sub_safe(i32::MIN, 1).invalid, 1);
    }

    #[test]
    fn symbol_names_are_nul_terminated() {
        for sym in [MAGIC_NUMBER_SYMBOL, ADD_SAFE_SYMBOL, SUB_SAFE_SYMBOL] {
            assert_eq!(sym.last(), Some(&0));
        }
    }
}
