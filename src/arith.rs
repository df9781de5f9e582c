//! Overflow-checked 32-bit signed arithmetic.
//!
//! Results are computed in `i64`, where no `i32` sum or difference can
//! overflow, and then range-checked back into `i32`. Out-of-range results are
//! clamped to the nearest bound and flagged `invalid`.

use serde::{Deserialize, Serialize};

/// Value returned by [`magic_number`].
pub const MAGIC_NUMBER: i32 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArithmeticResult {
    pub answer: i32,
    pub invalid: bool,
}

impl ArithmeticResult {
    pub fn valid(answer: i32) -> Self {
        Self {
            answer,
            invalid: false,
        }
    }

    /// Narrow a widened result, clamping and flagging it when it does not fit.
    fn from_wide(wide: i64) -> Self {
        match i32::try_from(wide) {
            Ok(answer) => Self::valid(answer),
            Err(_) => Self {
                answer: wide.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
                invalid: true,
            },
        }
    }

    /// The answer, or `None` when the operation overflowed.
    pub fn checked(self) -> Option<i32> {
        (!self.invalid).then_some(self.answer)
    }
}

pub fn magic_number() -> i32 {
    MAGIC_NUMBER
}

pub fn add_safe(a: i32, b: i32) -> ArithmeticResult {
    ArithmeticResult::from_wide(i64::from(a) + i64::from(b))
}

pub fn sub_safe(a: i32, b: i32) -> ArithmeticResult {
    ArithmeticResult::from_wide(i64::from(a) - i64::from(b))
}
