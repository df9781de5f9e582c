use super::SafeArithmetic;
use crate::arith::{self, ArithmeticResult};

/// Calls the Rust functions directly; nothing crosses the C ABI.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceBinding;

impl SafeArithmetic for SourceBinding {
    fn magic_number(&self) -> i32 {
        arith::magic_number()
    }

    fn add_safe(&self, a: i32, b: i32) -> ArithmeticResult {
        arith::add_safe(a, b)
    }

    fn sub_safe(&self, a: i32, b: i32) -> ArithmeticResult {
        arith::sub_safe(a, b)
    }
}
