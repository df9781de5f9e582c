//! Source-inclusion variant: the arithmetic is compiled from `arith.rs` into
//! this executable instead of being called from the library crate.

#[path = "../arith.rs"]
#[allow(dead_code)]
mod arith;

use safe_arith::{ArithmeticResult, SafeArithmetic, Variant};

struct IncludedSource;

impl From<arith::ArithmeticResult> for ArithmeticResult {
    fn from(res: arith::ArithmeticResult) -> Self {
        Self {
            answer: res.answer,
            invalid: res.invalid,
        }
    }
}

impl SafeArithmetic for IncludedSource {
    fn magic_number(&self) -> i32 {
        arith::magic_number()
    }

    fn add_safe(&self, a: i32, b: i32) -> ArithmeticResult {
        arith::add_safe(a, b).into()
    }

    fn sub_safe(&self, a: i32, b: i32) -> ArithmeticResult {
        arith::sub_safe(a, b).into()
    }
}

fn main() -> anyhow::Result<()> {
    safe_arith::cli::run_with(Variant::Source, |_, _| {
        Ok(Box::new(IncludedSource) as Box<dyn SafeArithmetic>)
    })
}
