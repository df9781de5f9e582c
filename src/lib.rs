pub mod arith;
pub mod binding;
pub mod cli;
pub mod config;
pub mod error;
pub mod ffi;
pub mod report;

pub use arith::{ArithmeticResult, MAGIC_NUMBER, add_safe, magic_number, sub_safe};
pub use binding::{SafeArithmetic, Variant};
