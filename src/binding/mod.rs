//! The three ways a host binds to the arithmetic library.
//!
//! Each binding exposes the same [`SafeArithmetic`] interface; they differ only
//! in how the code gets into the process:
//!
//! - [`SourceBinding`] calls the Rust functions with no C ABI in between.
//!   `source_program` goes one step further and compiles `arith.rs` into
//!   itself, so it does not use the library's code at all.
//! - [`LinkedBinding`] goes through the exported C symbols, resolved by the
//!   linker against the library archive when the executable is built.
//! - [`SharedBinding`] opens the `cdylib` at runtime and resolves the same
//!   symbols with `libloading`.

mod linked;
mod shared;
mod source;

pub use linked::LinkedBinding;
pub use shared::{SharedBinding, locate_library};
pub use source::SourceBinding;

use crate::arith::ArithmeticResult;
use crate::config::LibraryConfig;
use crate::error::Result;
use serde::Serialize;
use std::fmt;
use tracing::info;

pub trait SafeArithmetic: Send + Sync {
    fn magic_number(&self) -> i32;
    fn add_safe(&self, a: i32, b: i32) -> ArithmeticResult;
    fn sub_safe(&self, a: i32, b: i32) -> ArithmeticResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Dynamic,
    Static,
    Source,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Dynamic, Variant::Static, Variant::Source];

    /// First line printed by the variant's executable.
    pub fn banner(self) -> &'static str {
        match self {
            Self::Dynamic => "Now running program (linked against shared library)",
            Self::Static => "Now running program (linked against static library)",
            Self::Source => "Now running program (compiled with library source)",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dynamic => write!(f, "dynamic"),
            Self::Static => write!(f, "static"),
            Self::Source => write!(f, "source"),
        }
    }
}

/// Bind the library the way `variant` prescribes. Only the dynamic variant
/// reads `library`, and only it can fail.
pub fn bind(variant: Variant, library: &LibraryConfig) -> Result<Box<dyn SafeArithmetic>> {
    let binding: Box<dyn SafeArithmetic> = match variant {
        Variant::Dynamic => {
            let path = locate_library(library)?;
            Box::new(SharedBinding::open(&path)?)
        }
        Variant::Static => Box::new(LinkedBinding),
        Variant::Source => Box::new(SourceBinding),
    };
    info!(%variant, "library bound");
    Ok(binding)
}
