use crate::arith::ArithmeticResult;
use crate::binding::{SafeArithmetic, Variant};
use crate::config::OutputFormat;
use crate::error::Result;
use serde::Serialize;

/// What a variant's executable prints: the magic number and the result of
/// adding it to and subtracting it from itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub variant: Variant,
    pub magic_number: i32,
    pub sum: ArithmeticResult,
    pub difference: ArithmeticResult,
}

impl Report {
    pub fn collect(variant: Variant, lib: &dyn SafeArithmetic) -> Self {
        let magic_number = lib.magic_number();
        Self {
            variant,
            magic_number,
            sum: lib.add_safe(magic_number, magic_number),
            difference: lib.sub_safe(magic_number, magic_number),
        }
    }

    /// Every line after the banner. Identical across variants bound to the
    /// same library.
    pub fn result_lines(&self) -> String {
        let mut out = format!("Obtained magic number: {}\n", self.magic_number);
        for res in [self.sum, self.difference] {
            out.push_str(&format!(
                "Answer is {}, with invalid flag {}\n",
                res.answer,
                u8::from(res.invalid)
            ));
        }
        out
    }

    pub fn render_text(&self) -> String {
        format!("{}\n{}", self.variant.banner(), self.result_lines())
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)? + "\n"),
        }
    }
}
