//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use fhecat_core::Colors;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d> {
    diagnostics: &'d Diagnostics,
    colored: bool,
}

impl<'d> DiagnosticsPrinter<'d> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            colored: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.format(&mut out);
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let c = Colors::new(self.colored);
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            format_one(w, diag, c)?;
        }
        Ok(())
    }
}

fn format_one(w: &mut impl Write, diag: &DiagnosticMessage, c: Colors) -> std::fmt::Result {
    let level = match diag.severity() {
        Severity::Error => c.red,
        Severity::Warning => c.yellow,
    };
    writeln!(
        w,
        "{level}{}[{}]{}: {}",
        diag.severity(),
        diag.kind().code(),
        c.reset,
        diag.message()
    )?;
    writeln!(
        w,
        "  {}-->{} {}{}{}",
        c.dim,
        c.reset,
        c.blue,
        diag.location(),
        c.reset
    )?;
    for related in diag.related() {
        writeln!(
            w,
            "  {}= note:{} {} at {}{}{}",
            c.dim,
            c.reset,
            related.message(),
            c.blue,
            related.location(),
            c.reset
        )?;
    }
    for hint in diag.hints() {
        writeln!(w, "  {}= hint:{} {hint}", c.dim, c.reset)?;
    }
    Ok(())
}
