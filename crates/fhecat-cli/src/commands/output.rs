//! Shared stdout/stderr helpers.

use fhecat_core::Colors;
use fhecat_registry::Registry;
use serde::Serialize;

/// Print `value` as JSON on stdout, pretty unless `compact`.
pub fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) {
    let output = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => fail(&format!("JSON serialization failed: {}", e), false),
    }
}

/// Rendered validation warnings, or `None` for a table without any.
pub fn render_warnings(registry: &Registry, color: bool) -> Option<String> {
    let warnings = registry.warnings();
    (!warnings.is_empty()).then(|| warnings.render_colored(color))
}

/// Print the registry's validation warnings on stderr, if any.
pub fn print_warnings(registry: &Registry, color: bool) {
    if let Some(rendered) = render_warnings(registry, color) {
        eprint!("{rendered}");
        eprintln!();
    }
}

pub fn warn(msg: &str, color: bool) {
    let c = Colors::new(color);
    eprintln!("{}warning{}: {}", c.yellow, c.reset, msg);
}

/// Print an error on stderr and exit with status 1.
pub fn fail(msg: &str, color: bool) -> ! {
    let c = Colors::new(color);
    eprintln!("{}error{}: {}", c.red, c.reset, msg);
    std::process::exit(1);
}
