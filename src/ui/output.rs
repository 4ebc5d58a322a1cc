//! Output functions for consistent CLI formatting

use console::style;

/// Display a section header
pub fn section(title: &str) {
    println!("{}", style(title).cyan().bold());
}

/// Display a success step
pub fn step_ok(message: &str) {
    println!("  {} {}", style("[OK]").green(), message);
}

/// Display a success step with detail
pub fn step_ok_detail(message: &str, detail: &str) {
    println!("  {} {} ({})", style("[OK]").green(), message, style(detail).dim());
}

/// Display a warning step with hint
pub fn step_warn_hint(message: &str, hint: &str) {
    println!("  {} {} - {}", style("[WARN]").yellow(), message, style(hint).dim());
}

/// Display an error step with detail
pub fn step_error_detail(message: &str, detail: &str) {
    println!("  {} {}: {}", style("[FAIL]").red(), message, style(detail).red());
}

/// Display a remark/hint
pub fn remark(message: &str) {
    println!("  {}", style(message).dim());
}

/// Print styled key-value pair
pub fn key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_does_not_panic() {
        section("Test");
        step_ok("Step completed");
        step_ok_detail("Saved", "/tmp/config.toml");
        step_warn_hint("Warning", "hint");
        step_error_detail("Error", "detail");
        remark("remark");
        key_value("salt", "s");
    }
}
