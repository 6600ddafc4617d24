//! Terminal output: status notes with optional ANSI styling.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Check if stderr should be colored.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM").map(|t| t != "dumb").unwrap_or(false))
}

fn note(color: &str, symbol: &str, plain: &str, msg: &str, styled: bool) -> String {
    if styled {
        format!("{color}{BOLD}{symbol}{RESET} {msg}")
    } else {
        format!("{plain}: {msg}")
    }
}

// Notes go to stderr so stdout stays machine-readable.

pub fn note_warn(msg: &str) {
    eprintln!("{}", note(YELLOW, "⚠", "WARN", msg, supports_color()));
}

pub fn note_error(msg: &str) {
    eprintln!("{}", note(RED, "✗", "ERROR", msg, supports_color()));
}

pub fn note_success(msg: &str) {
    eprintln!("{}", note(GREEN, "✓", "OK", msg, supports_color()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_note_has_prefix() {
        assert_eq!(note(RED, "✗", "ERROR", "boom", false), "ERROR: boom");
    }

    #[test]
    fn styled_note_wraps_symbol() {
        let styled = note(GREEN, "✓", "OK", "done", true);
        assert!(styled.starts_with(GREEN));
        assert!(styled.ends_with(" done"));
    }
}
