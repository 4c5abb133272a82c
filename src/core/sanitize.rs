// src/core/sanitize.rs

/// Collapse runs of whitespace (including non-breaking spaces) into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_and_trims() {
        assert_eq!(normalize_ws("  Intro \n\t to   Python "), "Intro to Python");
        assert_eq!(normalize_ws("a\u{a0}\u{a0}b"), "a b");
        assert_eq!(normalize_ws("   "), "");
    }
}
