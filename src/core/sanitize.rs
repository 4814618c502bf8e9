// src/core/sanitize.rs

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

/// "£51.77" → "51.77". Also drops the stray "Â" a mis-decoded page leaves behind.
pub fn strip_currency(s: &str) -> String {
    normalize_ws(&s.replace('£', "").replace('Â', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  In\n   stock  "), "In stock");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn currency_is_removed() {
        assert_eq!(strip_currency("£51.77"), "51.77");
        assert_eq!(strip_currency(" Â£13.99 "), "13.99");
    }
}
