// ============================================================================
// COOKIES - lookup by name over `document.cookie`
// ============================================================================

/// Value of cookie `name` in a `document.cookie` string.
///
/// Pairs are `;`-separated and only the first `=` splits name from value,
/// so tokens containing `=` (base64 padding) survive intact.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Assignment string for `document.cookie = ...`
pub fn cookie_assignment(name: &str, value: &str, max_age_seconds: u32) -> String {
    format!("{}={}; max-age={}; path=/; SameSite=Lax", name, value, max_age_seconds)
}

/// Assignment that makes the browser drop the cookie immediately
pub fn expired_cookie(name: &str) -> String {
    format!("{}=; max-age=0; path=/; SameSite=Lax", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_among_others() {
        let cookies = "theme=dark; token=abc.def.ghi; lang=en";
        assert_eq!(find_cookie(cookies, "token").as_deref(), Some("abc.def.ghi"));
        assert_eq!(find_cookie(cookies, "lang").as_deref(), Some("en"));
    }

    #[test]
    fn value_may_contain_equals() {
        let cookies = "token=eyJhbGciOi==.payload=; other=1";
        assert_eq!(find_cookie(cookies, "token").as_deref(), Some("eyJhbGciOi==.payload="));
    }

    #[test]
    fn missing_or_empty_cookie() {
        assert_eq!(find_cookie("", "token"), None);
        assert_eq!(find_cookie("tokenish=1", "token"), None);
        assert_eq!(find_cookie("token=", "token"), None);
    }

    #[test]
    fn assignments() {
        assert_eq!(
            cookie_assignment("token", "xyz", 86400),
            "token=xyz; max-age=86400; path=/; SameSite=Lax"
        );
        assert!(expired_cookie("token").starts_with("token=; max-age=0"));
    }
}
