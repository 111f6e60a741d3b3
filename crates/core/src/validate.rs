//! Input validation helpers.

/// Check an email address for the shape `local@domain.tld`.
///
/// Intentionally permissive: no whitespace anywhere, exactly one `@` with a
/// non-empty local part, and at least one dot strictly inside the domain.
/// Full RFC 5322 parsing is out of scope for a signup form.
pub fn is_valid_email(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // The qualifying dot must have at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
