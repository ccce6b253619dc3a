//! Entity display-name sanitization.
//!
//! The catalog only accepts letters, digits, space, underscore, hyphen,
//! period, plus, apostrophe, and parentheses in entity names.

/// Replace every character outside the catalog's allowed alphabet with `_`.
pub fn sanitize_entity_name(name: &str) -> String {
    name.chars()
        .map(|c| if is_allowed(c) { c } else { '_' })
        .collect()
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-' | '.' | '+' | '\'' | '(' | ')')
}
