//! JavaScript literal helpers.

/// Quote and escape a string the way `JSON.stringify` does.
///
/// JSON strings are valid JavaScript string literals, so the result can be
/// embedded verbatim in generated source.
pub fn string_literal(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string() {
        assert_eq!(string_literal("Button"), "\"Button\"");
    }

    #[test]
    fn test_escapes_quotes_and_backslashes() {
        assert_eq!(
            string_literal(r#"C:\src\"quoted".js"#),
            r#""C:\\src\\\"quoted\".js""#
        );
    }

    #[test]
    fn test_escapes_control_characters() {
        assert_eq!(string_literal("a\nb\tc"), "\"a\\nb\\tc\"");
    }

    #[test]
    fn test_keeps_unicode() {
        assert_eq!(string_literal("Bouton/Étiquette"), "\"Bouton/Étiquette\"");
    }
}
