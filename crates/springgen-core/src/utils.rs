//! Identifier helpers for generated Java source

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while", "_",
];

/// Split a name into lowercase words on case changes and separators
fn words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_is_lowercase = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            // a new word starts at a lower to upper case change
            if prev_is_lowercase && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            current.push(ch);
            prev_is_lowercase = ch.is_lowercase() || ch.is_ascii_digit();
        } else {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_is_lowercase = false;
        }
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Convert a string to lowerCamelCase
pub fn to_lower_camel_case(s: &str) -> String {
    words(s)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                return word.clone();
            }
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// Convert a parameter name to a valid Java identifier
pub fn to_java_identifier(name: &str) -> String {
    let mut identifier = to_lower_camel_case(name);
    if identifier.is_empty() {
        identifier.push('_');
    }

    let starts_with_digit = identifier
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit());
    if starts_with_digit || JAVA_KEYWORDS.contains(&identifier.as_str()) {
        return format!("_{}", identifier);
    }
    identifier
}

/// Escape a value for use inside a Java string literal
pub fn escape_java_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}
