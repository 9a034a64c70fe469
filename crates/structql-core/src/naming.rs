/// Whole-string inputs that the generic rules of [`to_lower_camel_case`]
/// would not render in the desired format.
const SPECIAL_CASES: &[(&str, &str)] = &[
    ("ID", "id"),
];

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '-' | '_' | '.')
}

/// Transform a structural (Rust) field or type name into the lower camel case
/// convention used for GraphQL field names.
///
/// The first character is lowercased. Every run of separators (whitespace,
/// `-`, `_` and `.`) is dropped and the character following it is
/// uppercased. Everything else passes through unchanged.
///
/// ```rust
/// use structql_core::to_lower_camel_case;
///
/// assert_eq!(to_lower_camel_case("TestQuery"), "testQuery");
/// assert_eq!(to_lower_camel_case("created_at"), "createdAt");
/// assert_eq!(to_lower_camel_case("ID"), "id");
/// ```
pub fn to_lower_camel_case(input: &str) -> String {
    if let Some((_, output)) = SPECIAL_CASES.iter().find(|(case, _)| *case == input) {
        return output.to_string();
    }

    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut output = String::with_capacity(input.len());
    output.extend(first.to_lowercase());

    let mut capitalize_next = false;
    for ch in chars {
        if is_separator(ch) {
            capitalize_next = true;
            continue
        }

        if capitalize_next {
            output.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            output.push(ch);
        }
    }

    output
}
