use serde_json::Value;

/// Convert a camelCase or PascalCase identifier to snake_case.
///
/// Consecutive uppercase letters are treated as one word, with the last
/// letter of an acronym starting the next word when a lowercase letter
/// follows: `XMLHttpRequest` becomes `xml_http_request`.
///
/// Empty input is returned unchanged. The rule is tuned for ASCII
/// identifiers; digits and non-ASCII letters simply flow through the scan.
pub fn to_snake_case(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 4);

    for c in chars[0].to_lowercase() {
        result.push(c);
    }

    for i in 1..chars.len() {
        let curr = chars[i];
        let prev = chars[i - 1];
        let next = chars.get(i + 1);

        // Break before an uppercase letter that either follows a lowercase
        // alphanumeric or starts a new word at the end of an acronym run.
        let boundary = curr.is_uppercase()
            && ((prev.is_alphanumeric() && !prev.is_uppercase())
                || next.is_some_and(|c| c.is_lowercase()));

        if boundary && !result.ends_with('_') {
            result.push('_');
        }

        for c in curr.to_lowercase() {
            result.push(c);
        }
    }

    result
}

/// Recursively convert every key of a JSON object to snake_case.
///
/// Non-object input is returned as-is; arrays are not recursed into.
/// Object values are processed by the same rule, so nested objects get
/// their keys converted at every depth.
pub fn convert_keys_to_snake_case(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, val)| (to_snake_case(&key), convert_keys_to_snake_case(val)))
                .collect(),
        ),
        other => other,
    }
}
