/// Translate a frontend filter operator into its SQL counterpart.
///
/// Text-matching verbs honor `case_insensitive` (ILIKE vs LIKE); the
/// comparison operators pass through unchanged regardless of the flag.
/// Unknown tokens fall back to a fuzzy text match (`ILIKE`) in
/// case-insensitive mode and plain equality otherwise.
pub fn convert_operator(operator: &str, case_insensitive: bool) -> &'static str {
    match operator {
        "contains" => {
            if case_insensitive {
                "ILIKE"
            } else {
                "LIKE"
            }
        }
        "does not contain" => {
            if case_insensitive {
                "NOT ILIKE"
            } else {
                "NOT LIKE"
            }
        }
        "is empty" => "IS NULL",
        "is not empty" => "IS NOT NULL",
        // TODO: equality on text columns may want ILIKE too, but that needs
        // per-column type information the caller does not pass yet.
        "=" => "=",
        "!=" => "!=",
        "<" => "<",
        ">" => ">",
        "<=" => "<=",
        ">=" => ">=",
        _ => {
            if case_insensitive {
                "ILIKE"
            } else {
                "="
            }
        }
    }
}
