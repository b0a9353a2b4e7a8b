use datakit::sql::convert_operator;

#[test]
fn text_matching_verbs_honor_case_insensitivity() {
    assert_eq!(convert_operator("contains", true), "ILIKE");
    assert_eq!(convert_operator("contains", false), "LIKE");
    assert_eq!(convert_operator("does not contain", true), "NOT ILIKE");
    assert_eq!(convert_operator("does not contain", false), "NOT LIKE");
}

#[test]
fn emptiness_verbs_map_to_null_checks() {
    assert_eq!(convert_operator("is empty", true), "IS NULL");
    assert_eq!(convert_operator("is empty", false), "IS NULL");
    assert_eq!(convert_operator("is not empty", true), "IS NOT NULL");
    assert_eq!(convert_operator("is not empty", false), "IS NOT NULL");
}

#[test]
fn comparison_operators_pass_through_unchanged() {
    for op in ["=", "!=", "<", ">", "<=", ">="] {
        assert_eq!(convert_operator(op, true), op);
        assert_eq!(convert_operator(op, false), op);
    }
}

#[test]
fn unknown_tokens_fall_back_by_mode() {
    assert_eq!(convert_operator("unknown_op", true), "ILIKE");
    assert_eq!(convert_operator("unknown_op", false), "=");
}
