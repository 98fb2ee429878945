use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_builder_sets_fields() {
    let diag = Diagnostic::error(ErrorCode::E6001)
        .with_message("unbound identifier `x`")
        .at_line(3)
        .with_note("declare it with `x = ...` first");

    assert_eq!(diag.code, ErrorCode::E6001);
    assert_eq!(diag.message, "unbound identifier `x`");
    assert_eq!(diag.line, Some(3));
    assert_eq!(diag.notes, ["declare it with `x = ...` first"]);
}

#[test]
fn test_display_with_line() {
    let diag = Diagnostic::error(ErrorCode::E0002)
        .with_message("unterminated string literal")
        .at_line(7);
    assert_eq!(
        diag.to_string(),
        "error[E0002] (line 7): unterminated string literal"
    );
}

#[test]
fn test_display_without_line() {
    let diag = Diagnostic::error(ErrorCode::E6006).with_message("deep");
    assert_eq!(diag.to_string(), "error[E6006]: deep");
}
