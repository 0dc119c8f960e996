//! Unit tests for the preprocessor.

use super::preprocessor::preprocess;

#[test]
fn test_strips_directive_lines() {
    let source = "#some\nhello\n#macro\nworld\n#removal\n";

    assert_eq!(preprocess(source).unwrap(), "hello\nworld");
}

#[test]
fn test_substitutes_defined_macros() {
    let source = "#define MACRO 1\n#define ANOTHER_MACRO 2\nint i = MACRO;\nint j = ANOTHER_MACRO;\n";

    assert_eq!(preprocess(source).unwrap(), "int i = 1;\nint j = 2;");
}

#[test]
fn test_substitutes_every_occurrence() {
    let source = "#define N 3\nint a = N + N * N;";

    assert_eq!(preprocess(source).unwrap(), "int a = 3 + 3 * 3;");
}

#[test]
fn test_macro_only_applies_to_later_lines() {
    let source = "int a = LATE;\n#define LATE 7\nint b = LATE;";

    assert_eq!(preprocess(source).unwrap(), "int a = LATE;\nint b = 7;");
}

#[test]
fn test_earlier_macro_expands_inside_later_definition() {
    let source = "#define ONE 1\n#define TWO ONE + ONE\nint x = TWO;";

    assert_eq!(preprocess(source).unwrap(), "int x = 1 + 1;");
}

#[test]
fn test_macro_value_keeps_rest_of_line() {
    let source = "#define SUM a + b\nfloat c = SUM;";

    assert_eq!(preprocess(source).unwrap(), "float c = a + b;");
}

#[test]
fn test_removes_block_comments() {
    let source = "int a; /* one\ntwo */ int b;\n/* whole line */\nint c;";

    assert_eq!(preprocess(source).unwrap(), "int a;  int b;\nint c;");
}

#[test]
fn test_block_comments_do_not_nest() {
    let source = "/* outer /* inner */ int a; */";

    assert_eq!(preprocess(source).unwrap(), "int a; */");
}

#[test]
fn test_drops_line_comments() {
    let source = "// header\nint a = 1; // trailing\n   // indented\nint b;";

    assert_eq!(preprocess(source).unwrap(), "int a = 1;\nint b;");
}

#[test]
fn test_keeps_comment_markers_inside_quotes() {
    let source = "s = \"a//b\"; // c\nt = 'x//y';\n#define URL \"http://host\" // address\nu = URL;";

    assert_eq!(
        preprocess(source).unwrap(),
        "s = \"a//b\";\nt = 'x//y';\nu = \"http://host\";"
    );
}

#[test]
fn test_collapses_double_not() {
    let source = "bool a = !!b;\nbool c = !d;";

    assert_eq!(preprocess(source).unwrap(), "bool a = b;\nbool c = !d;");
}

#[test]
fn test_trims_and_skips_blank_lines() {
    let source = "\r\n   int a;   \r\n\r\n\tint b;\n";

    assert_eq!(preprocess(source).unwrap(), "int a;\nint b;");
}

#[test]
fn test_malformed_define_is_reported() {
    let error = preprocess("#define LONELY\nint a;").unwrap_err();

    assert_eq!(error.get_error_name(), "MalformedMacroDirective");
    assert_eq!(error.get_source_text(), "#define LONELY");
}

#[test]
fn test_bare_define_is_reported() {
    let error = preprocess("#define").unwrap_err();

    assert_eq!(error.get_error_name(), "MalformedMacroDirective");
}
