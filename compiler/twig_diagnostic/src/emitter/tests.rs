#![allow(clippy::unwrap_used)]

use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E6001)
        .with_message("unbound identifier `y`")
        .at_line(2)
        .with_note("identifiers must be declared before use")
}

fn render(source: Option<&str>, path: Option<&str>) -> String {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
        if let Some(source) = source {
            emitter = emitter.with_source(source);
        }
        if let Some(path) = path {
            emitter = emitter.with_file_path(path);
        }
        emitter.emit(&sample_diagnostic());
        emitter.flush();
    }
    String::from_utf8(output).unwrap()
}

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(None, None);
    assert!(text.contains("error[E6001]: unbound identifier `y`"));
    assert!(text.contains("--> line 2"));
    assert!(text.contains("= note: identifiers must be declared before use"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Always, false);
    emitter.emit(&sample_diagnostic());
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\x1b["));
    assert!(text.contains("E6001"));
}

#[test]
fn test_snippet_quotes_source_line() {
    let source = "x = 1\n(f y)\n";
    let text = render(Some(source), Some("demo.twig"));
    let expected = "\
error[E6001]: unbound identifier `y`
  --> demo.twig:2
  |
2 | (f y)
  |
  = note: identifiers must be declared before use

";
    assert_eq!(text, expected);
}

#[test]
fn test_snippet_skipped_when_line_out_of_range() {
    let text = render(Some("only one line"), None);
    assert!(text.contains("--> line 2"));
    assert!(!text.contains(" | "));
}

#[test]
fn test_emit_twice_separates_with_blank_line() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit(&Diagnostic::error(ErrorCode::E1001).with_message("error 1"));
    emitter.emit(&Diagnostic::error(ErrorCode::E1002).with_message("error 2"));
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text, "error[E1001]: error 1\n\nerror[E1002]: error 2\n\n");
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}
