#![allow(clippy::unwrap_used)]

use super::*;
use crate::EvalErrorKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use twig_parse::parse;

/// Parse and run `source` with the prelude, rendering the result.
fn run(source: &str) -> EvalResult<String> {
    let tree = parse(source).unwrap();
    let mut interp = Interpreter::builder().prelude(true).build();
    let rendered = interp.run(&tree).map(|value| value.to_string());
    rendered
}

fn run_err(source: &str) -> EvalErrorKind {
    run(source).unwrap_err().kind
}

// Core forms

#[test]
fn test_calling_integer_is_not_callable() {
    let err = run("(42)").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::NotCallable {
            type_name: "integer"
        }
    );
    assert_eq!(err.line, 1);
}

#[test]
fn test_program_without_return_is_void() {
    assert_eq!(run("x=5 x").unwrap(), "void");
}

#[test]
fn test_immediately_applied_definition() {
    assert_eq!(run("=> (([n] => n) 7)").unwrap(), "7");
}

#[test]
fn test_array_literal() {
    assert_eq!(run("=> [1 2 3]").unwrap(), "[1 2 3]");
    assert_eq!(run("=> (len [1 2 3])").unwrap(), "3");
}

#[test]
fn test_literals() {
    assert_eq!(run("=> 3.5").unwrap(), "3.5");
    assert_eq!(run("=> \"hi\\tthere\"").unwrap(), "\"hi\tthere\"");
    assert_eq!(run("=> 'sym").unwrap(), "'sym");
}

#[test]
fn test_integer_out_of_range() {
    assert_eq!(
        run_err("=> 99999999999999999999"),
        EvalErrorKind::InvalidLiteral {
            text: "99999999999999999999".to_owned(),
            expected: "integer"
        }
    );
}

#[test]
fn test_return_stops_program() {
    assert_eq!(run("=> 1 never-bound").unwrap(), "1");
}

#[test]
fn test_declaration_yields_value() {
    assert_eq!(run("=> x = 4").unwrap(), "4");
}

#[test]
fn test_redeclaration_replaces_value() {
    assert_eq!(run("x = [1] x = 2 => x").unwrap(), "2");
}

#[test]
fn test_structure() {
    assert_eq!(
        run("=> {b = 'x a = 1 a = 3}").unwrap(),
        "{a=3 b='x}"
    );
}

#[test]
fn test_structure_fields_are_not_bound() {
    assert_eq!(
        run_err("s = {a = 1} => a"),
        EvalErrorKind::UnboundIdentifier {
            name: "a".to_owned()
        }
    );
}

#[test]
fn test_definition_renders_arity() {
    assert_eq!(run("=> ([a b] a)").unwrap(), "<function/2>");
    assert_eq!(run("=> len").unwrap(), "<native len>");
}

// Scoping

#[test]
fn test_body_locals_invisible_after_call() {
    assert_eq!(
        run_err("f = ([] inner = 1 => inner) (f) => inner"),
        EvalErrorKind::UnboundIdentifier {
            name: "inner".to_owned()
        }
    );
}

#[test]
fn test_outer_visible_in_body() {
    assert_eq!(run("x = 1 f = ([] => x) => (f)").unwrap(), "1");
}

#[test]
fn test_parameter_shadows_outer() {
    assert_eq!(run("x = 1 f = ([x] => x) => (f 2)").unwrap(), "2");
    assert_eq!(run("x = 1 f = ([x] => x) (f 2) => x").unwrap(), "1");
}

#[test]
fn test_inner_declaration_does_not_touch_outer() {
    assert_eq!(run("x = 1 f = ([] x = 2 => x) (f) => x").unwrap(), "1");
}

#[test]
fn test_closure_keeps_frame_alive() {
    assert_eq!(
        run("make = ([x] => ([] => x)) get = (make 5) => (get)").unwrap(),
        "5"
    );
}

#[test]
fn test_unbound_identifier_line() {
    let err = run("x = 1\n\n=> y").unwrap_err();
    assert_eq!(err.line, 3);
    assert_eq!(err.code(), twig_diagnostic::ErrorCode::E6001);
}

// Calls

#[test]
fn test_closure_arity_mismatch() {
    assert_eq!(
        run_err("f = ([a b] => a) (f 1)"),
        EvalErrorKind::ArityMismatch {
            expected: Arity::Exact(2),
            got: 1
        }
    );
}

#[test]
fn test_native_arity_mismatch() {
    assert_eq!(
        run_err("(len)"),
        EvalErrorKind::ArityMismatch {
            expected: Arity::Exact(1),
            got: 0
        }
    );
    assert_eq!(
        run_err("(-)"),
        EvalErrorKind::ArityMismatch {
            expected: Arity::AtLeast(1),
            got: 0
        }
    );
}

#[test]
fn test_native_failure_carries_name() {
    let err = run("\n(nth [1] 5)").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::NativeFailed {
            name: "nth".to_owned(),
            message: "index 5 out of bounds for length 1".to_owned()
        }
    );
    assert_eq!(err.line, 2);
}

#[test]
fn test_prelude_arithmetic() {
    assert_eq!(run("=> (+ 1 2 (- 10 4))").unwrap(), "9");
    assert_eq!(run("=> (type-of (+ 1 0.5))").unwrap(), "'float");
    assert_eq!(run("=> (field {n = 'v} 'n)").unwrap(), "'v");
}

#[test]
fn test_prelude_off_by_default() {
    let tree = parse("=> (+ 1 2)").unwrap();
    let mut interp = Interpreter::new();
    assert_eq!(
        interp.run(&tree).unwrap_err().kind,
        EvalErrorKind::UnboundIdentifier {
            name: "+".to_owned()
        }
    );
}

#[test]
fn test_define_native() {
    fn double<'a>(args: &[Value<'a>]) -> Result<Value<'a>, String> {
        match args {
            [Value::Int(n)] => Ok(Value::int(n * 2)),
            _ => Err("expected an integer".to_owned()),
        }
    }

    let tree = parse("=> (double 21)").unwrap();
    let bad = parse("(double 'x)").unwrap();
    let mut interp = Interpreter::new();
    interp.define_native("double", Arity::Exact(1), double);

    assert_eq!(interp.run(&tree).unwrap(), Value::int(42));
    assert_eq!(
        interp.run(&bad).unwrap_err().kind,
        EvalErrorKind::NativeFailed {
            name: "double".to_owned(),
            message: "expected an integer".to_owned()
        }
    );
}

#[test]
fn test_builder_native_shadows_prelude() {
    fn zero<'a>(_: &[Value<'a>]) -> Result<Value<'a>, String> {
        Ok(Value::int(0))
    }

    let tree = parse("=> (len [1 2])").unwrap();
    let mut interp = Interpreter::builder()
        .prelude(true)
        .native("len", Arity::Exact(1), zero)
        .build();
    assert_eq!(interp.run(&tree).unwrap(), Value::int(0));
}

#[test]
fn test_stack_overflow_at_configured_depth() {
    let tree = parse("f = ([] (f)) (f)").unwrap();
    let mut interp = Interpreter::builder().max_call_depth(50).build();
    let err = interp.run(&tree).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::StackOverflow { limit: 50 });
}

#[test]
fn test_stack_overflow_at_default_depth() {
    assert_eq!(
        run_err("f = ([x] (f x)) (f 1)"),
        EvalErrorKind::StackOverflow {
            limit: DEFAULT_MAX_CALL_DEPTH
        }
    );
}

#[test]
fn test_interpreter_usable_after_error() {
    let overflow = parse("f = ([] (f)) (f)").unwrap();
    let fine = parse("g = ([] => 1) => (g)").unwrap();
    let mut interp = Interpreter::builder().max_call_depth(10).build();
    assert!(interp.run(&overflow).is_err());
    assert_eq!(interp.run(&fine).unwrap(), Value::int(1));
}

// Completion

#[test]
fn test_completion_kinds() {
    let finished = parse("x = 1").unwrap();
    let returned = parse("=> 2").unwrap();
    let mut interp = Interpreter::new();
    assert_eq!(interp.run_program(&finished).unwrap(), Completion::Finished);
    assert_eq!(
        interp.run_program(&returned).unwrap(),
        Completion::Returned(Value::int(2))
    );
}

#[test]
fn test_globals_persist_between_runs() {
    let first = parse("x = 40").unwrap();
    let second = parse("=> (+ x 2)").unwrap();
    let mut interp = Interpreter::builder().prelude(true).build();
    interp.run(&first).unwrap();
    assert_eq!(interp.run(&second).unwrap(), Value::int(42));
}

// Reference discipline

#[test]
fn test_call_releases_bound_arguments() {
    let setup = parse("a = [1 2]").unwrap();
    let call = parse("f = ([x] y = x => 0) (f a)").unwrap();
    let mut interp = Interpreter::new();
    interp.run(&setup).unwrap();

    let a = interp.global("a").unwrap();
    assert_eq!(a.ref_count(), Some(2));

    interp.run(&call).unwrap();
    assert_eq!(a.ref_count(), Some(2));
}

#[test]
fn test_unadopted_statement_values_are_released() {
    let tree = parse("[1 2] \"tmp\" => 'done").unwrap();
    let mut interp = Interpreter::new();
    let value = interp.run(&tree).unwrap();
    assert_eq!(value.ref_count(), Some(1));
}

#[test]
fn test_array_holds_element_owners() {
    let tree = parse("s = \"x\" arr = [s s s]").unwrap();
    let mut interp = Interpreter::new();
    interp.run(&tree).unwrap();
    let s = interp.global("s").unwrap();
    // Global binding, three array slots and this handle.
    assert_eq!(s.ref_count(), Some(5));
}

#[test]
fn test_teardown_breaks_global_cycle() {
    let tree = parse("f = ([] 1)").unwrap();
    let mut interp = Interpreter::new();
    interp.run(&tree).unwrap();

    let f = interp.global("f").unwrap();
    assert_eq!(f.ref_count(), Some(2));

    drop(interp);
    assert_eq!(f.ref_count(), Some(1));
}

// Properties

fn render_twice(source: &str) -> (EvalResult<String>, EvalResult<String>) {
    (run(source), run(source))
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(
        statements in prop::collection::vec(
            prop::sample::select(vec![
                "x = 1", "=> x", "f = ([a] => a)", "(f x)", "[x 2.5 'k]",
                "{k = x}", "y", "(+ x 2)", "(f)", "s = \"str\"", "=> (len s)",
            ]),
            0..8,
        )
    ) {
        let source = statements.join("\n");
        let (first, second) = render_twice(&source);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn integer_literals_round_trip(n in 0..=i64::MAX) {
        let source = format!("=> {n}");
        let tree = parse(&source).unwrap();
        let mut interp = Interpreter::new();
        prop_assert_eq!(interp.run(&tree).unwrap(), Value::int(n));
    }

    #[test]
    fn string_literals_round_trip(text in "[a-z ]{0,20}") {
        let source = format!("=> \"{text}\"");
        let tree = parse(&source).unwrap();
        let mut interp = Interpreter::new();
        prop_assert_eq!(interp.run(&tree).unwrap(), Value::string(text));
    }
}
