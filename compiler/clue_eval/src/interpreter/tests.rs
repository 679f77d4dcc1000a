//! Interpreter tests: whole scripts run against a captured print handler and
//! scripted input.

use super::*;
use crate::errors::{EvalError, EvalErrorKind};
use crate::{buffer_handler, scripted_handler, OutputMode};
use clue_ir::Span;
use pretty_assertions::assert_eq;

fn interpreter<'a>(
    interner: &'a StringInterner,
    config: EvalConfig,
    input: &[&str],
) -> Interpreter<'a> {
    InterpreterBuilder::new(interner)
        .config(config)
        .print_handler(buffer_handler())
        .input_handler(scripted_handler(input.iter().copied()))
        .build()
}

/// Run `source` with the default configuration; returns output and result.
fn run(source: &str) -> (String, Result<(), EvalError>) {
    run_with(source, EvalConfig::default(), &[])
}

fn run_with(source: &str, config: EvalConfig, input: &[&str]) -> (String, Result<(), EvalError>) {
    let interner = StringInterner::new();
    let mut interp = interpreter(&interner, config, input);
    let result = interp.run_source(source);
    (interp.print_handler().get_output(), result)
}

fn output_of(source: &str) -> String {
    let (output, result) = run(source);
    if let Err(err) = result {
        panic!("script failed: {err}");
    }
    output
}

fn evaluate_mode() -> EvalConfig {
    EvalConfig {
        output_mode: OutputMode::Evaluate,
        ..EvalConfig::default()
    }
}

fn expect_err(result: Result<(), EvalError>) -> EvalError {
    match result {
        Ok(()) => panic!("expected the script to fail"),
        Err(err) => err,
    }
}

/// Exit status of a failing script.
fn status_of(source: &str) -> i32 {
    expect_err(run(source).1).exit_status()
}

/// Run a script and read back one global.
fn global_after(source: &str, name: &str) -> Option<Value> {
    let interner = StringInterner::new();
    let mut interp = interpreter(&interner, EvalConfig::default(), &[]);
    if let Err(err) = interp.run_source(source) {
        panic!("script failed: {err}");
    }
    interp.lookup_global(name).cloned()
}

// Assignment and expressions

#[test]
fn test_assignment_evaluates_expression() {
    assert_eq!(global_after("x = 3 + 4", "x"), Some(Value::Int(7)));
    assert_eq!(global_after("x = 7 / 2", "x"), Some(Value::Float(3.5)));
    assert_eq!(
        global_after("s = \"a\" + \"b\"\ns = s + s", "s"),
        Some(Value::string("abab"))
    );
    assert_eq!(
        global_after("b = 1 < 2 and not False", "b"),
        Some(Value::Bool(true))
    );
}

#[test]
fn test_reassignment_may_change_kind() {
    assert_eq!(
        global_after("x = 1\nx = \"one\"", "x"),
        Some(Value::string("one"))
    );
}

#[test]
fn test_string_and_number_builtins() {
    assert_eq!(
        global_after("s = string(3.0) + \"!\"", "s"),
        Some(Value::string("3.0!"))
    );
    assert_eq!(
        global_after("n = number(\" 41 \") + 1", "n"),
        Some(Value::Int(42))
    );
    assert_eq!(global_after("n = number(\"2.5\")", "n"), Some(Value::Float(2.5)));
    assert_eq!(status_of("n = number(\"two\")"), 9);
    assert_eq!(status_of("s = string(1, 2)"), 5);
}

#[test]
fn test_logical_operators_short_circuit() {
    // The right operand would fail if it were evaluated.
    assert_eq!(global_after("x = 0 and missing()", "x"), Some(Value::Int(0)));
    assert_eq!(global_after("x = 1 or missing()", "x"), Some(Value::Int(1)));
}

#[test]
fn test_bad_expressions() {
    let err = expect_err(run("x = 1\ny = x / 0").1);
    assert_eq!(
        err.kind,
        EvalErrorKind::BadExpression {
            text: "x / 0".to_string(),
            reason: "division by zero".to_string(),
        }
    );
    assert_eq!(err.line, 2);
    assert_eq!(err.span, Span::new(4, 9));

    assert_eq!(status_of("x = y + 1"), 9);
    assert_eq!(status_of("x = \"a\" + 1"), 9);
    assert_eq!(status_of("x = $nothing"), 9);
    assert_eq!(status_of("1 + 1"), 9);
}

#[test]
fn test_execution_stops_at_first_failure() {
    let (output, result) = run("output(\"a\")\nx = (\noutput(\"b\")");
    assert_eq!(output, "a\n");
    let err = expect_err(result);
    assert_eq!(err.line, 2);
    assert_eq!(err.exit_status(), 9);
}

// Output

#[test]
fn test_raw_output() {
    assert_eq!(
        output_of("x = 5\noutput($x)\noutput(\"x\")\noutput(x)\noutput(y)"),
        "5\nx\n5\ny\n"
    );
}

#[test]
fn test_raw_output_prints_substituted_text() {
    assert_eq!(output_of("x = 2\noutput(x + 1)"), "2 + 1\n");
    assert_eq!(output_of("output(hello   world)"), "hello   world\n");
    assert_eq!(output_of("output()"), "\n");
}

#[test]
fn test_raw_output_keeps_literal_text() {
    assert_eq!(output_of(r#"output("a\tb")"#), "a\\tb\n");
    assert_eq!(output_of(r#"output(">> kept <<")"#), ">> kept <<\n");
}

#[test]
fn test_raw_output_dequotes_substituted_text() {
    assert_eq!(output_of("q = \"\\\"hi\\\"\"\noutput(q)"), "hi\n");
    let (output, result) = run_with(
        "input(\"\") -> r\noutput($r)",
        EvalConfig::default(),
        &["\"typed\""],
    );
    assert!(result.is_ok());
    assert_eq!(output, "typed\n");
    assert_eq!(output_of("output(\"a\" + \"b\")"), "a\" + \"b\n");
}

#[test]
fn test_evaluated_output() {
    let source = "x = 2\noutput(x + 1)\noutput(1 / 2)\noutput(\"a\\tb\")\noutput(True and 3)\noutput()";
    let (output, result) = run_with(source, evaluate_mode(), &[]);
    assert!(result.is_ok());
    assert_eq!(output, "3\n0.5\na\tb\n3\n\n");
}

#[test]
fn test_evaluated_output_requires_a_valid_expression() {
    let (_, result) = run_with("output(hello world)", evaluate_mode(), &[]);
    assert_eq!(expect_err(result).exit_status(), 9);
    let (_, result) = run_with("output(missing)", evaluate_mode(), &[]);
    assert_eq!(expect_err(result).exit_status(), 9);
}

// Input

#[test]
fn test_input_stores_raw_text() {
    let interner = StringInterner::new();
    let mut interp = interpreter(&interner, EvalConfig::default(), &["42"]);
    let result = interp.run_source("input(\"n? \") -> n\nm = number(n) + 1");
    assert!(result.is_ok());
    assert_eq!(interp.print_handler().get_output(), "n? ");
    assert_eq!(interp.lookup_global("n"), Some(&Value::string("42")));
    assert_eq!(interp.lookup_global("m"), Some(&Value::Int(43)));
}

#[test]
fn test_input_at_end_of_input_stores_empty_string() {
    let interner = StringInterner::new();
    let mut interp = interpreter(&interner, EvalConfig::default(), &[]);
    assert!(interp.run_source("input() -> line").is_ok());
    assert_eq!(interp.lookup_global("line"), Some(&Value::string("")));
}

#[test]
fn test_missing_input_binding() {
    let (output, result) = run("output(\"first\")\ninput(\"? \")");
    assert_eq!(output, "first\n");
    let err = expect_err(result);
    assert_eq!(err.exit_status(), 4);
    assert_eq!(err.line, 2);
}

// Callables

#[test]
fn test_define_and_call() {
    let source = "exec add(a, b) {\n  return a + b\n}\nr = add(2, 3)";
    assert_eq!(global_after(source, "r"), Some(Value::Int(5)));
}

#[test]
fn test_callable_body_writes_globals() {
    let source = "exec setg(v) {\n  g = v * 2\n}\nsetg(5)";
    assert_eq!(global_after(source, "g"), Some(Value::Int(10)));
    // Parameters are not globals.
    assert_eq!(global_after(source, "v"), None);
}

#[test]
fn test_parameters_shadow_globals_for_reads() {
    let source = "a = 100\nexec show(a) { output($a) }\nshow(1)\noutput($a)";
    assert_eq!(output_of(source), "1\n100\n");
}

#[test]
fn test_callee_cannot_see_caller_parameters() {
    let source = "exec inner() { return a }\nexec outer(a) { return inner() }\nx = outer(1)";
    let err = expect_err(run(source).1);
    assert_eq!(err.exit_status(), 9);
    assert_eq!(err.line, 1);
    let frames = err.backtrace.map(|b| b.frames.len());
    assert_eq!(frames, Some(2));
}

#[test]
fn test_redefinition_replaces() {
    let source = "exec f() { return 1 }\nexec f() { return 2 }\nx = f()";
    assert_eq!(global_after(source, "x"), Some(Value::Int(2)));
}

#[test]
fn test_definition_takes_effect_when_reached() {
    assert_eq!(status_of("f()\nexec f() { }"), 6);
}

#[test]
fn test_return_stops_body() {
    let source = "exec f() {\n  return 1\n  output(\"unreachable\")\n}\nx = f()";
    assert_eq!(output_of(source), "");
    assert_eq!(global_after(source, "x"), Some(Value::Int(1)));
}

#[test]
fn test_missing_return_value_is_none() {
    assert_eq!(
        output_of("exec f() { return }\nexec g() { }\nx = f()\ny = g()\noutput($x $y)"),
        "None None\n"
    );
}

#[test]
fn test_return_outside_callable() {
    let err = expect_err(run("return 1").1);
    assert_eq!(err.exit_status(), 9);
    assert!(matches!(
        err.kind,
        EvalErrorKind::BadExpression { ref reason, .. } if reason == "`return` outside of a callable"
    ));
}

#[test]
fn test_arity_mismatch() {
    let err = expect_err(run("exec f(a) { }\nf(1, 2)").1);
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            name: "f".to_string(),
            expected: 1,
            found: 2,
        }
    );
    assert_eq!(err.exit_status(), 5);
    assert_eq!(err.notes, vec!["`f` is defined on line 1".to_string()]);
}

#[test]
fn test_undefined_callable() {
    let err = expect_err(run("x = 1\ny = nothing(x)").1);
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedCallable {
            name: "nothing".to_string()
        }
    );
    assert_eq!(err.exit_status(), 6);
    assert_eq!((err.line, err.span), (2, Span::new(4, 14)));
}

#[test]
fn test_runaway_recursion_is_bounded() {
    let config = EvalConfig {
        max_call_depth: 16,
        ..EvalConfig::default()
    };
    let (_, result) = run_with("exec f() { f() }\nf()", config, &[]);
    let err = expect_err(result);
    assert_eq!(err.kind, EvalErrorKind::CallDepthExceeded { limit: 16 });
    assert_eq!(err.exit_status(), 10);
    assert_eq!(err.backtrace.map(|b| b.frames.len()), Some(16));
}

#[test]
fn test_default_depth_limit_does_not_overflow_the_stack() {
    let (_, result) = run("exec f(n) { f(n + 1) }\nf(0)");
    assert_eq!(
        expect_err(result).kind,
        EvalErrorKind::CallDepthExceeded { limit: 256 }
    );
}

#[test]
fn test_errors_in_callables_carry_backtrace() {
    let err = expect_err(run("exec f() {\n  x = 1 / 0\n}\nf()").1);
    assert_eq!(err.line, 2);
    let backtrace = err.backtrace.unwrap_or_default();
    assert_eq!(backtrace.frames.len(), 1);
    assert_eq!(backtrace.frames[0].name, "f");
    assert_eq!(backtrace.frames[0].call_line, 4);
}

// Loops

#[test]
fn test_loop_repeats_body() {
    assert_eq!(output_of("loop: 3 { output(\"hi\") }"), "hi\nhi\nhi\n");
    assert_eq!(output_of("loop: 0 { output(\"hi\") }"), "");
}

#[test]
fn test_loop_index() {
    assert_eq!(output_of("loop: 3 { output(index) }"), "0\n1\n2\n");
    assert_eq!(global_after("loop: 3 { last = index }", "last"), Some(Value::Int(2)));
    assert_eq!(global_after("loop: 3 { last = index }", "index"), None);
}

#[test]
fn test_loop_index_can_be_disabled_or_renamed() {
    let hidden = EvalConfig {
        expose_index: false,
        ..EvalConfig::default()
    };
    let (output, _) = run_with("loop: 2 { output(index) }", hidden, &[]);
    assert_eq!(output, "index\nindex\n");

    let renamed = EvalConfig {
        index_name: "i".to_string(),
        ..EvalConfig::default()
    };
    let (output, _) = run_with("loop: 2 { output($i) }", renamed, &[]);
    assert_eq!(output, "0\n1\n");
}

#[test]
fn test_nested_loops() {
    let source = "loop: 2 {\n  loop: 2 {\n    output(index)\n  }\n  output(\"-\")\n}";
    assert_eq!(output_of(source), "0\n1\n-\n0\n1\n-\n");
}

#[test]
fn test_loop_inside_callable_sees_parameters() {
    let source = "exec rep(n, s) {\n  loop: n { output($s) }\n}\nrep(2, \"ho\")";
    assert_eq!(output_of(source), "ho\nho\n");
}

#[test]
fn test_return_inside_loop_leaves_callable() {
    let source = "exec first() {\n  loop: 5 {\n    return index + 10\n  }\n}\nx = first()";
    assert_eq!(global_after(source, "x"), Some(Value::Int(10)));
}

#[test]
fn test_loop_count_from_input() {
    let (output, result) = run_with(
        "input() -> n\nloop: n { output(\"go\") }",
        EvalConfig::default(),
        &["2"],
    );
    assert!(result.is_ok());
    assert_eq!(output, "go\ngo\n");
}

#[test]
fn test_invalid_loop_counts() {
    for source in [
        "loop: -1 { }",
        "loop: \"x\" { }",
        "loop: 2.0 { }",
        "loop: n { }",
        "loop: { }",
        "loop: 1 + { }",
    ] {
        assert_eq!(status_of(source), 8, "{source}");
    }
}

#[test]
fn test_loop_count_call_errors_keep_their_class() {
    assert_eq!(status_of("loop: missing() { }"), 6);
}

#[test]
fn test_invalid_loop_count_message() {
    let err = expect_err(run("loop: \"x\" { }").1);
    assert_eq!(
        err.to_string(),
        "line 1: invalid loop count `\"x\"`: expected a non-negative integer, found \"x\""
    );
}

#[test]
fn test_unclosed_block_is_never_executed() {
    let (output, result) = run("output(\"before\")\nloop: 3 {\n  output(\"hi\")\n");
    assert_eq!(output, "before\n");
    assert_eq!(expect_err(result).exit_status(), 7);
}

#[test]
fn test_missing_open_brace() {
    let (output, result) = run("loop: 3\noutput(\"hi\")");
    assert_eq!(output, "");
    assert_eq!(expect_err(result).exit_status(), 7);
}

#[test]
fn test_comments_are_ignored() {
    let source = ">> a comment\nx = 1 >> inline << + 1 >> trailing\noutput($x)";
    assert_eq!(output_of(source), "2\n");
}
