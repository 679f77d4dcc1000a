//! Whole-script parsing.

use super::*;
use clue_ir::{BlockKind, StmtKind, SyntaxErrorKind};
use pretty_assertions::assert_eq;

const SCRIPT: &str = r#">> greeting script
exec greet(name) {
    output("Hello")
    return "Hello, " + name >> inline << + "!"
}

loop: 2 { msg = greet("clue") }
input("continue? ") -> answer
"#;

#[test]
fn test_parses_complete_script() {
    let interner = StringInterner::new();
    let program = parse_program(SCRIPT, &interner);
    assert_eq!(program.stmts.len(), 3);
    assert!(program.syntax_errors().is_empty());
    assert_eq!(program.stmts[1].line, 7);
    assert_eq!(program.stmts[2].line, 8);
}

#[test]
fn test_syntax_errors_are_collected_in_source_order() {
    let interner = StringInterner::new();
    let source = "x = (1\nloop: 2 {\n  y = 2 *\n}\ninput(\"?\")\nexec f() {\n  ok()\n";
    let program = parse_program(source, &interner);
    let found: Vec<(u32, ErrorClass)> = program
        .syntax_errors()
        .into_iter()
        .map(|err| (err.line, summarize(&err.kind)))
        .collect();
    assert_eq!(
        found,
        vec![
            (1, ErrorClass::Bad),
            (3, ErrorClass::Bad),
            (5, ErrorClass::Binding),
            (6, ErrorClass::Unclosed),
        ]
    );
}

#[derive(Debug, PartialEq)]
enum ErrorClass {
    Bad,
    Binding,
    Unclosed,
}

fn summarize(kind: &SyntaxErrorKind) -> ErrorClass {
    match kind {
        SyntaxErrorKind::BadExpression { .. } => ErrorClass::Bad,
        SyntaxErrorKind::MissingInputBinding => ErrorClass::Binding,
        SyntaxErrorKind::UnclosedBlock {
            block: BlockKind::Exec,
        } => ErrorClass::Unclosed,
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_unclosed_block_swallows_rest_of_script() {
    let interner = StringInterner::new();
    let program = parse_program("output(\"before\")\nloop: 3 {\n  output(\"hi\")\n", &interner);
    assert_eq!(program.stmts.len(), 2);
    assert!(matches!(program.stmts[1].kind, StmtKind::Invalid(_)));
}

#[test]
fn test_comment_markers_inside_strings_are_kept() {
    let interner = StringInterner::new();
    let program = parse_program("output(\">> not a comment <<\")", &interner);
    let StmtKind::Output(arg) = &program.stmts[0].kind else {
        panic!("expected output");
    };
    assert_eq!(arg.literal.as_deref(), Some(">> not a comment <<"));
}
