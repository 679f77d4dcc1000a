//! The `lex` command: show the token stream of each line.

use clue_diagnostic::ColorMode;
use clue_ir::StringInterner;
use clue_lexer::{lex, render_tokens};
use clue_parse::SourceBuffer;

use super::{read_file, report, SUCCESS};

/// Print the tokens of every non-blank, comment-stripped line of `path`.
pub fn lex_file(path: &str) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(diag) => return report(&diag, ColorMode::Auto),
    };

    let interner = StringInterner::new();
    let mut buffer = SourceBuffer::new(&source);
    while let Some(line) = buffer.next_line() {
        if line.is_blank() {
            continue;
        }
        println!("line {}: {}", line.number, line.text.trim());
        let tokens = lex(&line.text, &interner);
        for token_line in render_tokens(&line.text, &tokens, &interner).lines() {
            println!("    {token_line}");
        }
    }
    SUCCESS
}
