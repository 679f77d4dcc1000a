use super::*;
use clue_eval::OutputMode;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn test_defaults() {
    let parsed = parse_run_args(&args(&["main.cla"]));
    assert_eq!(
        parsed,
        Ok(("main.cla".to_string(), RunOptions::default()))
    );
}

#[test]
fn test_all_options() {
    let parsed = parse_run_args(&args(&[
        "--no-index",
        "main.cla",
        "--index-name=i",
        "--output=eval",
        "--max-depth=32",
        "--color=never",
    ]));
    let expected = RunOptions {
        config: EvalConfig {
            expose_index: false,
            index_name: "i".to_string(),
            output_mode: OutputMode::Evaluate,
            max_call_depth: 32,
        },
        color: ColorMode::Never,
    };
    assert_eq!(parsed, Ok(("main.cla".to_string(), expected)));
}

#[test]
fn test_rejections() {
    let cases: [(&[&str], &str); 6] = [
        (&[], "missing script path"),
        (&["a.cla", "b.cla"], "unexpected argument `b.cla`"),
        (&["a.cla", "--fast"], "unknown option `--fast`"),
        (&["a.cla", "--max-depth=0"], "invalid maximum call depth `0`"),
        (&["a.cla", "--index-name=2x"], "invalid index name `2x`"),
        (
            &["a.cla", "--output=loud"],
            "invalid output mode `loud` (expected `raw` or `eval`)",
        ),
    ];
    for (input, message) in cases {
        assert_eq!(parse_run_args(&args(input)), Err(message.to_string()));
    }
}
