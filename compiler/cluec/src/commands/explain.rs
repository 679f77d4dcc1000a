//! The `explain` command: display documentation for error codes.

use clue_diagnostic::{ErrorCode, ErrorDocs};

use super::{usage_error, SUCCESS};

/// Print the long description of `code_str`.
pub fn explain_error(code_str: &str) -> i32 {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        return usage_error(format!(
            "unknown error code `{code_str}` (codes look like E2001)"
        ));
    };

    match ErrorDocs::get(code) {
        Some(doc) => {
            println!("{doc}");
            SUCCESS
        }
        None => usage_error(format!("no documentation available for {code}")),
    }
}
