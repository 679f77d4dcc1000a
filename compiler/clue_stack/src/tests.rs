use super::*;

/// Nesting depth far beyond what a default 2MB test thread survives
/// without growth.
const DEEP: u32 = 200_000;

fn nest(depth: u32) -> u32 {
    ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
}

#[test]
fn test_deep_nesting_completes() {
    assert_eq!(nest(DEEP), DEEP);
}

#[test]
fn test_passes_through_results() {
    let parsed: Result<u32, String> =
        ensure_sufficient_stack(|| "17".parse().map_err(|_| "nan".to_string()));
    assert_eq!(parsed, Ok(17));
}
