use super::*;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2001.as_str(), "E2001");
}

#[test]
fn test_compatible_exit_statuses() {
    assert_eq!(ErrorCode::E1002.exit_status(), 4);
    assert_eq!(ErrorCode::E2003.exit_status(), 5);
    assert_eq!(ErrorCode::E2004.exit_status(), 6);
    assert_eq!(ErrorCode::E1001.exit_status(), 7);
    assert_eq!(ErrorCode::E2002.exit_status(), 8);
    assert_eq!(ErrorCode::E2001.exit_status(), 9);
}

#[test]
fn test_exit_statuses_are_distinct_and_nonzero() {
    let statuses: HashSet<i32> = ErrorCode::ALL.iter().map(ErrorCode::exit_status).collect();
    assert_eq!(statuses.len(), ErrorCode::ALL.len());
    assert!(!statuses.contains(&0));
    assert!(!statuses.contains(&1));
}

#[test]
fn test_phase_predicates() {
    assert!(ErrorCode::E0002.is_driver_error());
    assert!(ErrorCode::E1002.is_syntax_error());
    assert!(ErrorCode::E2005.is_runtime_error());
    assert!(!ErrorCode::E2005.is_syntax_error());
}

#[test]
fn test_from_str() {
    assert_eq!("e2004".parse::<ErrorCode>(), Ok(ErrorCode::E2004));
    assert_eq!("E1001".parse::<ErrorCode>(), Ok(ErrorCode::E1001));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
}

#[test]
fn test_all_codes_roundtrip_through_as_str() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
        assert!(!code.title().is_empty());
    }
}
