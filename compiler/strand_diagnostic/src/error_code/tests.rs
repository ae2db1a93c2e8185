use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E0002.as_str(), "E0002");
}

#[test]
fn test_error_code_layers() {
    for code in [ErrorCode::E0001, ErrorCode::E0002, ErrorCode::E0003] {
        assert!(code.is_source_error());
        assert!(!code.is_parser_error());
    }
    for code in [
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
    ] {
        assert!(code.is_parser_error());
        assert!(!code.is_source_error());
    }
}

#[test]
fn test_from_str_round_trips_all_codes() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
}

#[test]
fn test_from_str_is_case_insensitive() {
    assert_eq!("e1003".parse::<ErrorCode>(), Ok(ErrorCode::E1003));
}

#[test]
fn test_from_str_rejects_unknown() {
    assert!("E9999".parse::<ErrorCode>().is_err());
    assert!("".parse::<ErrorCode>().is_err());
}

#[test]
fn test_descriptions_are_distinct() {
    let mut seen: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::description).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), ErrorCode::ALL.len());
}
