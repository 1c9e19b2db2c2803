use super::*;

#[test]
fn invalid_session_message_names_the_handle() {
    let error = BoardcoreError::InvalidSession(SessionId::new(7));
    assert_eq!(error.to_string(), "no active session with id 7");
}

#[test]
fn argument_errors_exit_with_usage_code() {
    let error = BoardcoreError::InvalidArgument("conflicting flags".to_string());
    assert_eq!(get_exit_code(&error), 2);

    let error = BoardcoreError::InvalidVersionFormat("x.y".to_string());
    assert_eq!(get_exit_code(&error), 2);
}

#[test]
fn session_and_registry_errors_have_distinct_codes() {
    let session = BoardcoreError::InvalidSession(SessionId::new(1));
    let missing = BoardcoreError::RegistryNotFound("/tmp/registry.json".to_string());
    assert_eq!(get_exit_code(&session), 3);
    assert_eq!(get_exit_code(&missing), 4);
}

#[test]
fn io_errors_fall_through_to_generic_code() {
    let error = BoardcoreError::Io(std::io::Error::other("disk on fire"));
    assert_eq!(get_exit_code(&error), 1);
}

#[test]
fn format_error_chain_starts_with_the_error() {
    let error = BoardcoreError::InvalidRegistry("expected value at line 1".to_string());
    let formatted = format_error_chain(&error);
    assert!(formatted.starts_with("Error: invalid registry index"));
    assert!(formatted.contains("expected value"));
}
