use super::*;

#[test]
fn test_app_error_exit_codes() {
    assert_eq!(AppError::NotFound("test".into()).exit_code(), 1);
    assert_eq!(AppError::Validation("test".into()).exit_code(), 2);
    assert_eq!(AppError::Configuration("test".into()).exit_code(), 3);
    assert_eq!(AppError::Database("test".into()).exit_code(), 4);
    assert_eq!(AppError::ExternalService("test".into()).exit_code(), 5);
    assert_eq!(AppError::Internal("test".into()).exit_code(), 70);
}

#[test]
fn test_app_error_error_codes() {
    assert_eq!(
        AppError::Configuration("test".into()).error_code(),
        "CONFIGURATION_ERROR"
    );
    assert_eq!(
        AppError::Validation("test".into()).error_code(),
        "VALIDATION_ERROR"
    );
    assert_eq!(AppError::NotFound("test".into()).error_code(), "NOT_FOUND");
    assert_eq!(
        AppError::Database("test".into()).error_code(),
        "DATABASE_ERROR"
    );
    assert_eq!(
        AppError::ExternalService("test".into()).error_code(),
        "EXTERNAL_SERVICE_ERROR"
    );
    assert_eq!(
        AppError::Internal("test".into()).error_code(),
        "INTERNAL_ERROR"
    );
}

#[test]
fn test_app_error_display() {
    assert_eq!(
        format!("{}", AppError::Configuration("msg".into())),
        "Configuration error: msg"
    );
    assert_eq!(
        format!("{}", AppError::Database("msg".into())),
        "Database error: msg"
    );
    assert_eq!(
        format!("{}", AppError::ExternalService("msg".into())),
        "External service error: msg"
    );
}

#[test]
fn test_config_error_maps_to_configuration() {
    let err: AppError = config::ConfigError::NotFound("database.url".into()).into();
    assert!(matches!(err, AppError::Configuration(_)));
    assert_eq!(err.exit_code(), 3);
}
