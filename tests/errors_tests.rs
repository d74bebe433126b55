use std::error::Error;
use lambda_report::errors::ReportError;

#[test]
fn test_report_error_implements_error_trait() {
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = ReportError::Usage("no regions".to_string());
    assert_error(&error);
}

#[test]
fn test_report_error_display() {
    let error = ReportError::registry("us-east-1", "AccessDenied");
    assert_eq!(
        format!("{error}"),
        "Failed to list functions in us-east-1: AccessDenied"
    );

    let error = ReportError::metrics("orders", "Throttling");
    assert_eq!(
        format!("{error}"),
        "Failed to fetch metrics for orders: Throttling"
    );
}

#[test]
fn test_detail_strips_context() {
    assert_eq!(
        ReportError::registry("us-east-1", "AccessDenied").detail(),
        "AccessDenied"
    );
    assert_eq!(ReportError::metrics("orders", "Throttling").detail(), "Throttling");
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let err: ReportError = io.into();

    match err {
        ReportError::Output(e) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
        _ => panic!("Unexpected error type"),
    }
}
