//! Tests for the error module.

use crate::error::config::ConfigError;
use crate::error::dataset::DatasetError;
use crate::error::{ErrorContext, ErrorReporter, HuaError, TracingErrorReporter};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = HuaError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

#[test]
fn test_nested_errors() {
    let error: HuaError = DatasetError::FileNotFound(PathBuf::from("words.txt")).into();
    assert_eq!(
        error.to_string(),
        "Dataset error: Dataset file not found: words.txt"
    );

    let error: HuaError = ConfigError::ValidationError("bad level".to_string()).into();
    assert_eq!(
        error.to_string(),
        "Configuration error: Configuration validation error: bad level"
    );

    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let error: HuaError = io_error.into();
    assert!(error.to_string().contains("pipe closed"));
}

#[test]
fn test_dataset_read_error_keeps_source() {
    let error = DatasetError::Read {
        path: PathBuf::from("words.txt"),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
    };

    assert!(error.to_string().starts_with("Failed to read dataset words.txt"));
    assert!(std::error::Error::source(&error).is_some());
}

/// Counts reports instead of logging them.
#[derive(Debug, Default)]
struct CountingReporter {
    reported: AtomicUsize,
}

impl ErrorReporter for CountingReporter {
    fn report(&self, _context: &ErrorContext) {
        self.reported.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_reporter_trait_object() {
    let reporter = CountingReporter::default();
    let context = ErrorContext::new(HuaError::Custom("boom".to_string()), "test_component");

    let dyn_reporter: &dyn ErrorReporter = &reporter;
    dyn_reporter.report(&context);
    dyn_reporter.report(&context);

    assert_eq!(reporter.reported.load(Ordering::SeqCst), 2);
}

/// Test that the default tracing error reporter can be used without a subscriber.
#[test]
fn test_tracing_error_reporter() {
    let context = ErrorContext::new(HuaError::Custom("test error".to_string()), "test_component");
    TracingErrorReporter.report(&context);
}

/// Without a registered reporter, errors fall back to standard error.
#[test]
fn test_report_error_without_reporter() {
    let context = ErrorContext::new(HuaError::Custom("unreported".to_string()), "test_component");
    crate::error::report_error(&context);
}
