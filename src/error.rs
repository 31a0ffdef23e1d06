use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CoactorError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(coactor_graph::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}'")]
    #[diagnostic(
        code(coactor_graph::write_error),
        help("Check that the parent directory exists and is writable")
    )]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse CSV file '{path}'")]
    #[diagnostic(
        code(coactor_graph::csv_error),
        help("Node and edge files must be UTF-8 text with one record per line")
    )]
    CsvParseError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed CSV row in '{path}' at line {line}: {message}")]
    #[diagnostic(
        code(coactor_graph::csv_row_error),
        help("Every row after the header needs at least two comma-separated fields")
    )]
    CsvRowError {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("CSV serialization error")]
    #[diagnostic(
        code(coactor_graph::csv_write_error),
        help("This is likely an internal error - please report it")
    )]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(coactor_graph::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(coactor_graph::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(coactor_graph::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("HTTP client error")]
    #[diagnostic(
        code(coactor_graph::http_error),
        help("Check your network connection and that the TMDb API is reachable")
    )]
    Http(#[from] reqwest::Error),

    #[error("API request failed: {message}")]
    #[diagnostic(
        code(coactor_graph::api_error),
        help("The request is retried a fixed number of times before giving up")
    )]
    ApiError { message: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(coactor_graph::config_error),
        help("Check your command arguments and environment variables")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = CoactorError::FileReadError {
            path: PathBuf::from("/tmp/missing.csv"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.csv'");
    }

    #[test]
    fn test_csv_row_error() {
        let error = CoactorError::CsvRowError {
            path: PathBuf::from("nodes.csv"),
            line: 7,
            message: "expected 2 fields, found 1".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Malformed CSV row in 'nodes.csv' at line 7: expected 2 fields, found 1"
        );
    }

    #[test]
    fn test_configuration_error() {
        let error = CoactorError::ConfigurationError {
            message: "cast limit must be greater than zero".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Configuration error: cast limit must be greater than zero"
        );
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let error = CoactorError::FileWriteError {
            path: PathBuf::from("edges.csv"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        };

        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let error: CoactorError = io::Error::other("some io error").into();

        match error {
            CoactorError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let error: CoactorError = json_err.into();

        match error {
            CoactorError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
