use thiserror::Error;

pub type EstimateResult<T> = Result<T, EstimateError>;

#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Sheet write error: {0}")]
    Write(String),

    #[error("Formula parse error: {0}")]
    Parse(String),

    #[error("Formula evaluation error: {0}")]
    Eval(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<rust_xlsxwriter::XlsxError> for EstimateError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        EstimateError::Write(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_display() {
        let err = EstimateError::InvalidRequest("project name is empty".to_string());
        assert_eq!(err.to_string(), "Invalid request: project name is empty");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: EstimateError = io.into();
        assert!(matches!(err, EstimateError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: EstimateError = json_err.into();
        assert!(matches!(err, EstimateError::Json(_)));
    }
}
