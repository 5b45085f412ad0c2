use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationInvalidArgument,
    ValidationInvalidPattern,

    SourceNotFound,
    EntryPointNotFound,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",
            ErrorCode::ValidationInvalidPattern => "validation.invalid_pattern",

            ErrorCode::SourceNotFound => "relocation.source_not_found",
            ErrorCode::EntryPointNotFound => "relocation.entry_point_not_found",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidPatternDetails {
    pub pattern: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathNotFoundDetails {
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
        });

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn invalid_pattern(pattern: impl Into<String>, err: regex::Error) -> Self {
        let details = to_details(InvalidPatternDetails {
            pattern: pattern.into(),
            error: err.to_string(),
        });

        Self::new(
            ErrorCode::ValidationInvalidPattern,
            "Invalid substitution pattern",
            details,
        )
    }

    /// Source file of a relocation is absent. Callers treat this as a skip.
    pub fn source_not_found(path: impl Into<String>) -> Self {
        let path = path.into();
        let details = to_details(PathNotFoundDetails { path: path.clone() });

        Self::new(
            ErrorCode::SourceNotFound,
            format!("Source file not found: {}", path),
            details,
        )
    }

    pub fn entry_point_not_found(path: impl Into<String>) -> Self {
        let path = path.into();
        let details = to_details(PathNotFoundDetails { path: path.clone() });

        Self::new(
            ErrorCode::EntryPointNotFound,
            format!("Entry point not found: {}", path),
            details,
        )
        .with_hint("Run relocator from the project root, or pass --root <DIR>")
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalIoErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalJsonErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }

    pub fn is_source_not_found(&self) -> bool {
        self.code == ErrorCode::SourceNotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_not_found_carries_path_in_details() {
        let err = Error::source_not_found("components/PayBills.tsx");
        assert_eq!(err.code.as_str(), "relocation.source_not_found");
        assert_eq!(err.details["path"], "components/PayBills.tsx");
        assert!(err.is_source_not_found());
    }

    #[test]
    fn entry_point_not_found_has_hint() {
        let err = Error::entry_point_not_found("App.tsx");
        assert_eq!(err.code, ErrorCode::EntryPointNotFound);
        assert_eq!(err.hints.len(), 1);
        assert!(!err.is_source_not_found());
    }

    #[test]
    fn internal_io_omits_missing_context() {
        let err = Error::internal_io("disk full", None);
        assert_eq!(err.details["error"], "disk full");
        assert!(err.details.get("context").is_none());
    }
}
