// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, GcfgError>;

fn extra(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

/// The main error type for gcfg lexing, parsing and binding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GcfgError {
    /// Raised when a string literal is not closed.
    #[error("[GCFG] Unterminated string{}", extra(.hint, .code))]
    UnterminatedString {
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[GCFG] Malformed number '{literal}': {message}{}", extra(.hint, .code))]
    MalformedNumber {
        literal: String,
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[GCFG] Unexpected character '{character}'{}", extra(.hint, .code))]
    UnexpectedCharacter {
        character: char,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[GCFG] String literal is not valid UTF-8{}", extra(.hint, .code))]
    InvalidUtf8 {
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[GCFG] Syntax Error: {message}{}", extra(.hint, .code))]
    SyntaxError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when array elements don't share the first element's kind.
    #[error("[GCFG] Arrays must be of single type: expected {expected}, got {found}{}", extra(.hint, .code))]
    MixedArray {
        expected: String,
        found: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[GCFG] Type Error in field '{field}': expected {expected}, got {found}{}", extra(.hint, .code))]
    TypeMismatch {
        field: String,
        expected: String,
        found: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[GCFG] Value {value} out of range for {target} in field '{field}'{}", extra(.hint, .code))]
    OutOfRange {
        field: String,
        value: String,
        target: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[GCFG] Invalid integer '{value}' in field '{field}'{}", extra(.hint, .code))]
    InvalidInteger {
        field: String,
        value: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[GCFG] Field '{field}': nesting past {limit} level not allowed{}", extra(.hint, .code))]
    NestingTooDeep {
        field: String,
        limit: u32,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[GCFG] Field '{field}' has unsupported kind {kind}{}", extra(.hint, .code))]
    UnsupportedKind {
        field: String,
        kind: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[GCFG] Invalid path '{path}'{}", extra(.hint, .code))]
    InvalidPath {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[GCFG] Nothing found at '{path}'{}", extra(.hint, .code))]
    NotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[GCFG] File Error '{path}': {message}{}", extra(.hint, .code))]
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl GcfgError {
    pub(crate) fn syntax(message: impl Into<String>, hint: Option<&str>, code: u32) -> Self {
        GcfgError::SyntaxError {
            message: message.into(),
            hint: hint.map(Into::into),
            code: Some(code),
        }
    }

    pub(crate) fn type_mismatch(field: &str, expected: impl Into<String>, found: impl Into<String>) -> Self {
        GcfgError::TypeMismatch {
            field: field.to_string(),
            expected: expected.into(),
            found: found.into(),
            hint: None,
            code: Some(401),
        }
    }

    /// Numeric code of the error, grouped by stage: 1xx lexical, 2xx syntax,
    /// 3xx file, 4xx binding, 5xx path lookup.
    pub fn code(&self) -> Option<u32> {
        match self {
            GcfgError::UnterminatedString { code, .. }
            | GcfgError::MalformedNumber { code, .. }
            | GcfgError::UnexpectedCharacter { code, .. }
            | GcfgError::InvalidUtf8 { code, .. }
            | GcfgError::SyntaxError { code, .. }
            | GcfgError::MixedArray { code, .. }
            | GcfgError::TypeMismatch { code, .. }
            | GcfgError::OutOfRange { code, .. }
            | GcfgError::InvalidInteger { code, .. }
            | GcfgError::NestingTooDeep { code, .. }
            | GcfgError::UnsupportedKind { code, .. }
            | GcfgError::InvalidPath { code, .. }
            | GcfgError::NotFound { code, .. }
            | GcfgError::FileError { code, .. } => *code,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            GcfgError::UnterminatedString { hint, .. }
            | GcfgError::MalformedNumber { hint, .. }
            | GcfgError::UnexpectedCharacter { hint, .. }
            | GcfgError::InvalidUtf8 { hint, .. }
            | GcfgError::SyntaxError { hint, .. }
            | GcfgError::MixedArray { hint, .. }
            | GcfgError::TypeMismatch { hint, .. }
            | GcfgError::OutOfRange { hint, .. }
            | GcfgError::InvalidInteger { hint, .. }
            | GcfgError::NestingTooDeep { hint, .. }
            | GcfgError::UnsupportedKind { hint, .. }
            | GcfgError::InvalidPath { hint, .. }
            | GcfgError::NotFound { hint, .. }
            | GcfgError::FileError { hint, .. } => hint.as_deref(),
        }
    }

    /// True for errors raised while turning bytes into tokens.
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            GcfgError::UnterminatedString { .. }
                | GcfgError::MalformedNumber { .. }
                | GcfgError::UnexpectedCharacter { .. }
                | GcfgError::InvalidUtf8 { .. }
        )
    }
}
