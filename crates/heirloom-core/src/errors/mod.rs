// ABOUTME: Unified error handling for the Heirloom shopping-list engine
// ABOUTME: Defines ErrorCode ranges, AppError with context, and conversions from I/O and serde
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

//! # Unified Error Handling System
//!
//! The parsing and consolidation pipeline is total: it never returns errors.
//! Errors only appear at the edges, when recipes are loaded from files, when the
//! environment configuration is invalid, or when a caller asks the stateful
//! manager for a recipe that does not exist.

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Numeric input outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Recipe or pantry item not found
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Configuration value could not be parsed
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Reading or writing a file failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Serializing or deserializing data failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit code for command-line front ends (sysexits.h values)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            // EX_DATAERR
            Self::InvalidInput | Self::ValueOutOfRange | Self::SerializationError => 65,

            // EX_NOINPUT
            Self::ResourceNotFound => 66,

            // EX_IOERR
            Self::StorageError => 74,

            // EX_CONFIG
            Self::ConfigInvalid => 78,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Identifier of the recipe, pantry item, or file involved
    pub resource_id: Option<String>,
}

/// Unified error type for the workspace
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Exit code a command-line front end should use for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside the accepted range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        let code = if error.kind() == io::ErrorKind::NotFound {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::StorageError
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_exit_codes() {
        assert_eq!(ErrorCode::InvalidInput.exit_code(), 65);
        assert_eq!(ErrorCode::ResourceNotFound.exit_code(), 66);
        assert_eq!(ErrorCode::StorageError.exit_code(), 74);
        assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 78);
        assert_eq!(ErrorCode::ValueOutOfRange.exit_code(), 65);
    }

    #[test]
    fn test_app_error_creation() {
        let error =
            AppError::not_found("Recipe weeknight-chili").with_resource_id("weeknight-chili");

        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.message, "Recipe weeknight-chili not found");
        assert_eq!(
            error.context.resource_id.as_deref(),
            Some("weeknight-chili")
        );
    }

    #[test]
    fn test_error_display() {
        let error = AppError::invalid_input("servings must be positive");
        assert_eq!(
            error.to_string(),
            "The provided input is invalid: servings must be positive"
        );
    }

    #[test]
    fn test_io_not_found_maps_to_resource_not_found() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "recipes.json");
        let error = AppError::from(io_error);
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_other_io_errors_map_to_storage() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "recipes.json");
        let error = AppError::from(io_error);
        assert_eq!(error.code, ErrorCode::StorageError);
        assert_eq!(error.exit_code(), 74);
    }

    #[test]
    fn test_json_error_maps_to_serialization() {
        let Err(json_error) = serde_json::from_str::<serde_json::Value>("{ not json") else {
            panic!("malformed JSON should not parse");
        };
        let error = AppError::from(json_error);
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert_eq!(error.exit_code(), 65);
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ConfigInvalid).unwrap();
        assert_eq!(json, "\"CONFIG_INVALID\"");
    }
}
