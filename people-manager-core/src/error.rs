//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

pub use people_manager_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No person is stored under the user name
    #[error("Person with username '{0}' not found.")]
    PersonNotFound(String),

    /// No person field has this name
    #[error("Property not found.")]
    FieldNotFound(String),

    /// The field exists but is not a text or nullable integer field
    #[error("Property update for this field is not supported.")]
    UnsupportedField(String),

    /// The new value was rejected (wrong kind, or refused by the service)
    #[error("{0}")]
    ValidationError(String),

    /// Data source error (converted from the provider layer)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether this is expected behavior (user input, missing person), used for log levels.
    ///
    /// `warn` when `true`, `error` when `false`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::PersonNotFound(_)
            | Self::FieldNotFound(_)
            | Self::UnsupportedField(_)
            | Self::ValidationError(_) => true,
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_not_found_message() {
        let err = CoreError::PersonNotFound("ghost".to_string());
        assert_eq!(err.to_string(), "Person with username 'ghost' not found.");
        assert!(err.is_expected());
    }

    #[test]
    fn field_messages() {
        assert_eq!(
            CoreError::FieldNotFound("Nope".to_string()).to_string(),
            "Property not found."
        );
        assert_eq!(
            CoreError::UnsupportedField("Emails".to_string()).to_string(),
            "Property update for this field is not supported."
        );
    }

    #[test]
    fn provider_errors_keep_their_classification() {
        let network: CoreError = ProviderError::NetworkError {
            detail: "refused".to_string(),
        }
        .into();
        assert!(!network.is_expected());
        assert_eq!(network.to_string(), "Network error: refused");
    }
}
