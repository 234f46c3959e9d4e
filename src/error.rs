//! Error types.

use crate::component::Part;
use core::any::TypeId;

/// An error occurred when accessing a URI part by an undefined name.
///
/// Raised by [`Uri::get`] and by parsing a [`Part`] from a string.
///
/// [`Uri::get`]: crate::Uri::get
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownFieldError {
    pub(crate) name: Box<str>,
}

impl UnknownFieldError {
    pub(crate) fn new(name: &str) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name that was requested.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::error::Error for UnknownFieldError {}

/// An error occurred when a value of the wrong shape was given
/// as the source of a URI.
///
/// Only the absence of a value, strings and [`Uri`]s are accepted.
///
/// [`Uri`]: crate::Uri
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InputTypeError {
    pub(crate) type_id: TypeId,
}

impl InputTypeError {
    /// Returns the [`TypeId`] of the value that was received.
    #[must_use]
    pub fn received_type_id(&self) -> TypeId {
        self.type_id
    }
}

impl std::error::Error for InputTypeError {}

/// An error occurred when the factory could not resolve a handler.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigurationError {
    /// No handler is registered under the name.
    UnknownHandler(Box<str>),
    /// The value configured for the handler does not satisfy the URI grammar.
    InvalidHandler {
        /// The name of the handler.
        name: Box<str>,
        /// Why the configured value was rejected.
        source: ValidationError,
    },
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigurationError::UnknownHandler(_) => None,
            ConfigurationError::InvalidHandler { source, .. } => Some(source),
        }
    }
}

/// An error occurred when making a URI with [`UriFactory`].
///
/// [`UriFactory`]: crate::factory::UriFactory
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FactoryError {
    /// The handler could not be resolved.
    Configuration(ConfigurationError),
    /// The source is of the wrong shape.
    InputType(InputTypeError),
}

impl From<ConfigurationError> for FactoryError {
    fn from(e: ConfigurationError) -> Self {
        FactoryError::Configuration(e)
    }
}

impl From<InputTypeError> for FactoryError {
    fn from(e: InputTypeError) -> Self {
        FactoryError::InputType(e)
    }
}

impl std::error::Error for FactoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FactoryError::Configuration(e) => Some(e),
            FactoryError::InputType(e) => Some(e),
        }
    }
}

/// Detailed cause of a [`ValidationError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationErrorKind {
    /// The host is neither an IP literal, an IPv4 address nor a registered name.
    InvalidHost,
    /// The port contains a character other than a digit.
    InvalidPort,
    /// The port is not within `1..=65535`.
    PortOutOfRange,
    /// The userinfo contains a character not allowed by the grammar.
    InvalidUserinfo,
}

/// An error occurred when validating the components of a URI.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValidationError {
    pub(crate) part: Part,
    pub(crate) kind: ValidationErrorKind,
}

impl ValidationError {
    /// Returns the part that failed validation.
    #[must_use]
    pub fn part(&self) -> Part {
        self.part
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }
}

impl std::error::Error for ValidationError {}
