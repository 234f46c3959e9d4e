//! Handler registry for making URIs.
//!
//! A [`UriFactory`] holds named *handlers*, which are prototype URIs that
//! a source is resolved against. The handler named [`CANONICAL`] is always
//! present and is the null URI, so making a URI from a source with it is
//! the same as parsing the source and removing its dot segments.
//!
//! # Examples
//!
//! ```
//! use refuri::{factory::UriFactory, Uri};
//!
//! let factory = UriFactory::new().register("api", Uri::parse("https://api.example.com/v1/"));
//!
//! let uri = factory.make(Some("api"), "users/42")?;
//! assert_eq!(uri.to_string(), "https://api.example.com/v1/users/42");
//!
//! let uri = factory.make(None, "http://a/b/../c")?;
//! assert_eq!(uri.to_string(), "http://a/c");
//! # Ok::<_, refuri::error::ConfigurationError>(())
//! ```

use crate::{
    error::{ConfigurationError, FactoryError},
    log::{debug, warning},
    Source, Uri,
};
use core::any::Any;
use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The name of the handler that is always registered: the null URI.
pub const CANONICAL: &str = "canonical";

/// A registry of named prototype URIs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UriFactory {
    handlers: IndexMap<String, Uri>,
    default_handler: String,
}

impl Default for UriFactory {
    fn default() -> Self {
        UriFactory::new()
    }
}

impl UriFactory {
    /// Creates a factory with only the [`CANONICAL`] handler, which is
    /// also the default.
    #[must_use]
    pub fn new() -> UriFactory {
        let mut handlers = IndexMap::new();
        handlers.insert(CANONICAL.to_owned(), Uri::default());
        UriFactory {
            handlers,
            default_handler: CANONICAL.to_owned(),
        }
    }

    /// Registers a handler, replacing any handler of the same name.
    #[must_use]
    pub fn register(mut self, name: impl Into<String>, prototype: Uri) -> UriFactory {
        let name = name.into();
        debug!("registering URI handler {name:?}");
        self.handlers.insert(name, prototype);
        self
    }

    /// Builds a factory from a configuration.
    ///
    /// Every configured base is parsed with its password discarded and
    /// checked with [`Uri::validate`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if a base fails validation or if the default handler
    /// is not registered.
    pub fn from_config(config: &FactoryConfig) -> Result<UriFactory, ConfigurationError> {
        let mut factory = UriFactory::new();
        for (name, base) in &config.handlers {
            let prototype = Uri::parse(base);
            if let Err(source) = prototype.validate() {
                warning!("rejecting URI handler {name:?}: {source}");
                return Err(ConfigurationError::InvalidHandler {
                    name: name.as_str().into(),
                    source,
                });
            }
            factory = factory.register(name.as_str(), prototype);
        }
        if let Some(name) = &config.default_handler {
            if !factory.handlers.contains_key(name) {
                warning!("default URI handler {name:?} is not registered");
                return Err(ConfigurationError::UnknownHandler(name.as_str().into()));
            }
            factory.default_handler = name.clone();
        }
        Ok(factory)
    }

    /// Returns the name of the default handler.
    #[must_use]
    pub fn default_handler(&self) -> &str {
        &self.default_handler
    }

    /// Returns the names of the registered handlers in registration order.
    pub fn handler_names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Returns a fresh copy of a handler, or of the default handler
    /// if `name` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no handler is registered under the name.
    pub fn handler(&self, name: Option<&str>) -> Result<Uri, ConfigurationError> {
        let name = name.unwrap_or(&self.default_handler);
        match self.handlers.get(name) {
            Some(prototype) => Ok(prototype.clone()),
            None => {
                warning!("no URI handler registered as {name:?}");
                Err(ConfigurationError::UnknownHandler(name.into()))
            }
        }
    }

    /// Makes a URI by resolving a source against a handler.
    ///
    /// An empty source returns the handler itself.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no handler is registered under the name.
    pub fn make<'a>(
        &self,
        handler: Option<&str>,
        source: impl Into<Source<'a>>,
    ) -> Result<Uri, ConfigurationError> {
        let base = self.handler(handler)?;
        Ok(match source.into() {
            Source::Empty => base,
            source => base.merge(source),
        })
    }

    /// Makes a URI from a type-erased source.
    ///
    /// The accepted types are those of [`Source::from_any`]. The handler is
    /// resolved before the source is inspected.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no handler is registered under the name
    /// or if the source is of an unsupported type.
    ///
    /// # Examples
    ///
    /// ```
    /// use refuri::{error::FactoryError, factory::UriFactory};
    ///
    /// let factory = UriFactory::new();
    ///
    /// assert_eq!(factory.make_any(None, &"/a/./b")?.path(), "/a/b");
    /// assert!(matches!(factory.make_any(None, &42), Err(FactoryError::InputType(_))));
    /// assert!(matches!(
    ///     factory.make_any(Some("nope"), &42),
    ///     Err(FactoryError::Configuration(_))
    /// ));
    /// # Ok::<_, FactoryError>(())
    /// ```
    pub fn make_any(&self, handler: Option<&str>, source: &dyn Any) -> Result<Uri, FactoryError> {
        let base = self.handler(handler)?;
        Ok(match Source::from_any(source)? {
            Source::Empty => base,
            source => base.merge(source),
        })
    }
}

/// Configuration of a [`UriFactory`].
///
/// With the `serde` feature, this can be read from any self-describing
/// format:
///
/// ```json
/// {
///     "default_handler": "api",
///     "handlers": { "api": "https://api.example.com/v1/" }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FactoryConfig {
    /// The handler used when none is named. Defaults to [`CANONICAL`].
    pub default_handler: Option<String>,
    /// Named base URIs.
    pub handlers: IndexMap<String, String>,
}
