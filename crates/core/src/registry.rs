//! Namespaced type identifiers.
//!
//! Item and block types are addressed by `namespace:path` keys such as
//! `minecraft:chest` or `mypack:sort_rod`. Keys are validated on parse and
//! serialize as their display string so fixtures stay readable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Namespace assumed when a key omits one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Error returned when parsing an invalid [`RegistryKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryKeyError {
    /// The input was empty after trimming.
    #[error("registry key cannot be empty")]
    Empty,
    /// The namespace part was empty, too long or contained invalid characters.
    #[error("invalid registry key namespace `{0}` (allowed: a-z0-9_.-, max 64)")]
    Namespace(String),
    /// The path part was empty, too long or contained invalid characters.
    #[error("invalid registry key path `{0}` (allowed: a-z0-9_./-, max 128)")]
    Path(String),
}

/// A namespaced key of the form `namespace:path`.
///
/// Ordering is lexical by `(namespace, path)`, which is also the order the
/// sort engine uses for its alphabetical tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegistryKey {
    namespace: String,
    path: String,
}

impl RegistryKey {
    /// Parse a key, using [`DEFAULT_NAMESPACE`] when none is given.
    pub fn parse(input: &str) -> Result<Self, RegistryKeyError> {
        Self::parse_with_default_namespace(input, DEFAULT_NAMESPACE)
    }

    /// Parse a key using a caller-provided default namespace.
    pub fn parse_with_default_namespace(
        input: &str,
        default_namespace: &str,
    ) -> Result<Self, RegistryKeyError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(RegistryKeyError::Empty);
        }

        let (namespace, path) = input
            .split_once(':')
            .unwrap_or((default_namespace, input));

        validate_namespace(namespace)?;
        validate_path(path)?;

        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Build a key from parts that are known to be valid (constants, tests).
    ///
    /// # Panics
    ///
    /// Panics if either part fails validation.
    pub fn new(namespace: &str, path: &str) -> Self {
        match (validate_namespace(namespace), validate_path(path)) {
            (Ok(()), Ok(())) => Self {
                namespace: namespace.to_string(),
                path: path.to_string(),
            },
            (Err(err), _) | (_, Err(err)) => panic!("invalid registry key: {err}"),
        }
    }

    /// Shorthand for a key in the `minecraft` namespace.
    pub fn minecraft(path: &str) -> Self {
        Self::new(DEFAULT_NAMESPACE, path)
    }

    /// Key namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Key path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this key lives in the vanilla namespace.
    pub fn is_vanilla(&self) -> bool {
        self.namespace == DEFAULT_NAMESPACE
    }

    /// Client translation key under `category` (`item`, `tile`, `entity`).
    ///
    /// Vanilla keys drop their namespace: `minecraft:chest` becomes
    /// `tile.chest.name`.
    pub fn translation_key(&self, category: &str) -> String {
        if self.is_vanilla() {
            format!("{category}.{}.name", self.path)
        } else {
            format!("{category}.{self}.name")
        }
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for RegistryKey {
    type Err = RegistryKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RegistryKey {
    type Error = RegistryKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RegistryKey> for String {
    fn from(key: RegistryKey) -> Self {
        key.to_string()
    }
}

fn validate_namespace(ns: &str) -> Result<(), RegistryKeyError> {
    let valid = !ns.is_empty()
        && ns.len() <= 64
        && ns
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(RegistryKeyError::Namespace(ns.to_string()))
    }
}

fn validate_path(path: &str) -> Result<(), RegistryKeyError> {
    let valid = !path.is_empty()
        && path.len() <= 128
        && path
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.' | '/'));
    if valid {
        Ok(())
    } else {
        Err(RegistryKeyError::Path(path.to_string()))
    }
}
