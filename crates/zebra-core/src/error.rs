//! Error types for mapper registration and dispatch.
//!
//! ## Error Hierarchy
//!
//! ```text
//! MapperError
//! ├── DuplicateMapper         - second mapper for the same (source, target) pair
//! ├── RegistryClosed          - register called after build
//! ├── AlreadyBuilt            - build called twice
//! ├── NoMapper                - no mapper in either direction
//! ├── UnregisteredMapper      - direct dispatch to a mapper type never registered
//! ├── NotImplemented          - backward mapping on a one-way mapper
//! ├── CollectionInstantiation - destination collection factory failed
//! └── Custom                  - failure reported by a mapper body
//! ```
//!
//! Messages are stable: callers and tests match on them, so they must not be
//! reworded.

use thiserror::Error;

use crate::MapperKey;

/// Result alias used throughout the mapper crates.
pub type Result<T, E = MapperError> = std::result::Result<T, E>;

/// Categories of mapper errors.
///
/// Lets callers branch on the kind of failure without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A mapper for the same ordered type pair was already registered.
    DuplicateRegistration,
    /// A lifecycle rule was broken or a required mapper/container is missing.
    IllegalState,
    /// No mapper exists for either direction of a type pair.
    UnresolvedMapping,
    /// The requested direction is not implemented by the mapper.
    UnsupportedOperation,
    /// The mapper body itself failed.
    Conversion,
}

impl ErrorKind {
    /// Returns a human-readable name for this error kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::DuplicateRegistration => "duplicate registration",
            ErrorKind::IllegalState => "illegal state",
            ErrorKind::UnresolvedMapping => "unresolved mapping",
            ErrorKind::UnsupportedOperation => "unsupported operation",
            ErrorKind::Conversion => "conversion failure",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while registering mappers or mapping values.
#[derive(Debug, Error)]
pub enum MapperError {
    /// A mapper for this ordered pair is already registered.
    #[error("A Mapper<{source_name}, {target_name}> is already registered.")]
    DuplicateMapper {
        /// Simple name of the source type.
        source_name: String,
        /// Simple name of the target type.
        target_name: String,
    },

    /// `register` was called on a builder that has already been built.
    #[error("mappers can't be registered after build.")]
    RegistryClosed,

    /// `build` was called a second time.
    #[error("build method can be called one time.")]
    AlreadyBuilt,

    /// Neither `forward` nor `backward` has a registered mapper.
    #[error("No mapper defined for [{forward}] or [{backward}]")]
    NoMapper {
        /// Key tried for a forward mapping.
        forward: MapperKey,
        /// Key tried for a backward mapping.
        backward: MapperKey,
    },

    /// Direct dispatch named a mapper type that is not registered.
    #[error("Mapper {0} is not registered.")]
    UnregisteredMapper(String),

    /// The mapper does not implement the backward direction.
    #[error("method not implemented.")]
    NotImplemented,

    /// The destination collection factory failed.
    #[error("destination collection can't be created: {source}")]
    CollectionInstantiation {
        /// The factory's own error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failure reported by a mapper body.
    #[error("{0}")]
    Custom(String),
}

impl MapperError {
    /// Build a [`MapperError::Custom`] from any displayable message.
    ///
    /// ```
    /// use zebra_core::{ErrorKind, MapperError};
    ///
    /// let err = MapperError::custom(format_args!("age {} out of range", -1));
    /// assert_eq!(err.kind(), ErrorKind::Conversion);
    /// assert_eq!(err.to_string(), "age -1 out of range");
    /// ```
    pub fn custom(message: impl std::fmt::Display) -> Self {
        MapperError::Custom(message.to_string())
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MapperError::DuplicateMapper { .. } => ErrorKind::DuplicateRegistration,
            MapperError::RegistryClosed
            | MapperError::AlreadyBuilt
            | MapperError::UnregisteredMapper(_)
            | MapperError::CollectionInstantiation { .. } => ErrorKind::IllegalState,
            MapperError::NoMapper { .. } => ErrorKind::UnresolvedMapping,
            MapperError::NotImplemented => ErrorKind::UnsupportedOperation,
            MapperError::Custom(_) => ErrorKind::Conversion,
        }
    }

    /// Check if this error is a broken lifecycle rule or missing mapper/container.
    pub fn is_illegal_state(&self) -> bool {
        self.kind() == ErrorKind::IllegalState
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    struct Order;
    struct OrderDto;

    #[test]
    fn duplicate_message() {
        let err = MapperError::DuplicateMapper {
            source_name: "Order".into(),
            target_name: "OrderDto".into(),
        };
        assert_eq!(err.to_string(), "A Mapper<Order, OrderDto> is already registered.");
        assert_eq!(err.kind(), ErrorKind::DuplicateRegistration);
    }

    #[test]
    fn lifecycle_messages() {
        assert_eq!(
            MapperError::AlreadyBuilt.to_string(),
            "build method can be called one time."
        );
        assert!(MapperError::AlreadyBuilt.is_illegal_state());
        assert!(MapperError::RegistryClosed.is_illegal_state());
    }

    #[test]
    fn no_mapper_names_both_keys() {
        let forward = MapperKey::of::<Order, OrderDto>();
        let err = MapperError::NoMapper {
            forward,
            backward: forward.reversed(),
        };
        let order = std::any::type_name::<Order>();
        let dto = std::any::type_name::<OrderDto>();

        assert_eq!(
            err.to_string(),
            format!("No mapper defined for [{order}_{dto}] or [{dto}_{order}]")
        );
        assert_eq!(err.kind(), ErrorKind::UnresolvedMapping);
    }

    #[test]
    fn not_implemented_message() {
        assert_eq!(MapperError::NotImplemented.to_string(), "method not implemented.");
        assert_eq!(
            MapperError::NotImplemented.kind(),
            ErrorKind::UnsupportedOperation
        );
    }

    #[test]
    fn collection_instantiation_keeps_cause() {
        let cause: Box<dyn std::error::Error + Send + Sync> = "capacity overflow".into();
        let err = MapperError::CollectionInstantiation { source: cause };

        assert!(err.is_illegal_state());
        assert_eq!(err.to_string(), "destination collection can't be created: capacity overflow");
        assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("capacity overflow"));
    }

    #[test]
    fn kind_names() {
        assert_eq!(ErrorKind::IllegalState.as_str(), "illegal state");
        assert_eq!(ErrorKind::Conversion.to_string(), "conversion failure");
    }
}
