//! Zebra core crate.
//!
//! Type identity and error types shared by the mapper registry:
//! - [`TypeHash`]: deterministic 64-bit hash of a type name
//! - [`TypeInfo`]: fully-qualified Rust type name paired with its hash
//! - [`MapperKey`]: ordered (source, target) pair used as registry key
//! - [`MapperError`] and [`ErrorKind`]: the failure taxonomy
//!
//! # Example
//!
//! ```
//! use zebra_core::MapperKey;
//!
//! struct Order;
//! struct OrderDto;
//!
//! let forward = MapperKey::of::<Order, OrderDto>();
//! let backward = MapperKey::of::<OrderDto, Order>();
//! assert_ne!(forward, backward);
//! assert_eq!(forward, backward.reversed());
//! ```

pub mod error;
pub mod mapper_key;
pub mod type_hash;
pub mod type_info;

pub use error::{ErrorKind, MapperError, Result};
pub use mapper_key::MapperKey;
pub use type_hash::{TypeHash, hash_constants};
pub use type_info::TypeInfo;
