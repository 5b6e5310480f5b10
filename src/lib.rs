//! Zebra: a typed object-to-object mapper registry.
//!
//! Register one [`Mapper`] per (source, target) type pair, seal the builder,
//! then convert values by asking for the destination type. Mappers receive the
//! registry on every call and can map nested fields through it.
//!
//! # Example
//!
//! ```
//! use zebra::prelude::*;
//!
//! struct Person { name: String, age: u32 }
//! struct PersonDto { n: String, a: u32 }
//!
//! struct PersonMapper;
//!
//! impl Mapper for PersonMapper {
//!     type Source = Person;
//!     type Target = PersonDto;
//!
//!     fn map_forward(&self, p: &Person, _: &MapperRegistry) -> Result<PersonDto> {
//!         Ok(PersonDto { n: p.name.clone(), a: p.age })
//!     }
//! }
//!
//! let registry = MapperRegistryBuilder::new().register(PersonMapper)?.build()?;
//!
//! let dto: PersonDto = registry.map(&Person { name: "x".into(), age: 2 })?;
//! assert_eq!((dto.n.as_str(), dto.a), ("x", 2));
//! # Ok::<(), MapperError>(())
//! ```

pub use zebra_core::{ErrorKind, MapperError, MapperKey, Result, TypeHash, TypeInfo};
pub use zebra_registry::{Mapper, MapperRegistration, MapperRegistry, MapperRegistryBuilder};

/// Everything needed to write and use mappers.
pub mod prelude {
    pub use zebra_core::{ErrorKind, MapperError, Result};
    pub use zebra_registry::{Mapper, MapperRegistration, MapperRegistry, MapperRegistryBuilder};
}
