//! Zebra registry crate.
//!
//! Mapper authoring, registration and dispatch:
//! - [`Mapper`]: a one-way or bidirectional conversion between two types
//! - [`MapperRegistryBuilder`]: collects mappers, one per (source, target) pair
//! - [`MapperRegistry`]: the sealed, read-only registry that resolves and runs them
//!
//! # Example
//!
//! ```
//! use zebra_registry::{Mapper, MapperRegistry, MapperRegistryBuilder};
//! use zebra_core::Result;
//!
//! struct Celsius(f64);
//! struct Fahrenheit(f64);
//!
//! struct TemperatureMapper;
//!
//! impl Mapper for TemperatureMapper {
//!     type Source = Celsius;
//!     type Target = Fahrenheit;
//!
//!     fn map_forward(&self, c: &Celsius, _: &MapperRegistry) -> Result<Fahrenheit> {
//!         Ok(Fahrenheit(c.0 * 9.0 / 5.0 + 32.0))
//!     }
//!
//!     fn map_backward(&self, f: &Fahrenheit, _: &MapperRegistry) -> Result<Celsius> {
//!         Ok(Celsius((f.0 - 32.0) * 5.0 / 9.0))
//!     }
//! }
//!
//! let registry = MapperRegistryBuilder::new()
//!     .register(TemperatureMapper)?
//!     .build()?;
//!
//! let boiling: Fahrenheit = registry.map(&Celsius(100.0))?;
//! assert_eq!(boiling.0, 212.0);
//!
//! let freezing: Celsius = registry.map(&Fahrenheit(32.0))?;
//! assert_eq!(freezing.0, 0.0);
//! # Ok::<(), zebra_core::MapperError>(())
//! ```

mod builder;
mod mapper;
mod registration;
mod registry;

pub use builder::MapperRegistryBuilder;
pub use mapper::Mapper;
pub use registration::MapperRegistration;
pub use registry::MapperRegistry;
