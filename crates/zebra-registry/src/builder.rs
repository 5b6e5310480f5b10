//! Configuration-phase mapper collection.
//!
//! [`MapperRegistryBuilder`] accepts mappers until [`build`](MapperRegistryBuilder::build)
//! seals it into a [`MapperRegistry`]. The lifecycle is one way:
//!
//! ```text
//! Empty ──register──▶ Accepting ──build──▶ Sealed
//! ```
//!
//! Once sealed, the builder holds nothing and rejects both `register` and a
//! second `build`.

use rustc_hash::FxHashMap;

use zebra_core::{MapperError, MapperKey, Result};

use crate::{Mapper, MapperRegistration, MapperRegistry};

/// Collects mappers, at most one per ordered (source, target) pair.
#[derive(Default)]
pub struct MapperRegistryBuilder {
    /// Pending mappers by (source, target) pair.
    mappers: FxHashMap<MapperKey, MapperRegistration>,

    /// Whether `build` has run.
    is_built: bool,
}

impl MapperRegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with room for `capacity` mappers.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            mappers: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            is_built: false,
        }
    }

    /// Register a mapper under its `(Source, Target)` pair.
    ///
    /// The mapper is moved into the builder, so one mapper value can never
    /// serve two registries:
    ///
    /// ```compile_fail
    /// use zebra_registry::{Mapper, MapperRegistry, MapperRegistryBuilder};
    /// use zebra_core::Result;
    ///
    /// struct Shout;
    ///
    /// impl Mapper for Shout {
    ///     type Source = String;
    ///     type Target = String;
    ///
    ///     fn map_forward(&self, s: &String, _: &MapperRegistry) -> Result<String> {
    ///         Ok(s.to_uppercase())
    ///     }
    /// }
    ///
    /// let shout = Shout;
    /// let mut first = MapperRegistryBuilder::new();
    /// let mut second = MapperRegistryBuilder::new();
    /// first.register(shout)?;
    /// second.register(shout)?; // use of moved value
    /// # Ok::<(), zebra_core::MapperError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - [`MapperError::DuplicateMapper`] if the pair already has a mapper. The
    ///   builder stays usable for other pairs.
    /// - [`MapperError::RegistryClosed`] if the builder has been built.
    pub fn register<M: Mapper>(&mut self, mapper: M) -> Result<&mut Self> {
        self.insert(MapperRegistration::new(mapper))
    }

    /// Register every mapper in iteration order.
    ///
    /// Stops at the first failure; mappers registered before it stay registered.
    pub fn register_all<I>(&mut self, mappers: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = MapperRegistration>,
    {
        for registration in mappers {
            self.insert(registration)?;
        }
        Ok(self)
    }

    fn insert(&mut self, registration: MapperRegistration) -> Result<&mut Self> {
        let key = registration.key();

        if self.is_built {
            tracing::warn!(mapper = %registration.mapper_type(), key = %key, "registration after build rejected");
            return Err(MapperError::RegistryClosed);
        }

        if self.mappers.contains_key(&key) {
            tracing::warn!(mapper = %registration.mapper_type(), key = %key, "duplicate mapper rejected");
            return Err(MapperError::DuplicateMapper {
                source_name: key.source().simple_name(),
                target_name: key.target().simple_name(),
            });
        }

        tracing::debug!(mapper = %registration.mapper_type(), key = %key, "mapper registered");
        self.mappers.insert(key, registration);
        Ok(self)
    }

    /// Seal the builder into a [`MapperRegistry`].
    ///
    /// Moves every pending mapper into the registry and leaves the builder
    /// empty and permanently closed.
    ///
    /// # Errors
    ///
    /// Returns [`MapperError::AlreadyBuilt`] on the second call.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn build(&mut self) -> Result<MapperRegistry> {
        if self.is_built {
            return Err(MapperError::AlreadyBuilt);
        }

        let mappers = std::mem::take(&mut self.mappers);
        self.is_built = true;

        tracing::debug!(mappers = mappers.len(), "mapper registry built");
        Ok(MapperRegistry::new(mappers))
    }

    /// Check if the builder has been sealed.
    pub fn is_built(&self) -> bool {
        self.is_built
    }

    /// Number of pending mappers.
    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    /// Check if no mapper is pending.
    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }

    /// Check if a mapper is pending for the `(S, T)` pair.
    pub fn contains<S: 'static, T: 'static>(&self) -> bool {
        self.mappers.contains_key(&MapperKey::of::<S, T>())
    }
}

impl std::fmt::Debug for MapperRegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapperRegistryBuilder")
            .field("mappers", &self.mappers.len())
            .field("is_built", &self.is_built)
            .finish()
    }
}
