//! MapperRegistry - sealed mapper set and the conversion API.
//!
//! A [`MapperRegistry`] is produced by
//! [`MapperRegistryBuilder::build`](crate::MapperRegistryBuilder::build) and
//! never changes afterwards.
//!
//! # Resolution
//!
//! Mapping a value of type `S` into `T` by type pair looks up:
//!
//! 1. a mapper registered for `(S, T)`, run forward;
//! 2. otherwise a mapper registered for `(T, S)`, run backward;
//! 3. otherwise [`MapperError::NoMapper`], naming both keys.
//!
//! The `*_with` and `reverse_*` entry points skip the pair lookup and run the
//! mapper registered under a given mapper type.
//!
//! # Absent values
//!
//! Every entry point has an `_opt` form taking an `Option`; `None` maps to
//! `Ok(None)` without touching the registry, even when no mapper exists.
//!
//! # Thread Safety
//!
//! Mappers are `Send + Sync`, so the registry is too and may be shared behind
//! an `Arc`. Mapper bodies run on the calling thread, including nested calls
//! back into the registry.

use std::error::Error;

use rustc_hash::FxHashMap;

use zebra_core::{MapperError, MapperKey, Result, TypeInfo};

use crate::mapper::DynMapper;
use crate::{Mapper, MapperRegistration};

/// Read-only set of mappers, resolvable by type pair or by mapper type.
pub struct MapperRegistry {
    /// Mappers by (source, target) pair.
    mappers: FxHashMap<MapperKey, MapperRegistration>,

    /// Mapper type -> pair, for direct dispatch.
    by_mapper_type: FxHashMap<TypeInfo, MapperKey>,
}

impl MapperRegistry {
    pub(crate) fn new(mappers: FxHashMap<MapperKey, MapperRegistration>) -> Self {
        let by_mapper_type = mappers
            .iter()
            .map(|(pair, registration)| (registration.mapper_type(), *pair))
            .collect();

        Self {
            mappers,
            by_mapper_type,
        }
    }

    // ==========================================================================
    // Introspection
    // ==========================================================================

    /// Number of registered mappers.
    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    /// Check if no mapper is registered.
    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }

    /// Check if a mapper is registered for exactly the `(S, T)` pair.
    ///
    /// A mapper registered for `(T, S)` does not count, even though
    /// [`map`](Self::map) can use it backwards.
    pub fn contains<S: 'static, T: 'static>(&self) -> bool {
        self.mappers.contains_key(&MapperKey::of::<S, T>())
    }

    /// Keys of all registered mappers, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = MapperKey> + '_ {
        self.mappers.values().map(MapperRegistration::key)
    }

    // ==========================================================================
    // Mapping by type pair
    // ==========================================================================

    /// Map `source` into `T` with whichever mapper covers `(S, T)` or `(T, S)`.
    ///
    /// # Errors
    ///
    /// [`MapperError::NoMapper`] if neither direction is registered, or whatever
    /// the selected mapper returns.
    pub fn map<S: 'static, T: 'static>(&self, source: &S) -> Result<T> {
        let forward = MapperKey::of::<S, T>();
        if let Some(mapper) = self.lookup::<S, T>(&forward) {
            tracing::trace!(key = %forward, direction = "forward", "dispatching mapper");
            return mapper.forward(source, self);
        }

        let backward = forward.reversed();
        if let Some(mapper) = self.lookup::<T, S>(&backward) {
            tracing::trace!(key = %backward, direction = "backward", "dispatching mapper");
            return mapper.backward(source, self);
        }

        tracing::warn!(forward = %forward, backward = %backward, "no mapper defined");
        Err(MapperError::NoMapper { forward, backward })
    }

    /// [`map`](Self::map) for an optional source.
    pub fn map_opt<S: 'static, T: 'static>(&self, source: Option<&S>) -> Result<Option<T>> {
        source.map(|source| self.map(source)).transpose()
    }

    /// Map every element of `source`, keeping order.
    ///
    /// The first failing element aborts the whole call.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn map_list<S: 'static, T: 'static>(&self, source: &[S]) -> Result<Vec<T>> {
        let mut mapped = Vec::with_capacity(source.len());
        for item in source {
            mapped.push(self.map(item)?);
        }
        Ok(mapped)
    }

    /// [`map_list`](Self::map_list) for an optional slice.
    pub fn map_list_opt<S: 'static, T: 'static>(&self, source: Option<&[S]>) -> Result<Option<Vec<T>>> {
        source.map(|source| self.map_list(source)).transpose()
    }

    /// Map every element of `source` into a collection created by `factory`.
    ///
    /// `factory` receives `source.len()` as a capacity hint. Elements are
    /// added in source order; for sets and maps the collection's own rules
    /// then apply.
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use std::convert::Infallible;
    /// use zebra_registry::{Mapper, MapperRegistry, MapperRegistryBuilder};
    /// use zebra_core::Result;
    ///
    /// struct Shout;
    ///
    /// impl Mapper for Shout {
    ///     type Source = &'static str;
    ///     type Target = String;
    ///
    ///     fn map_forward(&self, s: &&'static str, _: &MapperRegistry) -> Result<String> {
    ///         Ok(s.to_uppercase())
    ///     }
    /// }
    ///
    /// let registry = MapperRegistryBuilder::new().register(Shout)?.build()?;
    /// let words: BTreeSet<String> =
    ///     registry.map_collection(&["b", "a", "b"], |_| Ok::<_, Infallible>(BTreeSet::new()))?;
    /// assert_eq!(words.into_iter().collect::<Vec<_>>(), ["A", "B"]);
    /// # Ok::<(), zebra_core::MapperError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`MapperError::CollectionInstantiation`] wrapping the factory's error,
    /// or the first element failure.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn map_collection<S, T, C, F, E>(&self, source: &[S], factory: F) -> Result<C>
    where
        S: 'static,
        T: 'static,
        C: Extend<T> + IntoIterator<Item = T>,
        F: FnOnce(usize) -> std::result::Result<C, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        let mut collection = factory(source.len())
            .map_err(|cause| MapperError::CollectionInstantiation { source: cause.into() })?;

        for item in source {
            collection.extend(std::iter::once(self.map::<S, T>(item)?));
        }
        Ok(collection)
    }

    /// [`map_collection`](Self::map_collection) for an optional slice.
    ///
    /// `factory` is not called when `source` is `None`.
    pub fn map_collection_opt<S, T, C, F, E>(&self, source: Option<&[S]>, factory: F) -> Result<Option<C>>
    where
        S: 'static,
        T: 'static,
        C: Extend<T> + IntoIterator<Item = T>,
        F: FnOnce(usize) -> std::result::Result<C, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        source
            .map(|source| self.map_collection::<S, T, C, F, E>(source, factory))
            .transpose()
    }

    // ==========================================================================
    // Mapping by mapper type
    // ==========================================================================

    /// Run the forward transform of the registered mapper of type `M`.
    ///
    /// # Errors
    ///
    /// [`MapperError::UnregisteredMapper`] if no `M` was registered.
    pub fn map_with<M: Mapper>(&self, source: &M::Source) -> Result<M::Target> {
        self.registered::<M>()?.forward(source, self)
    }

    /// [`map_with`](Self::map_with) for an optional source.
    pub fn map_with_opt<M: Mapper>(&self, source: Option<&M::Source>) -> Result<Option<M::Target>> {
        source.map(|source| self.map_with::<M>(source)).transpose()
    }

    /// [`map_with`](Self::map_with) over a slice, keeping order.
    pub fn map_list_with<M: Mapper>(&self, source: &[M::Source]) -> Result<Vec<M::Target>> {
        let mapper = self.registered::<M>()?;
        let mut mapped = Vec::with_capacity(source.len());
        for item in source {
            mapped.push(mapper.forward(item, self)?);
        }
        Ok(mapped)
    }

    /// [`map_list_with`](Self::map_list_with) for an optional slice.
    pub fn map_list_with_opt<M: Mapper>(&self, source: Option<&[M::Source]>) -> Result<Option<Vec<M::Target>>> {
        source.map(|source| self.map_list_with::<M>(source)).transpose()
    }

    /// Run the backward transform of the registered mapper of type `M`.
    ///
    /// # Errors
    ///
    /// [`MapperError::UnregisteredMapper`] if no `M` was registered, or
    /// [`MapperError::NotImplemented`] if `M` is one-way.
    pub fn reverse_map<M: Mapper>(&self, target: &M::Target) -> Result<M::Source> {
        self.registered::<M>()?.backward(target, self)
    }

    /// [`reverse_map`](Self::reverse_map) for an optional target.
    pub fn reverse_map_opt<M: Mapper>(&self, target: Option<&M::Target>) -> Result<Option<M::Source>> {
        target.map(|target| self.reverse_map::<M>(target)).transpose()
    }

    /// [`reverse_map`](Self::reverse_map) over a slice, keeping order.
    pub fn reverse_map_list<M: Mapper>(&self, target: &[M::Target]) -> Result<Vec<M::Source>> {
        let mapper = self.registered::<M>()?;
        let mut mapped = Vec::with_capacity(target.len());
        for item in target {
            mapped.push(mapper.backward(item, self)?);
        }
        Ok(mapped)
    }

    /// [`reverse_map_list`](Self::reverse_map_list) for an optional slice.
    pub fn reverse_map_list_opt<M: Mapper>(&self, target: Option<&[M::Target]>) -> Result<Option<Vec<M::Source>>> {
        target.map(|target| self.reverse_map_list::<M>(target)).transpose()
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    fn lookup<S: 'static, T: 'static>(&self, key: &MapperKey) -> Option<&dyn DynMapper<S, T>> {
        self.mappers
            .get(key)
            .and_then(MapperRegistration::as_dyn::<S, T>)
    }

    fn registered<M: Mapper>(&self) -> Result<&dyn DynMapper<M::Source, M::Target>> {
        let mapper_type = TypeInfo::of::<M>();
        self.by_mapper_type
            .get(&mapper_type)
            .and_then(|pair| self.mappers.get(pair))
            .and_then(MapperRegistration::as_dyn::<M::Source, M::Target>)
            .ok_or_else(|| {
                tracing::warn!(mapper = %mapper_type, "mapper not registered");
                MapperError::UnregisteredMapper(mapper_type.name().to_string())
            })
    }
}

impl std::fmt::Debug for MapperRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapperRegistry")
            .field("mappers", &self.mappers.values().collect::<Vec<_>>())
            .finish()
    }
}
