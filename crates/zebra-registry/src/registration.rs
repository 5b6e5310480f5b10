use std::any::Any;
use std::fmt;

use zebra_core::{MapperKey, TypeInfo};

use crate::mapper::{DynMapper, Mapper};

/// A mapper erased behind its (source, target) key.
///
/// Produced by [`Mapper::into_registration`] so that mappers of different
/// types can be registered together with
/// [`MapperRegistryBuilder::register_all`](crate::MapperRegistryBuilder::register_all).
pub struct MapperRegistration {
    key: MapperKey,
    mapper_type: TypeInfo,
    /// Holds a `Box<dyn DynMapper<Source, Target>>`.
    mapper: Box<dyn Any + Send + Sync>,
}

impl MapperRegistration {
    pub fn new<M: Mapper>(mapper: M) -> Self {
        let erased: Box<dyn DynMapper<M::Source, M::Target>> = Box::new(mapper);
        Self {
            key: MapperKey::of::<M::Source, M::Target>(),
            mapper_type: TypeInfo::of::<M>(),
            mapper: Box::new(erased),
        }
    }

    /// The (source, target) pair this mapper is registered under.
    pub fn key(&self) -> MapperKey {
        self.key
    }

    /// The concrete mapper type, used for direct dispatch.
    pub fn mapper_type(&self) -> TypeInfo {
        self.mapper_type
    }

    /// Recover the mapper as a `DynMapper<S, T>`.
    ///
    /// Returns `None` if `(S, T)` is not the registered pair.
    pub(crate) fn as_dyn<S: 'static, T: 'static>(&self) -> Option<&dyn DynMapper<S, T>> {
        self.mapper
            .downcast_ref::<Box<dyn DynMapper<S, T>>>()
            .map(|mapper| mapper.as_ref())
    }
}

impl fmt::Debug for MapperRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperRegistration")
            .field("key", &self.key)
            .field("mapper_type", &self.mapper_type.name())
            .finish()
    }
}
