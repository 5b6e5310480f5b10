//! The mapper authoring contract.

use zebra_core::{MapperError, Result};

use crate::{MapperRegistration, MapperRegistry};

/// A conversion from [`Mapper::Source`] to [`Mapper::Target`], optionally reversible.
///
/// The pair of associated types is the mapper's registry key: a builder holds
/// at most one mapper per ordered (source, target) pair.
///
/// Both transforms receive the registry that dispatched them, so a mapper can
/// convert nested values through any other registered mapper:
///
/// ```
/// use zebra_registry::{Mapper, MapperRegistry, MapperRegistryBuilder};
/// use zebra_core::Result;
///
/// struct Line { sku: String }
/// struct LineDto { sku: String }
/// struct Order { lines: Vec<Line> }
/// struct OrderDto { lines: Vec<LineDto> }
///
/// struct LineMapper;
/// struct OrderMapper;
///
/// impl Mapper for LineMapper {
///     type Source = Line;
///     type Target = LineDto;
///
///     fn map_forward(&self, line: &Line, _: &MapperRegistry) -> Result<LineDto> {
///         Ok(LineDto { sku: line.sku.clone() })
///     }
/// }
///
/// impl Mapper for OrderMapper {
///     type Source = Order;
///     type Target = OrderDto;
///
///     fn map_forward(&self, order: &Order, registry: &MapperRegistry) -> Result<OrderDto> {
///         Ok(OrderDto { lines: registry.map_list(&order.lines)? })
///     }
/// }
///
/// let registry = MapperRegistryBuilder::new()
///     .register(LineMapper)?
///     .register(OrderMapper)?
///     .build()?;
///
/// let order = Order { lines: vec![Line { sku: "A-1".into() }] };
/// let dto: OrderDto = registry.map(&order)?;
/// assert_eq!(dto.lines[0].sku, "A-1");
/// # Ok::<(), zebra_core::MapperError>(())
/// ```
///
/// Mappers are shared by every thread that holds the registry, so they must be
/// `Send + Sync`:
///
/// ```compile_fail
/// use std::rc::Rc;
/// use zebra_registry::{Mapper, MapperRegistry};
/// use zebra_core::Result;
///
/// struct Prefix(Rc<str>);
///
/// impl Mapper for Prefix {
///     type Source = String;
///     type Target = String;
///
///     fn map_forward(&self, s: &String, _: &MapperRegistry) -> Result<String> {
///         Ok(format!("{}{s}", self.0))
///     }
/// }
/// ```
pub trait Mapper: Send + Sync + 'static {
    type Source: 'static;
    type Target: 'static;

    /// Convert a source value into the target type.
    fn map_forward(&self, source: &Self::Source, registry: &MapperRegistry) -> Result<Self::Target>;

    /// Convert a target value back into the source type.
    ///
    /// One-way mappers keep this default, which fails with
    /// [`MapperError::NotImplemented`].
    fn map_backward(&self, target: &Self::Target, registry: &MapperRegistry) -> Result<Self::Source> {
        let _ = (target, registry);
        Err(MapperError::NotImplemented)
    }

    /// Erase this mapper for [`MapperRegistryBuilder::register_all`](crate::MapperRegistryBuilder::register_all).
    fn into_registration(self) -> MapperRegistration
    where
        Self: Sized,
    {
        MapperRegistration::new(self)
    }
}

/// Object-safe view of a mapper over a fixed (source, target) pair.
///
/// The registry stores mappers behind this trait so that a lookup by pair
/// does not need to know the concrete mapper type.
pub(crate) trait DynMapper<S, T>: Send + Sync {
    fn forward(&self, source: &S, registry: &MapperRegistry) -> Result<T>;

    fn backward(&self, target: &T, registry: &MapperRegistry) -> Result<S>;
}

impl<M: Mapper> DynMapper<M::Source, M::Target> for M {
    #[inline]
    fn forward(&self, source: &M::Source, registry: &MapperRegistry) -> Result<M::Target> {
        self.map_forward(source, registry)
    }

    #[inline]
    fn backward(&self, target: &M::Target, registry: &MapperRegistry) -> Result<M::Source> {
        self.map_backward(target, registry)
    }
}
