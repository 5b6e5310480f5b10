//! Ordered (source, target) type pair used to key registered mappers.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{TypeHash, TypeInfo};

/// Registry key of a mapper: the ordered pair of its source and target types.
///
/// Equality compares the two halves by [`TypeId`](std::any::TypeId), so
/// `MapperKey::of::<A, B>()` and `MapperKey::of::<B, A>()` are different keys
/// unless `A` and `B` are the same type. Hashing uses the precomputed pair
/// hash. The `Display` form is `{source}_{target}` with fully-qualified names
/// and only appears in error messages.
///
/// # Examples
///
/// ```
/// use zebra_core::MapperKey;
///
/// let key = MapperKey::of::<u8, String>();
/// assert_eq!(key.to_string(), "u8_alloc::string::String");
/// ```
#[derive(Clone, Copy)]
pub struct MapperKey {
    source: TypeInfo,
    target: TypeInfo,
    hash: TypeHash,
}

impl MapperKey {
    /// Key for mapping `source` into `target`.
    pub fn new(source: TypeInfo, target: TypeInfo) -> Self {
        Self {
            source,
            target,
            hash: TypeHash::from_pair(source.type_hash(), target.type_hash()),
        }
    }

    /// Key for mapping `S` into `T`.
    #[inline]
    pub fn of<S: ?Sized + 'static, T: ?Sized + 'static>() -> Self {
        Self::new(TypeInfo::of::<S>(), TypeInfo::of::<T>())
    }

    /// The type mapped from.
    pub fn source(&self) -> TypeInfo {
        self.source
    }

    /// The type mapped into.
    pub fn target(&self) -> TypeInfo {
        self.target
    }

    /// Order-sensitive hash of the two type names, used for bucketing.
    pub fn type_hash(&self) -> TypeHash {
        self.hash
    }

    /// The same pair in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self::new(self.target, self.source)
    }
}

impl PartialEq for MapperKey {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target
    }
}

impl Eq for MapperKey {}

impl Hash for MapperKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl fmt::Debug for MapperKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MapperKey({} -> {}, {})", self.source, self.target, self.hash)
    }
}

impl fmt::Display for MapperKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.source.name(), self.target.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Account;
    struct AccountView;

    #[test]
    fn key_is_deterministic() {
        assert_eq!(
            MapperKey::of::<Account, AccountView>(),
            MapperKey::of::<Account, AccountView>()
        );
        assert_eq!(
            MapperKey::of::<Account, AccountView>().type_hash(),
            TypeHash::from_pair(TypeHash::of::<Account>(), TypeHash::of::<AccountView>())
        );
    }

    #[test]
    fn direction_matters() {
        let forward = MapperKey::of::<Account, AccountView>();
        let backward = MapperKey::of::<AccountView, Account>();

        assert_ne!(forward, backward);
        assert_eq!(forward.reversed(), backward);
        assert_eq!(backward.reversed(), forward);
    }

    #[test]
    fn same_type_pair_is_its_own_reverse() {
        let key = MapperKey::of::<Account, Account>();
        assert_eq!(key, key.reversed());
    }

    #[test]
    fn same_named_halves_keep_direction() {
        let first = {
            struct Legacy;
            TypeInfo::of::<Legacy>()
        };
        let second = {
            struct Legacy;
            TypeInfo::of::<Legacy>()
        };
        let key = MapperKey::new(first, second);

        assert_eq!(key.to_string(), key.reversed().to_string());
        assert_eq!(key.type_hash(), key.reversed().type_hash());
        assert_ne!(key, key.reversed());
        assert_ne!(MapperKey::new(first, TypeInfo::of::<String>()), MapperKey::new(second, TypeInfo::of::<String>()));
    }

    #[test]
    fn display_joins_qualified_names() {
        let key = MapperKey::of::<Account, AccountView>();
        assert_eq!(
            key.to_string(),
            "zebra_core::mapper_key::tests::Account_zebra_core::mapper_key::tests::AccountView"
        );
    }

    #[test]
    fn halves_are_exposed() {
        let key = MapperKey::of::<Account, AccountView>();
        assert_eq!(key.source(), TypeInfo::of::<Account>());
        assert_eq!(key.target(), TypeInfo::of::<AccountView>());
    }
}
