//! Deterministic hash-based type identity.
//!
//! This module provides [`TypeHash`], a 64-bit hash that identifies a Rust type
//! by its fully-qualified name, and the ordered pair hash used to key mappers.
//! Hashes are computed from names, so the same type always produces the same
//! hash in every process, and `(A, B)` and `(B, A)` produce different pair
//! hashes. Distinct types that share a name share a hash too; identity is
//! decided by [`TypeInfo`](crate::TypeInfo), and the hash only buckets.
//!
//! # Hash Computation
//!
//! Uses XXHash64 with domain-specific mixing constants so that a type hash and
//! a pair hash never coincide by construction.
//!
//! # Examples
//!
//! ```
//! use zebra_core::TypeHash;
//!
//! let user = TypeHash::from_name("app::model::User");
//! let dto = TypeHash::from_name("app::api::UserDto");
//! assert_eq!(user, TypeHash::from_name("app::model::User"));
//!
//! // Pair order matters
//! assert_ne!(TypeHash::from_pair(user, dto), TypeHash::from_pair(dto, user));
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
pub mod hash_constants {
    /// Separator constant used when folding several hashes together
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for type hashes
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;

    /// Domain marker for (source, target) pair hashes
    pub const PAIR: u64 = 0x5ea77ffbcdf5f302;

    /// Position marker for the source half of a pair
    pub const SOURCE: u64 = 0x9e3779b97f4a7c15;

    /// Position marker for the target half of a pair
    pub const TARGET: u64 = 0xbf58476d1ce4e5b9;
}

/// A deterministic 64-bit hash identifying a type or an ordered type pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Create a type hash from a fully-qualified type name.
    ///
    /// The same name always produces the same hash.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Create a type hash for the Rust type `T`.
    ///
    /// Based on [`std::any::type_name`], so it is equal to
    /// `TypeHash::from_name(std::any::type_name::<T>())`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::from_name(std::any::type_name::<T>())
    }

    /// Create the hash of an ordered `(source, target)` pair.
    ///
    /// Not commutative: swapping the arguments yields a different hash,
    /// except when both halves are the same type.
    ///
    /// ```
    /// use zebra_core::TypeHash;
    ///
    /// let a = TypeHash::from_name("A");
    /// let b = TypeHash::from_name("B");
    /// assert_ne!(TypeHash::from_pair(a, b), TypeHash::from_pair(b, a));
    /// assert_eq!(TypeHash::from_pair(a, a), TypeHash::from_pair(a, a));
    /// ```
    #[inline]
    pub fn from_pair(source: TypeHash, target: TypeHash) -> Self {
        let mut hash = hash_constants::PAIR;
        // wrapping_mul keeps the fold order-sensitive (XOR alone would commute)
        hash = hash
            .wrapping_mul(hash_constants::SEP)
            .wrapping_add(hash_constants::SOURCE ^ source.0);
        hash = hash
            .wrapping_mul(hash_constants::SEP)
            .wrapping_add(hash_constants::TARGET ^ target.0);
        TypeHash(hash)
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Invoice;
    struct InvoiceDto;

    #[test]
    fn type_hash_determinism() {
        let hash1 = TypeHash::from_name("billing::Invoice");
        let hash2 = TypeHash::from_name("billing::Invoice");
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn type_hash_uniqueness() {
        let invoice = TypeHash::from_name("billing::Invoice");
        let line = TypeHash::from_name("billing::InvoiceLine");
        let string = TypeHash::from_name("alloc::string::String");

        assert_ne!(invoice, line);
        assert_ne!(invoice, string);
        assert_ne!(line, string);
    }

    #[test]
    fn of_matches_type_name() {
        assert_eq!(
            TypeHash::of::<Invoice>(),
            TypeHash::from_name(std::any::type_name::<Invoice>())
        );
        assert_ne!(TypeHash::of::<Invoice>(), TypeHash::of::<InvoiceDto>());
    }

    #[test]
    fn pair_hash_order_matters() {
        let a = TypeHash::of::<Invoice>();
        let b = TypeHash::of::<InvoiceDto>();

        assert_ne!(TypeHash::from_pair(a, b), TypeHash::from_pair(b, a));
        assert_eq!(TypeHash::from_pair(a, b), TypeHash::from_pair(a, b));
    }

    #[test]
    fn pair_hash_differs_from_halves() {
        let a = TypeHash::of::<Invoice>();
        let b = TypeHash::of::<InvoiceDto>();
        let pair = TypeHash::from_pair(a, b);

        assert_ne!(pair, a);
        assert_ne!(pair, b);
    }

    #[test]
    fn same_type_pair() {
        let a = TypeHash::of::<Invoice>();
        assert_eq!(TypeHash::from_pair(a, a), TypeHash::from_pair(a, a));
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(TypeHash(0x2a).to_string(), "0x000000000000002a");
        assert_eq!(format!("{:?}", TypeHash(0x2a)), "TypeHash(0x000000000000002a)");
    }
}
