//! Runtime identity of a Rust type.
//!
//! [`TypeInfo`] pairs a [`TypeId`] with the type's name and a precomputed
//! [`TypeHash`]. Identity is the `TypeId`: [`std::any::type_name`] is not
//! unique (two items declared in sibling blocks, or two versions of one crate,
//! can report the same name), so names are only used for display and the hash
//! only for bucketing.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::TypeHash;

/// Identity, name and hash of a Rust type.
///
/// # Examples
///
/// ```
/// use zebra_core::TypeInfo;
///
/// let info = TypeInfo::of::<Vec<String>>();
/// assert_eq!(info.name(), "alloc::vec::Vec<alloc::string::String>");
/// assert_eq!(info.simple_name(), "Vec<String>");
/// assert_eq!(info, TypeInfo::of::<Vec<String>>());
/// ```
#[derive(Clone, Copy)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
    hash: TypeHash,
}

impl TypeInfo {
    /// Describe the type `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            hash: TypeHash::of::<T>(),
        }
    }

    /// The `TypeId` that decides equality.
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Fully-qualified type name, as reported by [`std::any::type_name`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Hash of [`name`](Self::name). Equal types always share it; distinct
    /// types with the same name do too.
    pub fn type_hash(&self) -> TypeHash {
        self.hash
    }

    /// Type name with every module path stripped.
    ///
    /// Generic arguments are kept and shortened the same way:
    /// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
    pub fn simple_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len());
        // Start of the path currently being written; a `::` discards the prefix written so far.
        let mut segment_start = 0;
        let mut chars = self.name.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                ':' if chars.peek() == Some(&':') => {
                    chars.next();
                    out.truncate(segment_start);
                }
                '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';' | '*' => {
                    out.push(ch);
                    segment_start = out.len();
                }
                _ => out.push(ch),
            }
        }

        out
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Consistent with `eq`: equal ids imply equal names.
        self.hash.hash(state);
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("name", &self.name)
            .field("hash", &self.hash)
            .finish()
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Customer;

    mod nested {
        pub struct Address;
    }

    #[test]
    fn name_is_fully_qualified() {
        let info = TypeInfo::of::<Customer>();
        assert_eq!(info.name(), "zebra_core::type_info::tests::Customer");
        assert_eq!(info.to_string(), info.name());
    }

    #[test]
    fn identity_follows_type_id() {
        let info = TypeInfo::of::<Customer>();
        assert_eq!(info.type_id(), TypeId::of::<Customer>());
        assert_eq!(info.type_hash(), TypeHash::from_name(info.name()));
        assert_eq!(info, TypeInfo::of::<Customer>());
        assert_ne!(info, TypeInfo::of::<nested::Address>());
    }

    #[test]
    fn same_name_different_type() {
        let first = {
            struct Legacy;
            TypeInfo::of::<Legacy>()
        };
        let second = {
            struct Legacy;
            TypeInfo::of::<Legacy>()
        };

        assert_eq!(first.name(), second.name());
        assert_eq!(first.type_hash(), second.type_hash());
        assert_ne!(first, second);
    }

    #[test]
    fn simple_name_strips_paths() {
        assert_eq!(TypeInfo::of::<Customer>().simple_name(), "Customer");
        assert_eq!(TypeInfo::of::<nested::Address>().simple_name(), "Address");
        assert_eq!(TypeInfo::of::<String>().simple_name(), "String");
        assert_eq!(TypeInfo::of::<i32>().simple_name(), "i32");
    }

    #[test]
    fn simple_name_shortens_generic_arguments() {
        assert_eq!(
            TypeInfo::of::<Vec<Option<String>>>().simple_name(),
            "Vec<Option<String>>"
        );
        assert_eq!(
            TypeInfo::of::<(Customer, nested::Address)>().simple_name(),
            "(Customer, Address)"
        );
        assert_eq!(TypeInfo::of::<&'static str>().simple_name(), "&str");
    }
}
