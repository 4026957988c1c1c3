//! Identifier Types
//!
//! Numeric aliases shared by every error domain, and the [`DomainId`]
//! wrapper that gives a domain its identity.

use std::fmt;

/// Unique error domain identifier type
pub type IdType = u64;

/// Domain-specific error code value type
pub type CodeType = u32;

/// Vendor-specific supplementary data type
pub type SupportDataType = i32;

/// Identity of an error domain
///
/// Two domains are the same domain exactly when their `DomainId`s are equal.
/// All operations are `const` so identities can be compared at compile time.
///
/// Identifiers must be unique across every domain active in the process.
/// Nothing checks this; a duplicate makes two domains indistinguishable.
///
/// ## Examples
/// ```rust
/// use error_kernel::id::DomainId;
///
/// const A: DomainId = DomainId::new(100);
/// const B: DomainId = DomainId::new(200);
/// const _: () = assert!(!A.matches(B));
///
/// assert_eq!(A.get(), 100);
/// assert_eq!(A.to_string(), "0x0000000000000064");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainId(IdType);

impl DomainId {
    /// Create an identifier from its raw value
    #[inline]
    pub const fn new(id: IdType) -> Self {
        Self(id)
    }

    /// Get the raw identifier value
    #[inline]
    pub const fn get(self) -> IdType {
        self.0
    }

    /// Compare two identifiers in a const context
    #[inline]
    pub const fn matches(self, other: DomainId) -> bool {
        self.0 == other.0
    }
}

impl fmt::Debug for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DomainId({:#018x})", self.0)
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

impl From<IdType> for DomainId {
    fn from(id: IdType) -> Self {
        Self::new(id)
    }
}

impl From<DomainId> for IdType {
    fn from(id: DomainId) -> Self {
        id.0
    }
}
