//! Error Code - A domain-specific error value
//!
//! Defines [`ErrorCode`], the pairing of an error domain with one of its codes.

use std::error::Error;
use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::domain::ErrorDomain;
use crate::id::{CodeType, SupportDataType};

/// エラーコード
///
/// Holds a non-owning reference to the [`ErrorDomain`] it originated from,
/// the domain-specific code value, and optional vendor supplementary data.
///
/// ## Equality
/// Two codes are equal when their domains are equal and their values are
/// equal. Supplementary data is ignored.
///
/// ## Examples
/// ```rust
/// use error_kernel::domains::core_errc::{CoreErrc, core_error_domain};
/// use error_kernel::error::code::ErrorCode;
///
/// let code = ErrorCode::new(22, core_error_domain(), 0);
/// assert_eq!(code.message(), "Invalid argument");
/// assert_eq!(code, CoreErrc::InvalidArgument);
/// assert_eq!(code.to_string(), "[Core] Invalid argument (code 22)");
/// ```
#[derive(Clone, Copy)]
pub struct ErrorCode {
    value: CodeType,
    support_data: SupportDataType,
    domain: &'static dyn ErrorDomain,
}

impl ErrorCode {
    /// Create an error code in the given domain
    ///
    /// `value` must be a code defined by `domain`.
    #[inline]
    pub const fn new(
        value: CodeType,
        domain: &'static dyn ErrorDomain,
        support_data: SupportDataType,
    ) -> Self {
        Self {
            value,
            support_data,
            domain,
        }
    }

    /// Domain-specific code value
    #[inline]
    pub const fn value(&self) -> CodeType {
        self.value
    }

    /// Vendor-specific supplementary data
    #[inline]
    pub const fn support_data(&self) -> SupportDataType {
        self.support_data
    }

    /// The domain this code belongs to
    #[inline]
    pub const fn domain(&self) -> &'static dyn ErrorDomain {
        self.domain
    }

    /// Textual representation, as defined by the domain
    #[inline]
    pub fn message(&self) -> &'static str {
        self.domain.message(self.value)
    }

    /// Whether this code belongs to `domain`
    #[inline]
    pub fn is_domain(&self, domain: &dyn ErrorDomain) -> bool {
        self.domain == domain
    }

    /// Escalate this code through its domain. Never returns.
    pub fn throw_as_exception(&self) -> ! {
        self.domain.throw_as_exception(self)
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain && self.value == other.value
    }
}

impl Eq for ErrorCode {}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCode")
            .field("domain", &self.domain.name())
            .field("value", &self.value)
            .field("support_data", &self.support_data)
            .finish()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (code {})",
            self.domain.name(),
            self.message(),
            self.value
        )
    }
}

impl Error for ErrorCode {}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ErrorCode", 5)?;
        state.serialize_field("domain", self.domain.name())?;
        state.serialize_field("domain_id", &self.domain.id().get())?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("message", self.message())?;
        state.serialize_field("support_data", &self.support_data)?;
        state.end()
    }
}
