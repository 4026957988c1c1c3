//! Core Error Domain
//!
//! Error codes raised by the kernel's own building blocks, and the
//! [`CoreErrorDomain`] singleton that owns them.

use serde::Serialize;

use crate::error::code::ErrorCode;
use crate::error::domain::{ErrorDomain, UNKNOWN_ERROR_MESSAGE};
use crate::error::exception;
use crate::id::{CodeType, DomainId, SupportDataType};

/// Core エラーコードの列挙体
///
/// ## Examples
/// ```rust
/// use error_kernel::domains::core_errc::CoreErrc;
///
/// assert_eq!(CoreErrc::InvalidArgument.code(), 22);
/// assert_eq!(CoreErrc::from_code(138), Some(CoreErrc::InvalidMetaModelPath));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u32)]
pub enum CoreErrc {
    /// An invalid argument was passed to a function
    InvalidArgument = 22,
    /// Given string is not a valid model element shortname
    InvalidMetaModelShortname = 137,
    /// Missing or invalid path to model element
    InvalidMetaModelPath = 138,
}

impl CoreErrc {
    /// Every code of the domain, in ascending order
    pub const ALL: [CoreErrc; 3] = [
        Self::InvalidArgument,
        Self::InvalidMetaModelShortname,
        Self::InvalidMetaModelPath,
    ];

    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> CodeType {
        *self as CodeType
    }

    /// Get the message text for this code
    #[inline]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "Invalid argument",
            Self::InvalidMetaModelShortname => "Invalid meta model shortname",
            Self::InvalidMetaModelPath => "Invalid meta model path",
        }
    }

    /// Create from numeric code value
    #[inline]
    pub const fn from_code(code: CodeType) -> Option<Self> {
        match code {
            22 => Some(Self::InvalidArgument),
            137 => Some(Self::InvalidMetaModelShortname),
            138 => Some(Self::InvalidMetaModelPath),
            _ => None,
        }
    }

    /// Build an [`ErrorCode`] in the core domain with supplementary data
    #[inline]
    pub fn error_code(self, support_data: SupportDataType) -> ErrorCode {
        ErrorCode::new(self.code(), core_error_domain(), support_data)
    }
}

impl From<CoreErrc> for ErrorCode {
    fn from(errc: CoreErrc) -> Self {
        errc.error_code(0)
    }
}

impl PartialEq<CoreErrc> for ErrorCode {
    fn eq(&self, other: &CoreErrc) -> bool {
        self.is_domain(core_error_domain()) && self.value() == other.code()
    }
}

/// Error domain for [`CoreErrc`]
///
/// Only the process-wide instance behind [`core_error_domain`] exists.
pub struct CoreErrorDomain {
    id: DomainId,
}

impl CoreErrorDomain {
    /// Identifier of the core domain
    pub const ID: DomainId = DomainId::new(0x8000_0000_0000_0014);

    const fn new() -> Self {
        Self { id: Self::ID }
    }
}

impl ErrorDomain for CoreErrorDomain {
    fn id(&self) -> DomainId {
        self.id
    }

    fn name(&self) -> &str {
        "Core"
    }

    fn message(&self, code: CodeType) -> &str {
        CoreErrc::from_code(code).map_or(UNKNOWN_ERROR_MESSAGE, |errc| errc.message())
    }

    fn throw_as_exception(&self, error_code: &ErrorCode) -> ! {
        exception::escalate(*error_code)
    }
}

static CORE_ERROR_DOMAIN: CoreErrorDomain = CoreErrorDomain::new();

/// Get the process-wide core error domain
#[inline]
pub fn core_error_domain() -> &'static dyn ErrorDomain {
    &CORE_ERROR_DOMAIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(CoreErrc::InvalidArgument.code(), 22);
        assert_eq!(CoreErrc::InvalidMetaModelShortname.code(), 137);
        assert_eq!(CoreErrc::InvalidMetaModelPath.code(), 138);
    }

    #[test]
    fn test_from_code() {
        for errc in CoreErrc::ALL {
            assert_eq!(CoreErrc::from_code(errc.code()), Some(errc));
        }
        assert_eq!(CoreErrc::from_code(0), None);
        assert_eq!(CoreErrc::from_code(23), None);
    }

    #[test]
    fn test_domain_identity() {
        let domain = core_error_domain();
        assert_eq!(domain.id(), CoreErrorDomain::ID);
        assert_eq!(domain.name(), "Core");
        assert!(std::ptr::addr_eq(domain, core_error_domain()));
    }

    #[test]
    fn test_domain_messages() {
        let domain = core_error_domain();
        for errc in CoreErrc::ALL {
            assert_eq!(domain.message(errc.code()), errc.message());
        }
        assert_eq!(domain.message(9999), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_into_error_code() {
        let code: ErrorCode = CoreErrc::InvalidMetaModelShortname.into();
        assert_eq!(code.value(), 137);
        assert_eq!(code.support_data(), 0);
        assert_eq!(code, CoreErrc::InvalidMetaModelShortname);
        assert_ne!(code, CoreErrc::InvalidArgument);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&CoreErrc::InvalidMetaModelPath).unwrap();
        assert_eq!(json, "\"INVALID_META_MODEL_PATH\"");
    }
}
