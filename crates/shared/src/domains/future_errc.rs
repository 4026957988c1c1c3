//! Future Error Domain
//!
//! Error codes for shared-state handoff between a promise and its future.

use serde::Serialize;

use crate::error::code::ErrorCode;
use crate::error::domain::{ErrorDomain, UNKNOWN_ERROR_MESSAGE};
use crate::error::exception;
use crate::id::{CodeType, DomainId, SupportDataType};

/// Future エラーコードの列挙体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u32)]
pub enum FutureErrc {
    /// The asynchronous task abandoned its shared state
    BrokenPromise = 101,
    /// The contents of the shared state were already accessed
    FutureAlreadyRetrieved = 102,
    /// Attempt to store a value into the shared state twice
    PromiseAlreadySatisfied = 103,
    /// Attempt to access a promise or future without an associated state
    NoState = 104,
}

impl FutureErrc {
    /// Every code of the domain, in ascending order
    pub const ALL: [FutureErrc; 4] = [
        Self::BrokenPromise,
        Self::FutureAlreadyRetrieved,
        Self::PromiseAlreadySatisfied,
        Self::NoState,
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
            Self::BrokenPromise => "the asynchronous task abandoned its shared state",
            Self::FutureAlreadyRetrieved => "the contents of the shared state were already accessed",
            Self::PromiseAlreadySatisfied => "attempt to store a value into the shared state twice",
            Self::NoState => "no shared state associated with this object",
        }
    }

    /// Create from numeric code value
    #[inline]
    pub const fn from_code(code: CodeType) -> Option<Self> {
        match code {
            101 => Some(Self::BrokenPromise),
            102 => Some(Self::FutureAlreadyRetrieved),
            103 => Some(Self::PromiseAlreadySatisfied),
            104 => Some(Self::NoState),
            _ => None,
        }
    }

    /// Build an [`ErrorCode`] in the future domain with supplementary data
    #[inline]
    pub fn error_code(self, support_data: SupportDataType) -> ErrorCode {
        ErrorCode::new(self.code(), future_error_domain(), support_data)
    }
}

impl From<FutureErrc> for ErrorCode {
    fn from(errc: FutureErrc) -> Self {
        errc.error_code(0)
    }
}

impl PartialEq<FutureErrc> for ErrorCode {
    fn eq(&self, other: &FutureErrc) -> bool {
        self.is_domain(future_error_domain()) && self.value() == other.code()
    }
}

/// Error domain for [`FutureErrc`]
///
/// Only the process-wide instance behind [`future_error_domain`] exists.
pub struct FutureErrorDomain {
    id: DomainId,
}

impl FutureErrorDomain {
    /// Identifier of the future domain
    pub const ID: DomainId = DomainId::new(0x8000_0000_0000_0013);

    const fn new() -> Self {
        Self { id: Self::ID }
    }
}

impl ErrorDomain for FutureErrorDomain {
    fn id(&self) -> DomainId {
        self.id
    }

    fn name(&self) -> &str {
        "Future"
    }

    fn message(&self, code: CodeType) -> &str {
        FutureErrc::from_code(code).map_or(UNKNOWN_ERROR_MESSAGE, |errc| errc.message())
    }

    fn throw_as_exception(&self, error_code: &ErrorCode) -> ! {
        exception::escalate(*error_code)
    }
}

static FUTURE_ERROR_DOMAIN: FutureErrorDomain = FutureErrorDomain::new();

/// Get the process-wide future error domain
#[inline]
pub fn future_error_domain() -> &'static dyn ErrorDomain {
    &FUTURE_ERROR_DOMAIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::core_errc::{CoreErrorDomain, core_error_domain};

    const _: () = assert!(!FutureErrorDomain::ID.matches(CoreErrorDomain::ID));

    #[test]
    fn test_from_code() {
        for errc in FutureErrc::ALL {
            assert_eq!(FutureErrc::from_code(errc.code()), Some(errc));
        }
        assert_eq!(FutureErrc::from_code(100), None);
        assert_eq!(FutureErrc::from_code(105), None);
    }

    #[test]
    fn test_domain_messages() {
        let domain = future_error_domain();
        assert_eq!(domain.name(), "Future");
        assert_eq!(
            domain.message(101),
            "the asynchronous task abandoned its shared state"
        );
        assert_eq!(domain.message(22), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_distinct_from_core() {
        assert!(future_error_domain() != core_error_domain());
        assert_eq!(future_error_domain(), future_error_domain());
    }

    #[test]
    fn test_id_is_fixed() {
        let domain = future_error_domain();
        assert_eq!(domain.id(), FutureErrorDomain::ID);
        assert_eq!(domain.id(), domain.id());
    }

    #[test]
    fn test_error_code_support_data() {
        let code = FutureErrc::BrokenPromise.error_code(-1);
        assert_eq!(code.support_data(), -1);
        assert_eq!(code, FutureErrc::BrokenPromise);
    }
}
