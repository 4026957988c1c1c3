//! Inspect Error Domain
//!
//! Error codes for the inspector's own configuration failures.

use error_kernel::error::exception;
use error_kernel::{CodeType, DomainId, ErrorCode, ErrorDomain, UNKNOWN_ERROR_MESSAGE};

/// Inspector error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum InspectErrc {
    /// Output format is neither `text` nor `json`
    InvalidFormat = 1,
    /// Boolean flag could not be parsed
    InvalidFlag = 2,
    /// Lookup code is not an unsigned 32-bit integer
    InvalidCode = 3,
}

impl InspectErrc {
    /// Every code of the domain, in ascending order
    pub const ALL: [InspectErrc; 3] = [Self::InvalidFormat, Self::InvalidFlag, Self::InvalidCode];

    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> CodeType {
        *self as CodeType
    }

    /// Get the message text for this code
    #[inline]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "Invalid output format",
            Self::InvalidFlag => "Invalid boolean flag",
            Self::InvalidCode => "Invalid lookup code",
        }
    }

    /// Create from numeric code value
    #[inline]
    pub const fn from_code(code: CodeType) -> Option<Self> {
        match code {
            1 => Some(Self::InvalidFormat),
            2 => Some(Self::InvalidFlag),
            3 => Some(Self::InvalidCode),
            _ => None,
        }
    }
}

impl From<InspectErrc> for ErrorCode {
    fn from(errc: InspectErrc) -> Self {
        ErrorCode::new(errc.code(), inspect_error_domain(), 0)
    }
}

impl PartialEq<InspectErrc> for ErrorCode {
    fn eq(&self, other: &InspectErrc) -> bool {
        self.is_domain(inspect_error_domain()) && self.value() == other.code()
    }
}

/// Error domain for [`InspectErrc`]
///
/// Only the process-wide instance behind [`inspect_error_domain`] exists.
pub struct InspectErrorDomain {
    id: DomainId,
}

impl InspectErrorDomain {
    /// Identifier of the inspector domain
    pub const ID: DomainId = DomainId::new(0x0000_0000_0000_1000);

    const fn new() -> Self {
        Self { id: Self::ID }
    }
}

impl ErrorDomain for InspectErrorDomain {
    fn id(&self) -> DomainId {
        self.id
    }

    fn name(&self) -> &str {
        "Inspect"
    }

    fn message(&self, code: CodeType) -> &str {
        InspectErrc::from_code(code).map_or(UNKNOWN_ERROR_MESSAGE, |errc| errc.message())
    }

    fn throw_as_exception(&self, error_code: &ErrorCode) -> ! {
        exception::escalate(*error_code)
    }
}

static INSPECT_ERROR_DOMAIN: InspectErrorDomain = InspectErrorDomain::new();

/// Get the process-wide inspector error domain
pub fn inspect_error_domain() -> &'static dyn ErrorDomain {
    &INSPECT_ERROR_DOMAIN
}
