//! Error Kernel - Domain-based error reporting core
//!
//! This crate contains the identity and dispatch backbone for error codes
//! that belong to independent subsystems ("domains"):
//! - [`ErrorDomain`](error::domain::ErrorDomain): identity, naming, message lookup, escalation
//! - [`ErrorCode`](error::code::ErrorCode): a code value paired with its domain
//! - Escalation via unwinding, and `Result` helpers
//! - The built-in core and future domains
//!
//! **Design Principle**: No global code enumeration. Each domain owns its code
//! space, and callers resolve text or escalate without knowing the concrete
//! domain type.

pub mod error {
    pub mod code;
    pub mod domain;
    pub mod exception;
    pub mod result;
}
pub mod domains {
    pub mod core_errc;
    pub mod future_errc;
}
pub mod id;

// Re-exports for convenience
pub use domains::core_errc::{CoreErrc, core_error_domain};
pub use domains::future_errc::{FutureErrc, future_error_domain};
pub use error::code::ErrorCode;
pub use error::domain::{ErrorDomain, UNKNOWN_ERROR_MESSAGE};
pub use error::exception::{Exception, catch_exception, escalate, install_panic_hook};
pub use error::result::{ErrorResult, MapErrorCode, OptionExt, ResultExt};
pub use id::{CodeType, DomainId, IdType, SupportDataType};
