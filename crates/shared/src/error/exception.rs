//! Exception - Escalation of error codes
//!
//! An escalated [`ErrorCode`] travels up the stack as an unwinding panic whose
//! payload is an [`Exception`]. [`catch_exception`] turns it back into a value.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

use super::code::ErrorCode;

/// Escalated error code
///
/// The unwind payload produced by [`escalate`]. Carries the original
/// [`ErrorCode`] so the catch site sees the same domain and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{error_code}")]
pub struct Exception {
    error_code: ErrorCode,
}

impl Exception {
    /// Wrap an error code
    #[inline]
    pub const fn new(error_code: ErrorCode) -> Self {
        Self { error_code }
    }

    /// The escalated error code
    #[inline]
    pub const fn error(&self) -> &ErrorCode {
        &self.error_code
    }

    /// Unwrap the escalated error code
    #[inline]
    pub const fn into_error(self) -> ErrorCode {
        self.error_code
    }
}

impl From<ErrorCode> for Exception {
    fn from(error_code: ErrorCode) -> Self {
        Self::new(error_code)
    }
}

/// Unwind with an [`Exception`] carrying `error_code`
///
/// This is the escalation mechanism the built-in domains use from
/// [`ErrorDomain::throw_as_exception`](super::domain::ErrorDomain::throw_as_exception).
/// Domains that want it can call it from their own implementation too.
///
/// ## Examples
/// ```rust
/// use error_kernel::domains::core_errc::CoreErrc;
/// use error_kernel::error::exception::{catch_exception, escalate};
///
/// let caught = catch_exception(|| escalate(CoreErrc::InvalidArgument.into()));
/// assert_eq!(*caught.unwrap_err().error(), CoreErrc::InvalidArgument);
/// ```
pub fn escalate(error_code: ErrorCode) -> ! {
    let domain = error_code.domain();
    tracing::debug!(
        domain = domain.name(),
        domain_id = %domain.id(),
        code = error_code.value(),
        "Escalating error code"
    );
    panic::panic_any(Exception::new(error_code))
}

/// Run `f`, catching an escalated [`Exception`]
///
/// Returns `Err` with the exception if `f` escalated. Panics whose payload is
/// not an [`Exception`] are resumed unchanged.
pub fn catch_exception<F, R>(f: F) -> Result<R, Exception>
where
    F: FnOnce() -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Exception>() {
            Ok(exception) => Err(*exception),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

/// Route escalated [`Exception`]s to `tracing` instead of the default panic output
///
/// The hook runs before unwinding, so it cannot tell a caught escalation from
/// one that ends its thread. Every escalation is therefore reported at `warn`
/// with its domain, domain id, code and location. Panics with any other
/// payload still reach the previously installed hook.
/// Call once at startup, before escalation is used.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        match info.payload().downcast_ref::<Exception>() {
            Some(exception) => {
                let error_code = exception.error();
                tracing::warn!(
                    domain = error_code.domain().name(),
                    domain_id = %error_code.domain().id(),
                    code = error_code.value(),
                    location = ?info.location(),
                    "Error code escalated: {}",
                    error_code.message()
                );
            }
            None => previous(info),
        }
    }));
}
