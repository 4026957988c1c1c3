//! Error Domain - Identity and dispatch for a family of error codes
//!
//! Defines the [`ErrorDomain`] trait every concrete domain implements.

use std::fmt;

use super::code::ErrorCode;
use crate::id::{CodeType, DomainId};

/// Placeholder text for a code the domain does not define
pub const UNKNOWN_ERROR_MESSAGE: &str = "unknown error";

/// エラードメイン
///
/// The controlling entity for [`ErrorCode`] values: it owns their identity,
/// maps code values to text, and decides how a code is escalated.
///
/// ## Implementing a domain
/// * Exactly one instance per domain, held in a `static` for the whole process.
/// * Keep the constructor private and `const`; hand out `&'static dyn ErrorDomain`
///   from an accessor function. Do not implement `Clone` or `Copy`.
/// * The identifier must be unique among all domains in the process.
///   Duplicates are not detected.
/// * Runtime-initialized domains go in a `std::sync::LazyLock`.
///
/// ## Equality
/// `dyn ErrorDomain` values compare equal iff their [`id`](Self::id)s are equal.
/// Behaviour and name play no part.
///
/// ## Examples
/// ```rust
/// use error_kernel::error::{code::ErrorCode, domain::{ErrorDomain, UNKNOWN_ERROR_MESSAGE}, exception};
/// use error_kernel::id::{CodeType, DomainId};
///
/// struct GpioErrorDomain {
///     id: DomainId,
/// }
///
/// impl GpioErrorDomain {
///     const fn new() -> Self {
///         Self { id: DomainId::new(0x4750_494F) }
///     }
/// }
///
/// impl ErrorDomain for GpioErrorDomain {
///     fn id(&self) -> DomainId {
///         self.id
///     }
///
///     fn name(&self) -> &str {
///         "Gpio"
///     }
///
///     fn message(&self, code: CodeType) -> &str {
///         match code {
///             1 => "Pin already claimed",
///             _ => UNKNOWN_ERROR_MESSAGE,
///         }
///     }
///
///     fn throw_as_exception(&self, error_code: &ErrorCode) -> ! {
///         exception::escalate(*error_code)
///     }
/// }
///
/// static GPIO_ERROR_DOMAIN: GpioErrorDomain = GpioErrorDomain::new();
///
/// fn gpio_error_domain() -> &'static dyn ErrorDomain {
///     &GPIO_ERROR_DOMAIN
/// }
///
/// assert_eq!(gpio_error_domain().message(1), "Pin already claimed");
/// assert_eq!(gpio_error_domain(), gpio_error_domain());
/// ```
pub trait ErrorDomain: Send + Sync + 'static {
    /// Return the unique domain identifier
    ///
    /// Must return the same value on every call for the life of the process:
    /// store the identifier in an immutable field fixed at construction
    /// (typically a `const ID`) and return it. No locking, no computation.
    /// Equality between domains and between [`ErrorCode`]s is built on this
    /// value alone.
    fn id(&self) -> DomainId;

    /// Return the name of this error domain
    ///
    /// The text is owned by the domain and stays valid for its lifetime.
    fn name(&self) -> &str;

    /// Return a textual representation of the given error code
    ///
    /// Passing a code that did not originate from this domain is a violation.
    /// Implementations return [`UNKNOWN_ERROR_MESSAGE`] for codes they do not
    /// define instead of failing.
    fn message(&self, code: CodeType) -> &str;

    /// Escalate the given error code
    ///
    /// Unwinds with a payload appropriate to the domain that carries
    /// `error_code`. Never returns. `error_code.domain()` must be this domain.
    fn throw_as_exception(&self, error_code: &ErrorCode) -> !;
}

impl PartialEq for dyn ErrorDomain {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for dyn ErrorDomain {}

impl fmt::Debug for dyn ErrorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorDomain")
            .field("name", &self.name())
            .field("id", &self.id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::exception;

    struct TestDomain {
        id: DomainId,
        name: &'static str,
    }

    impl ErrorDomain for TestDomain {
        fn id(&self) -> DomainId {
            self.id
        }

        fn name(&self) -> &str {
            self.name
        }

        fn message(&self, code: CodeType) -> &str {
            match code {
                1 => "first",
                _ => UNKNOWN_ERROR_MESSAGE,
            }
        }

        fn throw_as_exception(&self, error_code: &ErrorCode) -> ! {
            exception::escalate(*error_code)
        }
    }

    static ALPHA: TestDomain = TestDomain {
        id: DomainId::new(1),
        name: "Alpha",
    };
    static BETA: TestDomain = TestDomain {
        id: DomainId::new(2),
        name: "Alpha",
    };
    static ALPHA_TWIN: TestDomain = TestDomain {
        id: DomainId::new(1),
        name: "Twin",
    };

    fn alpha() -> &'static dyn ErrorDomain {
        &ALPHA
    }

    fn beta() -> &'static dyn ErrorDomain {
        &BETA
    }

    #[test]
    fn test_reflexive_equality() {
        assert!(alpha() == alpha());
        assert!(!(alpha() != alpha()));
    }

    #[test]
    fn test_distinct_ids_never_equal() {
        // Same name and behaviour, different identity
        assert!(alpha() != beta());
        assert!(!(alpha() == beta()));
    }

    #[test]
    fn test_equality_is_by_id_only() {
        let twin: &dyn ErrorDomain = &ALPHA_TWIN;
        assert_eq!(alpha(), twin);
    }

    #[test]
    fn test_unknown_code_placeholder() {
        assert_eq!(alpha().message(1), "first");
        assert_eq!(alpha().message(9999), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_debug() {
        let rendered = format!("{:?}", alpha());
        assert!(rendered.contains("Alpha"));
        assert!(rendered.contains("0x0000000000000001"));
    }
}
