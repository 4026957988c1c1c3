//! Result helpers - Outcome types carrying an [`ErrorCode`]
//!
//! Defines [`ErrorResult<T>`] and extension traits for working with it.

use super::code::ErrorCode;
use super::domain::ErrorDomain;

/// 結果型エイリアス
///
/// Either a value or exactly one [`ErrorCode`].
///
/// ## Examples
/// ```rust
/// use error_kernel::domains::core_errc::CoreErrc;
/// use error_kernel::error::result::ErrorResult;
///
/// fn parse_port(text: &str) -> ErrorResult<u16> {
///     text.parse().map_err(|_| CoreErrc::InvalidArgument.into())
/// }
///
/// assert_eq!(parse_port("8080"), Ok(8080));
/// assert_eq!(parse_port("http").unwrap_err(), CoreErrc::InvalidArgument);
/// ```
pub type ErrorResult<T> = Result<T, ErrorCode>;

/// Extension methods for [`ErrorResult<T>`]
pub trait ResultExt<T> {
    /// Return the value, or escalate the error through its domain
    fn value_or_throw(self) -> T;

    /// Whether this is an error belonging to `domain`
    fn is_error_of(&self, domain: &dyn ErrorDomain) -> bool;
}

impl<T> ResultExt<T> for ErrorResult<T> {
    fn value_or_throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error_code) => error_code.throw_as_exception(),
        }
    }

    fn is_error_of(&self, domain: &dyn ErrorDomain) -> bool {
        matches!(self, Err(error_code) if error_code.is_domain(domain))
    }
}

/// Replace any error with a fixed [`ErrorCode`]
pub trait MapErrorCode<T, E> {
    /// Discard the original error and substitute `error_code`
    fn map_error_code(self, error_code: impl Into<ErrorCode>) -> ErrorResult<T>;
}

impl<T, E> MapErrorCode<T, E> for Result<T, E> {
    fn map_error_code(self, error_code: impl Into<ErrorCode>) -> ErrorResult<T> {
        self.map_err(|_| error_code.into())
    }
}

/// `Option<T>` を `ErrorResult<T>` に変換するための拡張トレイト
pub trait OptionExt<T> {
    /// `None` の場合に `error_code` を返す
    fn ok_or_error_code(self, error_code: impl Into<ErrorCode>) -> ErrorResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_error_code(self, error_code: impl Into<ErrorCode>) -> ErrorResult<T> {
        self.ok_or_else(|| error_code.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::core_errc::{CoreErrc, core_error_domain};
    use crate::domains::future_errc::{FutureErrc, future_error_domain};
    use crate::error::exception::catch_exception;

    #[test]
    fn test_value_or_throw_ok() {
        let result: ErrorResult<u8> = Ok(7);
        assert_eq!(result.value_or_throw(), 7);
    }

    #[test]
    fn test_value_or_throw_escalates() {
        let result: ErrorResult<u8> = Err(FutureErrc::NoState.into());
        let exception = catch_exception(|| result.value_or_throw()).unwrap_err();
        assert_eq!(*exception.error(), FutureErrc::NoState);
    }

    #[test]
    fn test_is_error_of() {
        let ok: ErrorResult<()> = Ok(());
        let err: ErrorResult<()> = Err(CoreErrc::InvalidArgument.into());
        assert!(!ok.is_error_of(core_error_domain()));
        assert!(err.is_error_of(core_error_domain()));
        assert!(!err.is_error_of(future_error_domain()));
    }

    #[test]
    fn test_map_error_code() {
        let parsed: Result<u32, _> = "abc".parse::<u32>();
        let result = parsed.map_error_code(CoreErrc::InvalidArgument);
        assert_eq!(result.unwrap_err(), CoreErrc::InvalidArgument);
    }

    #[test]
    fn test_option_ext() {
        let none: Option<i32> = None;
        let result = none.ok_or_error_code(FutureErrc::NoState);
        assert_eq!(result.unwrap_err(), FutureErrc::NoState);

        let some: Option<i32> = Some(42);
        assert_eq!(some.ok_or_error_code(FutureErrc::NoState).unwrap(), 42);
    }
}
