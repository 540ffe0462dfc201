// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given value in [`Ok`]. Saves writing `Ok(())` at the end of every function
/// that returns a [`crate::CommonResult`].
///
/// ```
/// use plugin_commons::{ok, CommonResult};
///
/// fn unit() -> CommonResult<()> { ok!() }
/// fn value() -> CommonResult<u8> { ok!(12) }
///
/// assert!(unit().is_ok());
/// assert_eq!(value().unwrap(), 12);
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Shorthand for [`pretty_assertions::assert_eq!`], which prints a colored diff when the
/// assertion fails. Only usable from code that has `pretty_assertions` available (ie,
/// tests).
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Assert that a [`crate::CommonResult`] is an error of the given
/// [`crate::CommonErrorType`].
///
/// ```
/// use plugin_commons::{assert_err_type, CommonErrorType, LoopAroundList};
///
/// let result = LoopAroundList::<u8>::new(0);
/// assert_err_type!(result, CommonErrorType::InvalidArguments);
/// ```
#[macro_export]
macro_rules! assert_err_type {
    ($result:expr, $error_type:expr $(,)?) => {
        match $result {
            Ok(_) => panic!("expected {:?}, got Ok", $error_type),
            Err(report) => assert_eq!(
                $crate::CommonError::type_of(&report),
                Some($error_type),
                "unexpected error: {:?}",
                report
            ),
        }
    };
}
