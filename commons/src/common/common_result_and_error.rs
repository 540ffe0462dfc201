// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`CommonError`] and any other type of error.
///
/// # Example
///
/// ```
/// use plugin_commons::{CommonResult, CommonError, CommonErrorType};
///
/// pub fn try_halve(value: u32) -> CommonResult<u32> {
///     if value % 2 != 0 {
///         let err_msg = format!("Can't halve an odd value: {value}");
///         return CommonError::new_error_result(CommonErrorType::InvalidArguments, &err_msg);
///     }
///     Ok(value / 2)
/// }
///
/// assert_eq!(try_halve(4).unwrap(), 2);
/// let report = try_halve(3).unwrap_err();
/// assert_eq!(CommonError::type_of(&report), Some(CommonErrorType::InvalidArguments));
/// ```
pub type CommonResult<T> = miette::Result<T>;

/// Common error struct. The [`CommonError::error_type`] is what callers match on, the
/// [`CommonError::error_message`] is for humans.
///
/// It is always wrapped in a [`miette::Report`] when returned from this crate. Use
/// [`CommonError::type_of`] to get the typed kind back out of a report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
#[error("{error_type:?}{}", format_message(.error_message.as_deref()))]
#[diagnostic(code(plugin_commons::common_error))]
pub struct CommonError {
    pub error_type: CommonErrorType,
    pub error_message: Option<String>,
}

/// Some common errors that can occur.
#[non_exhaustive]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommonErrorType {
    #[default]
    General,
    /// A constructor or call argument is outside of its valid domain.
    InvalidArguments,
    /// The operation is undefined given the current data, eg: modulo by a zero length.
    InvalidState,
    InvalidValue,
    IndexOutOfBounds,
    ParsingError,
    IOError,
    NotFound,
}

fn format_message(maybe_msg: Option<&str>) -> String {
    match maybe_msg {
        Some(msg) => format!(": {msg}"),
        None => String::new(),
    }
}

impl CommonError {
    /// Both [`CommonError::error_type`] and [`CommonError::error_message`] available.
    ///
    /// # Errors
    ///
    /// Always returns an error.
    pub fn new_error_result<T>(err_type: CommonErrorType, msg: &str) -> CommonResult<T> {
        Err(Self::new_report(err_type, Some(msg.to_string())))
    }

    /// Only [`CommonError::error_type`] available, and no
    /// [`CommonError::error_message`].
    ///
    /// # Errors
    ///
    /// Always returns an error.
    pub fn new_error_result_with_only_type<T>(
        err_type: CommonErrorType,
    ) -> CommonResult<T> {
        Err(Self::new_report(err_type, None))
    }

    /// Only [`CommonError::error_message`] available, and no
    /// [`CommonError::error_type`].
    ///
    /// # Errors
    ///
    /// Always returns an error.
    pub fn new_error_result_with_only_msg<T>(msg: &str) -> CommonResult<T> {
        Err(Self::new_report(
            CommonErrorType::default(),
            Some(msg.to_string()),
        ))
    }

    #[must_use]
    pub fn new_report(
        error_type: CommonErrorType,
        error_message: Option<String>,
    ) -> miette::Report {
        miette::Report::new(CommonError {
            error_type,
            error_message,
        })
    }

    /// Get the [`CommonErrorType`] back out of a report. Returns [None] if the report
    /// does not wrap a [`CommonError`].
    #[must_use]
    pub fn type_of(report: &miette::Report) -> Option<CommonErrorType> {
        report
            .downcast_ref::<CommonError>()
            .map(|common_error| common_error.error_type)
    }
}
