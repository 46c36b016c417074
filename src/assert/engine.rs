// Equality assertions reported through a test context

use super::message::{failure_message, render};
use crate::codec::Decoder;
use crate::config::{Config, OutputConfig};
use crate::error::ExpectError;
use crate::state::Reporter;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::{debug, error, warn};

/// Assertion result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Pass,
    Fail {
        message: String,
        expected: String,
        actual: String,
    },
}

impl AssertionResult {
    pub fn fail_with_diff(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::Fail {
            message: message.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Which outcome of the equality check an assertion wants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Equal,
    NotEqual,
}

/// Compare two values under a policy without reporting anything.
///
/// Equality is `PartialEq`: structural, order-sensitive for sequences and
/// exact for floats (no tolerance, `NaN` never equals itself).
pub fn compare<T, U>(
    actual: &T,
    expected: &U,
    policy: Policy,
    options: &OutputConfig,
) -> AssertionResult
where
    T: PartialEq<U> + Debug + ?Sized,
    U: Debug + ?Sized,
{
    let equal = actual == expected;

    match (policy, equal) {
        (Policy::Equal, true) | (Policy::NotEqual, false) => AssertionResult::Pass,
        (Policy::Equal, false) => AssertionResult::fail_with_diff(
            "values are not equal",
            render(expected, options),
            render(actual, options),
        ),
        (Policy::NotEqual, true) => AssertionResult::fail_with_diff(
            "values are equal",
            render(expected, options),
            render(actual, options),
        ),
    }
}

fn report<R>(ctx: &mut R, result: AssertionResult, options: &OutputConfig)
where
    R: Reporter + ?Sized,
{
    match result {
        AssertionResult::Pass => debug!("assertion passed"),
        AssertionResult::Fail {
            message,
            expected,
            actual,
        } => {
            warn!("{}", message);
            ctx.error(&failure_message(&message, &expected, &actual, options));
        }
    }
}

fn check<R, T, U>(ctx: &mut R, actual: &T, expected: &U, policy: Policy)
where
    R: Reporter + ?Sized,
    T: PartialEq<U> + Debug + ?Sized,
    U: Debug + ?Sized,
{
    let options = &Config::global().output;
    let result = compare(actual, expected, policy, options);
    report(ctx, result, options);
}

/// Fail `ctx` (and keep going) unless `actual` equals `expected`.
pub fn equal<R, T, U>(ctx: &mut R, actual: &T, expected: &U)
where
    R: Reporter + ?Sized,
    T: PartialEq<U> + Debug + ?Sized,
    U: Debug + ?Sized,
{
    check(ctx, actual, expected, Policy::Equal);
}

/// Fail `ctx` (and keep going) if `actual` equals `expected`.
pub fn not_equal<R, T, U>(ctx: &mut R, actual: &T, expected: &U)
where
    R: Reporter + ?Sized,
    T: PartialEq<U> + Debug + ?Sized,
    U: Debug + ?Sized,
{
    check(ctx, actual, expected, Policy::NotEqual);
}

fn decode_actual<R, D, T>(ctx: &mut R, decoder: &mut D) -> Result<T, ExpectError>
where
    R: Reporter + ?Sized,
    D: Decoder + ?Sized,
    T: DeserializeOwned,
{
    decoder.decode::<T>().map_err(|e| {
        error!("failed to decode actual value: {}", e);
        let err = ExpectError::from(e);
        ctx.fatal(&err.to_string());
        err
    })
}

/// Decode one value from `decoder` and apply [`equal`] against `expected`.
///
/// A decode failure is fatal: `ctx` is marked with [`Reporter::fail_now`]
/// and the error is returned so the test can stop with `?`. A mismatch is
/// not an error and yields `Ok(())`.
pub fn stream_equal<R, D, T>(ctx: &mut R, mut decoder: D, expected: &T) -> Result<(), ExpectError>
where
    R: Reporter + ?Sized,
    D: Decoder,
    T: DeserializeOwned + PartialEq + Debug,
{
    let actual: T = decode_actual(ctx, &mut decoder)?;
    check(ctx, &actual, expected, Policy::Equal);
    Ok(())
}

/// Decode one value from `decoder` and apply [`not_equal`] against `expected`.
///
/// Decode failures are handled as in [`stream_equal`].
pub fn stream_not_equal<R, D, T>(
    ctx: &mut R,
    mut decoder: D,
    expected: &T,
) -> Result<(), ExpectError>
where
    R: Reporter + ?Sized,
    D: Decoder,
    T: DeserializeOwned + PartialEq + Debug,
{
    let actual: T = decode_actual(ctx, &mut decoder)?;
    check(ctx, &actual, expected, Policy::NotEqual);
    Ok(())
}
