//! Asynchronous `bind` and `map` for both outcome shapes.
//!
//! Each combinator returns a future. On a successful receiver the future is
//! the continuation's own future; on a failing receiver the continuation is
//! never called and the future resolves immediately to the carried failure.

use std::future::Future;

use futures::FutureExt;
use futures::future::{self, Either};

use super::{UnitOutcome, ValueOutcome};

impl UnitOutcome {
    /// Awaits `function()` if this outcome succeeded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::prelude::*;
    ///
    /// # futures::executor::block_on(async {
    /// let outcome = UnitOutcome::success()
    ///     .bind_async(|| async { UnitOutcome::success() })
    ///     .await;
    /// assert!(outcome.is_success());
    /// # });
    /// ```
    pub fn bind_async<F, Fut>(self, function: F) -> impl Future<Output = Self>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        if self.is_success() {
            Either::Left(function())
        } else {
            Either::Right(future::ready(self))
        }
    }

    /// Awaits a value-producing `function()` if this outcome succeeded.
    pub fn bind_value_async<T, F, Fut>(self, function: F) -> impl Future<Output = ValueOutcome<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ValueOutcome<T>>,
    {
        match self.state {
            Ok(()) => Either::Left(function()),
            Err(failure) => Either::Right(future::ready(ValueOutcome::from_failure(failure))),
        }
    }

    /// Awaits a side-effecting `function()` if this outcome succeeded.
    pub fn map_async<F, Fut>(self, function: F) -> impl Future<Output = Self>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.is_success() {
            Either::Left(function().map(|()| Self::success()))
        } else {
            Either::Right(future::ready(self))
        }
    }

    /// Awaits `function()` and wraps its value if this outcome succeeded.
    pub fn map_value_async<T, F, Fut>(self, function: F) -> impl Future<Output = ValueOutcome<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self.state {
            Ok(()) => Either::Left(function().map(ValueOutcome::success)),
            Err(failure) => Either::Right(future::ready(ValueOutcome::from_failure(failure))),
        }
    }
}

impl<T> ValueOutcome<T> {
    /// Awaits `function(value)` if this outcome succeeded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::prelude::*;
    ///
    /// async fn lookup(id: u32) -> ValueOutcome<String> {
    ///     if id == 1 {
    ///         ValueOutcome::success("root".to_string())
    ///     } else {
    ///         ValueOutcome::failure_with(ErrorKind::NotFound, "UnknownUser", "no such user")
    ///     }
    /// }
    ///
    /// # futures::executor::block_on(async {
    /// let name = ValueOutcome::success(1).bind_async(lookup).await;
    /// assert_eq!(name.value().map(String::as_str), Some("root"));
    /// # });
    /// ```
    pub fn bind_async<U, F, Fut>(self, function: F) -> impl Future<Output = ValueOutcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ValueOutcome<U>>,
    {
        match self.state {
            Ok(value) => Either::Left(function(value)),
            Err(failure) => Either::Right(future::ready(ValueOutcome::from_failure(failure))),
        }
    }

    /// Awaits `function(value)` and wraps the result if this outcome succeeded.
    pub fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = ValueOutcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.state {
            Ok(value) => Either::Left(function(value).map(ValueOutcome::success)),
            Err(failure) => Either::Right(future::ready(ValueOutcome::from_failure(failure))),
        }
    }
}
