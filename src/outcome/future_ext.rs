//! Chaining on futures that resolve to a [`ValueOutcome`].
//!
//! Without this trait an async pipeline reads inside-out:
//! `fetch().await.bind_async(parse).await.map(render)`. With it the chain
//! stays a single future until the final `.await`.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::prelude::*;
//!
//! async fn fetch(id: u32) -> ValueOutcome<u32> {
//!     ValueOutcome::success(id * 10)
//! }
//!
//! # futures::executor::block_on(async {
//! let outcome = fetch(4)
//!     .map_outcome(|amount| amount + 2)
//!     .bind_outcome_async(|amount| async move { ValueOutcome::success(amount.to_string()) })
//!     .await;
//! assert_eq!(outcome.value().map(String::as_str), Some("42"));
//! # });
//! ```

use std::future::Future;

use futures::FutureExt;

use super::ValueOutcome;

/// Extension methods for any future whose output is a [`ValueOutcome`].
///
/// Every method awaits the receiver first and then applies the matching
/// [`ValueOutcome`] combinator, so a failing outcome short-circuits the rest
/// of the chain.
pub trait OutcomeFutureExt<T>: Future<Output = ValueOutcome<T>> + Sized {
    /// Awaits the receiver, then applies [`ValueOutcome::bind`].
    fn bind_outcome<U, F>(self, function: F) -> impl Future<Output = ValueOutcome<U>>
    where
        F: FnOnce(T) -> ValueOutcome<U>,
    {
        self.map(move |outcome| outcome.bind(function))
    }

    /// Awaits the receiver, then applies [`ValueOutcome::map`].
    fn map_outcome<U, F>(self, function: F) -> impl Future<Output = ValueOutcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        self.map(move |outcome| outcome.map(function))
    }

    /// Awaits the receiver, then applies [`ValueOutcome::bind_async`].
    fn bind_outcome_async<U, F, Fut>(self, function: F) -> impl Future<Output = ValueOutcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ValueOutcome<U>>,
    {
        self.then(move |outcome| outcome.bind_async(function))
    }

    /// Awaits the receiver, then applies [`ValueOutcome::map_async`].
    fn map_outcome_async<U, F, Fut>(self, function: F) -> impl Future<Output = ValueOutcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        self.then(move |outcome| outcome.map_async(function))
    }
}

impl<T, Fut> OutcomeFutureExt<T> for Fut where Fut: Future<Output = ValueOutcome<T>> {}
