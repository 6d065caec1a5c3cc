// This file is part of Gear.
//
// Copyright (C) 2025 Gear Technologies Inc.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Fixed-interval polling of asynchronous conditions.
//!
//! The condition is awaited to completion before the next evaluation is
//! scheduled, so evaluations never overlap. Elapsed time is sampled after
//! each evaluation, which means a poll may overrun its deadline by up to
//! one evaluation plus one interval.

use crate::config::POLL_INTERVAL;
use std::{future::Future, time::Duration};
use tokio::time::{self, Instant};

/// Outcome of [`poll_until`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// The condition became `true` on the `attempts`-th evaluation.
    Satisfied { attempts: usize },
    /// The deadline passed after `attempts` evaluations returned `false`.
    TimedOut { attempts: usize },
}

impl PollOutcome {
    /// Whether the condition was met before the deadline.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied { .. })
    }

    /// Number of times the condition has been evaluated.
    pub fn attempts(&self) -> usize {
        match *self {
            Self::Satisfied { attempts } | Self::TimedOut { attempts } => attempts,
        }
    }
}

/// Polls `condition` every [`POLL_INTERVAL`] until it yields `true`.
///
/// Returns `false` once `timeout` has elapsed with the condition still
/// `false`; `None` polls without a deadline. The condition is always
/// evaluated at least once, even for a zero timeout, and its errors are
/// returned as is.
///
/// # Example
///
/// ```ignore
/// let accepted = pwsdk::check_until(
///     || async { Ok::<_, pwsdk::Error>(api.account_nonce(&account).await? == nonce + 1) },
///     Duration::from_secs(30),
/// )
/// .await?;
/// ```
pub async fn check_until<F, Fut, E>(
    condition: F,
    timeout: impl Into<Option<Duration>>,
) -> Result<bool, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    poll_until(condition, timeout)
        .await
        .map(|outcome| outcome.is_satisfied())
}

/// Same as [`check_until`], but reports how many evaluations were made.
pub async fn poll_until<F, Fut, E>(
    condition: F,
    timeout: impl Into<Option<Duration>>,
) -> Result<PollOutcome, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    poll_until_with(POLL_INTERVAL, condition, timeout).await
}

/// Polls `current` until it yields `expected`.
///
/// Only equality counts: a value moving past `expected` keeps the poll going.
pub(crate) async fn check_value_until<T, F, Fut, E>(
    expected: T,
    mut current: F,
    timeout: Option<Duration>,
) -> Result<bool, E>
where
    T: PartialEq,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let expected = &expected;

    check_until(
        || {
            let value = current();
            async move { Ok::<_, E>(value.await? == *expected) }
        },
        timeout,
    )
    .await
}

/// Same as [`poll_until`], with a custom fixed `interval` between evaluations.
pub async fn poll_until_with<F, Fut, E>(
    interval: Duration,
    mut condition: F,
    timeout: impl Into<Option<Duration>>,
) -> Result<PollOutcome, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    let timeout = timeout.into();
    let started = Instant::now();
    let mut attempts = 0;

    loop {
        attempts += 1;

        if condition().await? {
            return Ok(PollOutcome::Satisfied { attempts });
        }

        if let Some(timeout) = timeout {
            if started.elapsed() >= timeout {
                log::debug!("Condition still false after {attempts} attempts, giving up");
                return Ok(PollOutcome::TimedOut { attempts });
            }
        }

        time::sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        cell::{Cell, RefCell},
        convert::Infallible,
    };

    fn ready(value: bool) -> impl Future<Output = Result<bool, Infallible>> {
        async move { Ok(value) }
    }

    #[tokio::test(start_paused = true)]
    async fn never_true_times_out_after_deadline() {
        let started = Instant::now();
        let outcome = poll_until(|| ready(false), Duration::from_millis(1_000))
            .await
            .unwrap();

        assert!(!outcome.is_satisfied());
        assert!(started.elapsed() >= Duration::from_millis(1_000));
        assert!(started.elapsed() <= Duration::from_millis(1_000) + POLL_INTERVAL);
        // Evaluations at 0, 100, ..., 1000 ms.
        assert_eq!(outcome.attempts(), 11);
    }

    #[tokio::test(start_paused = true)]
    async fn true_on_first_evaluation_returns_immediately() {
        let started = Instant::now();
        let outcome = poll_until(|| ready(true), Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(outcome, PollOutcome::Satisfied { attempts: 1 });
        assert!(started.elapsed() < POLL_INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_timeout_still_evaluates_once() {
        let calls = Cell::new(0);
        let satisfied = check_until(
            || {
                calls.set(calls.get() + 1);
                ready(false)
            },
            Duration::ZERO,
        )
        .await
        .unwrap();

        assert!(!satisfied);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn true_on_kth_evaluation() {
        let calls = Cell::new(0);
        let started = Instant::now();
        let satisfied = check_until(
            || {
                calls.set(calls.get() + 1);
                ready(calls.get() == 4)
            },
            Duration::from_secs(1),
        )
        .await
        .unwrap();

        assert!(satisfied);
        assert_eq!(calls.get(), 4);
        assert!(started.elapsed() >= POLL_INTERVAL * 3);
        assert!(started.elapsed() < POLL_INTERVAL * 4);
    }

    #[tokio::test(start_paused = true)]
    async fn no_deadline_keeps_polling() {
        let calls = Cell::new(0);
        let satisfied = check_until(
            || {
                calls.set(calls.get() + 1);
                ready(calls.get() == 500)
            },
            None,
        )
        .await
        .unwrap();

        assert!(satisfied);
        assert_eq!(calls.get(), 500);
    }

    #[tokio::test(start_paused = true)]
    async fn condition_error_propagates() {
        let calls = Cell::new(0);
        let res = check_until(
            || {
                calls.set(calls.get() + 1);
                async { Err::<bool, _>("node went away") }
            },
            Duration::from_secs(1),
        )
        .await;

        assert_eq!(res, Err("node went away"));
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn value_reaches_expected() {
        let nonces = RefCell::new(vec![5, 5, 5, 6].into_iter());
        let started = Instant::now();
        let reached = check_value_until(
            6,
            || {
                let nonce = nonces.borrow_mut().next().unwrap_or(6);
                async move { Ok::<_, Infallible>(nonce) }
            },
            Some(Duration::from_secs(1)),
        )
        .await
        .unwrap();

        assert!(reached);
        assert!(started.elapsed() >= POLL_INTERVAL * 3);
        assert!(started.elapsed() < POLL_INTERVAL * 4);
    }

    #[tokio::test(start_paused = true)]
    async fn value_never_moves() {
        let started = Instant::now();
        let reached = check_value_until(
            6,
            || async { Ok::<_, Infallible>(5) },
            Some(Duration::from_millis(500)),
        )
        .await
        .unwrap();

        assert!(!reached);
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn value_past_expected_keeps_waiting() {
        let reached = check_value_until(
            6,
            || async { Ok::<_, Infallible>(7) },
            Some(Duration::from_millis(300)),
        )
        .await
        .unwrap();

        assert!(!reached);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_interval() {
        let started = Instant::now();
        let outcome = poll_until_with(
            Duration::from_millis(250),
            || ready(false),
            Duration::from_millis(500),
        )
        .await
        .unwrap();

        assert_eq!(outcome, PollOutcome::TimedOut { attempts: 3 });
        assert!(started.elapsed() >= Duration::from_millis(500));
        assert!(started.elapsed() < Duration::from_millis(750));
    }
}
