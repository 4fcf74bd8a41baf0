//! Timers and locking for the selected async runtime.
//!
//! The bridge client needs three things from a runtime: a way to wait out the
//! write throttle, a deadline around each request, and a mutex that can be
//! held across an `.await`. Exactly one of `runtime-tokio` (default, with the
//! reqwest transport), `runtime-async-std` or `runtime-smol` must be enabled.
//!
//! ```toml
//! [dependencies]
//! hue-lights-rs = { version = "0.1", default-features = false, features = ["runtime-smol"] }
//! ```
//!
//! Without tokio there is no bundled HTTP client; pass your own
//! [`crate::Transport`] to [`crate::Bridge::with_transport`].

use std::fmt;
use std::future::Future;
use std::time::Duration;

pub use std::time::Instant;

#[cfg(feature = "runtime-tokio")]
pub use tokio::sync::Mutex;

#[cfg(feature = "runtime-async-std")]
pub use async_std::sync::Mutex;

#[cfg(feature = "runtime-smol")]
pub use async_lock::Mutex;

/// A request deadline passed before the bridge answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedOut;

impl fmt::Display for TimedOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("deadline elapsed")
    }
}

impl std::error::Error for TimedOut {}

pub async fn sleep(duration: Duration) {
    #[cfg(feature = "runtime-tokio")]
    tokio::time::sleep(duration).await;

    #[cfg(feature = "runtime-async-std")]
    async_std::task::sleep(duration).await;

    #[cfg(feature = "runtime-smol")]
    smol::Timer::after(duration).await;
}

/// Resolves to `Err(TimedOut)` if `future` is still pending after `duration`.
pub async fn timeout<F, T>(duration: Duration, future: F) -> Result<T, TimedOut>
where
    F: Future<Output = T>,
{
    #[cfg(feature = "runtime-tokio")]
    return tokio::time::timeout(duration, future)
        .await
        .map_err(|_| TimedOut);

    #[cfg(feature = "runtime-async-std")]
    return async_std::future::timeout(duration, future)
        .await
        .map_err(|_| TimedOut);

    #[cfg(feature = "runtime-smol")]
    {
        use futures::future::{Either, select};

        let deadline = smol::Timer::after(duration);
        futures::pin_mut!(future, deadline);
        match select(future, deadline).await {
            Either::Left((value, _)) => Ok(value),
            Either::Right(_) => Err(TimedOut),
        }
    }
}

#[cfg(not(any(
    feature = "runtime-tokio",
    feature = "runtime-async-std",
    feature = "runtime-smol"
)))]
compile_error!("enable one of the runtime-tokio, runtime-async-std or runtime-smol features");

#[cfg(any(
    all(feature = "runtime-tokio", feature = "runtime-async-std"),
    all(feature = "runtime-tokio", feature = "runtime-smol"),
    all(feature = "runtime-async-std", feature = "runtime-smol"),
))]
compile_error!("the runtime-* features are mutually exclusive");

#[cfg(all(test, feature = "runtime-tokio"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_timeout_expires() {
        let slow = sleep(Duration::from_millis(200));
        assert_eq!(timeout(Duration::from_millis(10), slow).await, Err(TimedOut));
    }

    #[tokio::test]
    async fn test_timeout_passes_value_through() {
        let fast = async { 7 };
        assert_eq!(timeout(Duration::from_secs(1), fast).await, Ok(7));
    }
}
