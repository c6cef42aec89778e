//! Fixed-period probe loop: synthetic telemetry/obstacle request cycles used
//! to measure server responsiveness.

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::cancel::CancelToken;
use crate::client::Client;
use crate::error::{Error, Result};
use crate::telemetry::Telemetry;

/// Granularity of the end-of-cycle sleep. The sleep is sliced so a
/// cancellation is observed within one slice rather than after the full
/// remaining delay.
const SLEEP_SLICE: Duration = Duration::from_millis(50);

/// Counters reported when the probe loop ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProbeStats {
    /// Completed telemetry+obstacle cycles.
    pub cycles: u64,
}

/// Convert the CLI's fractional seconds into a probe period.
///
/// Zero is allowed and produces a hot loop; negative or non-finite values
/// are rejected.
pub fn period_from_secs(seconds: f64) -> Result<Duration> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(Error::InvalidProbePeriod { seconds });
    }
    Ok(Duration::from_secs_f64(seconds))
}

/// Run the probe loop until `cancel` is set or a request fails.
///
/// Each cycle posts one zeroed telemetry reading and fetches the obstacle
/// list, sequentially, then sleeps out the remainder of `period`. A cycle
/// slower than the period loops again immediately, so the loop can run
/// hotter than the configured cadence. Request errors propagate and end the
/// loop; there is no retry.
pub fn run_probe(client: &Client, period: Duration, cancel: &CancelToken) -> Result<ProbeStats> {
    let mut stats = ProbeStats::default();

    while !cancel.is_cancelled() {
        let started = Instant::now();

        client.post_telemetry(&Telemetry::zeroed())?;
        let obstacles = client.get_obstacles()?;

        let elapsed = started.elapsed();
        stats.cycles += 1;
        info!(
            cycle = stats.cycles,
            stationary = obstacles.stationary_obstacles.len(),
            moving = obstacles.moving_obstacles.len(),
            latency_s = elapsed.as_secs_f64(),
            "executed interop probe cycle"
        );

        let delay = period.saturating_sub(elapsed);
        if !delay.is_zero() {
            sleep_cancellable(delay, cancel);
        }
    }

    debug!(cycles = stats.cycles, "probe loop cancelled");
    Ok(stats)
}

/// Sleep for `delay`, waking early if the token is set.
fn sleep_cancellable(delay: Duration, cancel: &CancelToken) {
    let deadline = Instant::now() + delay;
    while !cancel.is_cancelled() {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return;
        }
        thread::sleep(remaining.min(SLEEP_SLICE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_accepts_zero_and_fractions() {
        assert_eq!(period_from_secs(0.0).expect("zero ok"), Duration::ZERO);
        assert_eq!(
            period_from_secs(1.5).expect("fraction ok"),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn period_rejects_negative_and_non_finite() {
        assert!(matches!(
            period_from_secs(-1.0),
            Err(Error::InvalidProbePeriod { .. })
        ));
        assert!(matches!(
            period_from_secs(f64::NAN),
            Err(Error::InvalidProbePeriod { .. })
        ));
        assert!(matches!(
            period_from_secs(f64::INFINITY),
            Err(Error::InvalidProbePeriod { .. })
        ));
    }

    #[test]
    fn sliced_sleep_runs_to_its_deadline_when_not_cancelled() {
        let cancel = CancelToken::new();
        let started = Instant::now();
        sleep_cancellable(Duration::from_millis(120), &cancel);
        assert!(started.elapsed() >= Duration::from_millis(120));
    }

    #[test]
    fn sliced_sleep_wakes_early_on_cancellation() {
        let cancel = CancelToken::new();
        let waker = cancel.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(100));
            waker.cancel();
        });

        let started = Instant::now();
        sleep_cancellable(Duration::from_secs(10), &cancel);
        let elapsed = started.elapsed();
        handle.join().expect("waker thread");

        assert!(
            elapsed < Duration::from_secs(2),
            "sleep should wake well before the 10s deadline, took {:?}",
            elapsed
        );
    }
}
