use crate::subscription::{SubscriptionId, SubscriptionSource};
use futures::stream::BoxStream;
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::IntervalStream;

/// A repeating timer emitting the current [`Instant`] every `interval`.
///
/// `id` distinguishes timers from one another; two `Every` values with the
/// same id are the same subscription as far as diffing is concerned.
///
/// ```rust,ignore
/// let sub = subscribe(Every::new(Duration::from_millis(16), "strip"))
///     .map(|_| Message::Tick);
/// ```
pub struct Every {
    /// The interval between ticks.
    pub interval: Duration,
    /// Identifier distinguishing this timer from others.
    pub id: &'static str,
}

impl Every {
    /// Create a new repeating timer.
    pub fn new(interval: Duration, id: &'static str) -> Self {
        Self { interval, id }
    }
}

impl SubscriptionSource for Every {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::with_str::<Self>(self.id)
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        let mut interval = tokio::time::interval(self.interval);
        // A stalled frame should not turn into a burst of catch-up ticks.
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Box::pin(IntervalStream::new(interval).map(|tick| tick.into_std()))
    }
}
