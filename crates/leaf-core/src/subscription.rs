use futures::stream::BoxStream;
use futures::StreamExt;
use std::any::TypeId;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

type Spawner<Msg> = Box<dyn FnOnce(mpsc::UnboundedSender<Msg>) -> AbortHandle + Send>;

/// A long-lived event source that the runtime starts and stops for you.
///
/// A model lists the subscriptions it wants on every update; the runtime
/// keeps the ones whose [`SubscriptionId`] is still listed, starts new ones,
/// and aborts the rest. Registering a listener is therefore "return it from
/// `subscriptions()`", and tearing it down is "stop returning it".
pub struct Subscription<Msg: Send + 'static> {
    pub(crate) id: SubscriptionId,
    pub(crate) spawn: Spawner<Msg>,
}

/// Identity used to diff subscriptions between update cycles: a Rust type
/// plus a numeric discriminant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    type_id: TypeId,
    discriminant: u64,
}

impl SubscriptionId {
    /// Create an ID from a type and a numeric discriminant.
    pub fn new<T: 'static>(discriminant: u64) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            discriminant,
        }
    }

    /// Create an ID from a type alone (for singletons).
    pub fn of<T: 'static>() -> Self {
        Self::new::<T>(0)
    }

    /// Create an ID from a type and a string key.
    pub fn with_str<T: 'static>(key: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        Self::new::<T>(hasher.finish())
    }
}

/// A source of values that can back a [`Subscription`].
///
/// [`stream`](SubscriptionSource::stream) is called once when the
/// subscription starts; the stream is dropped when it is removed.
pub trait SubscriptionSource: Send + 'static {
    /// The type of values this source emits.
    type Output: Send + 'static;

    /// Identity of this subscription instance.
    fn id(&self) -> SubscriptionId;

    /// Create the stream of values.
    fn stream(self) -> BoxStream<'static, Self::Output>;
}

/// Turn a [`SubscriptionSource`] into a [`Subscription`].
pub fn subscribe<S: SubscriptionSource>(source: S) -> Subscription<S::Output> {
    let id = source.id();
    Subscription {
        id,
        spawn: Box::new(move |tx| forward(source.stream(), tx)),
    }
}

/// Drive `stream` on a task, pushing each item into `tx` until either side
/// goes away.
fn forward<Msg: Send + 'static>(
    mut stream: BoxStream<'static, Msg>,
    tx: mpsc::UnboundedSender<Msg>,
) -> AbortHandle {
    tokio::spawn(async move {
        while let Some(msg) = stream.next().await {
            if tx.send(msg).is_err() {
                break;
            }
        }
    })
    .abort_handle()
}

impl<Msg: Send + 'static> Subscription<Msg> {
    /// Build a subscription from a stream that already exists.
    pub fn from_stream(id: SubscriptionId, stream: BoxStream<'static, Msg>) -> Self {
        Subscription {
            id,
            spawn: Box::new(move |tx| forward(stream, tx)),
        }
    }

    /// The identity the runtime diffs on.
    pub fn id(&self) -> &SubscriptionId {
        &self.id
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Subscription<NewMsg> {
        let f = Arc::new(f);
        Subscription {
            id: self.id,
            spawn: Box::new(move |outer_tx: mpsc::UnboundedSender<NewMsg>| {
                let (inner_tx, mut inner_rx) = mpsc::unbounded_channel::<Msg>();
                let abort = (self.spawn)(inner_tx);
                // Ends on its own once the source is aborted and inner_tx drops.
                tokio::spawn(async move {
                    while let Some(msg) = inner_rx.recv().await {
                        if outer_tx.send(f(msg)).is_err() {
                            break;
                        }
                    }
                });
                abort
            }),
        }
    }
}

/// Running subscriptions keyed by id.
pub(crate) struct SubscriptionManager<Msg: Send + 'static> {
    active: HashMap<SubscriptionId, AbortHandle>,
    msg_tx: mpsc::UnboundedSender<Msg>,
}

impl<Msg: Send + 'static> SubscriptionManager<Msg> {
    pub fn new(msg_tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            active: HashMap::new(),
            msg_tx,
        }
    }

    /// Start what is new, abort what disappeared, leave the rest running.
    pub fn reconcile(&mut self, wanted: Vec<Subscription<Msg>>) {
        let mut wanted: HashMap<SubscriptionId, Subscription<Msg>> =
            wanted.into_iter().map(|sub| (sub.id.clone(), sub)).collect();

        self.active.retain(|id, handle| {
            let keep = wanted.remove(id).is_some();
            if !keep {
                tracing::trace!(?id, "stopping subscription");
                handle.abort();
            }
            keep
        });

        for (id, sub) in wanted {
            tracing::trace!(?id, "starting subscription");
            let handle = (sub.spawn)(self.msg_tx.clone());
            self.active.insert(id, handle);
        }
    }

    /// Abort everything.
    pub fn shutdown(&mut self) {
        for (_, handle) in self.active.drain() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tick;

    fn pending(id: SubscriptionId) -> Subscription<u8> {
        Subscription::from_stream(id, Box::pin(futures::stream::pending()))
    }

    #[test]
    fn ids_compare_by_type_and_discriminant() {
        assert_eq!(SubscriptionId::of::<Tick>(), SubscriptionId::of::<Tick>());
        assert_ne!(SubscriptionId::of::<Tick>(), SubscriptionId::of::<u8>());
        assert_ne!(SubscriptionId::new::<Tick>(1), SubscriptionId::new::<Tick>(2));
        assert_eq!(
            SubscriptionId::with_str::<Tick>("strip"),
            SubscriptionId::with_str::<Tick>("strip")
        );
        assert_ne!(
            SubscriptionId::with_str::<Tick>("strip"),
            SubscriptionId::with_str::<Tick>("dots")
        );
    }

    #[tokio::test]
    async fn reconcile_starts_keeps_and_stops() {
        let (tx, _rx) = mpsc::unbounded_channel::<u8>();
        let mut manager = SubscriptionManager::new(tx);

        manager.reconcile(vec![pending(SubscriptionId::of::<Tick>())]);
        assert_eq!(manager.active_count(), 1);

        manager.reconcile(vec![pending(SubscriptionId::of::<Tick>())]);
        assert_eq!(manager.active_count(), 1);

        manager.reconcile(vec![]);
        assert_eq!(manager.active_count(), 0);
    }

    #[tokio::test]
    async fn shutdown_aborts_all() {
        let (tx, _rx) = mpsc::unbounded_channel::<u8>();
        let mut manager = SubscriptionManager::new(tx);
        manager.reconcile(vec![
            pending(SubscriptionId::new::<Tick>(1)),
            pending(SubscriptionId::new::<Tick>(2)),
        ]);
        assert_eq!(manager.active_count(), 2);

        manager.shutdown();
        assert_eq!(manager.active_count(), 0);
    }

    #[tokio::test]
    async fn mapped_subscription_delivers_mapped_values() {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let mut manager = SubscriptionManager::new(tx);
        let sub = Subscription::from_stream(
            SubscriptionId::of::<Tick>(),
            Box::pin(futures::stream::iter(vec![1u8, 2])),
        )
        .map(|n| format!("tick {n}"));
        manager.reconcile(vec![sub]);

        assert_eq!(rx.recv().await.as_deref(), Some("tick 1"));
        assert_eq!(rx.recv().await.as_deref(), Some("tick 2"));
    }
}
