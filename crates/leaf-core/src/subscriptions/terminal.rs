use crate::event::TerminalEvent;
use crate::subscription::{Subscription, SubscriptionId};
use crossterm::event::EventStream;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Marker type giving the terminal-event subscription its identity.
pub struct TerminalEvents;

/// Subscribe to terminal input, mapping each event through `map`.
///
/// Return `None` from `map` to drop an event. Only one terminal subscription
/// is ever live: every call shares the [`TerminalEvents`] id, so returning it
/// from `subscriptions()` on each update keeps the same reader running.
///
/// ```rust,ignore
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|event| match event {
///         TerminalEvent::Mouse(m) => Some(Msg::Pages(paged_view::Message::Mouse(m))),
///         TerminalEvent::Key(k) => Some(Msg::Key(k)),
///         TerminalEvent::Resize(..) => None,
///     })]
/// }
/// ```
pub fn terminal_events<Msg: Send + 'static>(
    map: impl Fn(TerminalEvent) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    let map = Arc::new(map);
    Subscription {
        id: SubscriptionId::of::<TerminalEvents>(),
        spawn: Box::new(move |tx: mpsc::UnboundedSender<Msg>| {
            // The EventStream is built inside the task. Creating it eagerly on
            // every subscriptions() call would poke crossterm's global reader
            // while the live stream is polling it.
            tokio::spawn(async move {
                let mut events = EventStream::new();
                while let Some(result) = events.next().await {
                    let Ok(event) = result else {
                        continue;
                    };
                    let Some(msg) = TerminalEvent::from_crossterm(event).and_then(|ev| map(ev))
                    else {
                        continue;
                    };
                    if tx.send(msg).is_err() {
                        break;
                    }
                }
            })
            .abort_handle()
        }),
    }
}
