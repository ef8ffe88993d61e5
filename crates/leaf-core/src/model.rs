use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// The runtime drives an **init -> view -> update** cycle:
///
/// 1. [`init`](Model::init) builds the initial state and may return a
///    [`Command`] to run at startup.
/// 2. [`view`](Model::view) draws the current state into a [`ratatui::Frame`].
/// 3. Input arrives as messages through [`Subscription`]s.
/// 4. [`update`](Model::update) handles one message and may return a
///    [`Command`].
///
/// A paged application is typically a thin `Model` that owns a
/// [`PagedView`](../leaf_widgets/paged_view/struct.PagedView.html) component
/// and forwards terminal events to it.
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Startup data passed to [`Model::init`]. Use `()` when none is needed.
    type Flags: Send + 'static;

    /// Create the initial state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Handle one message, mutate state, and return follow-up work.
    ///
    /// After `update` returns the runtime redraws and re-collects
    /// [`subscriptions`](Model::subscriptions).
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state. Must not mutate observable state.
    fn view(&self, frame: &mut Frame);

    /// Declare the subscriptions that should be live for the current state.
    ///
    /// The runtime diffs the returned list against the running set by
    /// [`SubscriptionId`](crate::SubscriptionId): new ids are started, missing
    /// ids are aborted.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
