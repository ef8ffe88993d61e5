use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a [`Rect`] chosen by its parent.
///
/// Components have their own `Message` type. A parent wraps it in one of its
/// own variants and lifts the returned command with [`Command::map`]:
///
/// ```rust,ignore
/// enum AppMsg { Pages(paged_view::Message), Quit }
///
/// fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///     match msg {
///         AppMsg::Pages(m) => self.pages.update(m).map(AppMsg::Pages),
///         AppMsg::Quit => Command::quit(),
///     }
/// }
/// ```
///
/// Child subscriptions are collected the same way: the parent calls
/// [`subscriptions`](Component::subscriptions) and maps each entry with
/// [`Subscription::map`].
pub trait Component: Send + 'static {
    /// The component's message type.
    type Message: Send + 'static;

    /// Handle a message and return a command in the component's own message
    /// type.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area`. Implementations must stay inside it.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Subscriptions this component needs right now. Defaults to none.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether the component currently takes keyboard input.
    fn focused(&self) -> bool {
        false
    }
}
