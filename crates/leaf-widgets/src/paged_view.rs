//! A complete paged view: swipeable pages, a page indicator, and
//! previous/next buttons kept in step by a [`PageSynchronizer`].
//!
//! The children never talk to each other. Each one reports what the user
//! did (a drag ended, a dot was clicked, a button was pressed), the view
//! hands that to the synchronizer, and the synchronizer pushes the
//! resulting page back out to all of them.
//!
//! ```rust,ignore
//! let mut pages = PagedView::new(vec![Text::raw("one"), Text::raw("two")])
//!     .with_title("Photos");
//! pages.focus();
//!
//! // In the parent's update:
//! AppMsg::Pages(paged_view::Message::PageChanged(page)) => { /* ... */ }
//! AppMsg::Pages(m) => self.pages.update(m).map(AppMsg::Pages),
//! ```

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use leaf_core::command::Command;
use leaf_core::component::Component;
use leaf_core::subscription::{subscribe, Subscription};
use leaf_core::subscriptions::Every;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Text;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::button::{self, NavButton, NavButtonStyle};
use crate::indicator::{self, IndicatorType, PageDots, PageDotsStyle};
use crate::strip::{self, PageStrip, StripConfig};
use crate::sync::{Collaborators, DragState, PageContainer, PageSynchronizer};

/// Messages for the paged view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A mouse event, routed to the strip, the indicator, and the buttons.
    Mouse(MouseEvent),
    /// A key press. Only handled while focused.
    Key(KeyEvent),
    /// Advance the scroll animation by one frame.
    Tick,
    /// Go to the next page, animated.
    Next,
    /// Go to the previous page, animated.
    Previous,
    /// Go to a page. Out-of-range pages are ignored.
    GoTo {
        /// Target page, zero-indexed.
        page: isize,
        /// Animate the scroll.
        animated: bool,
    },
    /// An external page indicator asked for a page; navigates there,
    /// animated, if it exists.
    IndicatorChanged(isize),
    /// Emitted when the current page changes, carrying the new page.
    PageChanged(usize),
}

/// Visual style for [`PagedView`].
#[derive(Debug, Clone)]
pub struct PagedViewStyle {
    pub border: Style,
    pub focused_border: Style,
}

impl Default for PagedViewStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::DarkGray),
            focused_border: Style::default().fg(Color::Cyan),
        }
    }
}

/// Horizontally paged content with an indicator and navigation buttons.
///
/// # Keys (while focused)
///
/// | Key | Action |
/// |-----|--------|
/// | `←` / `h` | Previous page |
/// | `→` / `l` | Next page |
/// | `Home` | First page |
/// | `End` | Last page |
///
/// The mouse works regardless of focus: drag or wheel the pages, click a
/// dot, or click a button.
pub struct PagedView {
    strip: PageStrip,
    dots: Option<PageDots>,
    prev: Option<NavButton>,
    next: Option<NavButton>,
    sync: PageSynchronizer,
    focus: bool,
    title: Option<String>,
    style: PagedViewStyle,
    tick_id: &'static str,
}

impl PagedView {
    /// Create a view over `pages`, on the first page, with dots and buttons.
    pub fn new(pages: Vec<Text<'static>>) -> Self {
        let total = pages.len();
        let mut view = Self {
            strip: PageStrip::new(pages),
            dots: Some(PageDots::new(total)),
            prev: Some(NavButton::new("‹ Prev")),
            next: Some(NavButton::new("Next ›")),
            sync: PageSynchronizer::new(),
            focus: false,
            title: None,
            style: PagedViewStyle::default(),
            tick_id: "leaf-paged-view",
        };
        view.sync_outputs();
        view
    }

    /// Drop the page indicator.
    pub fn without_indicator(mut self) -> Self {
        self.dots = None;
        self
    }

    /// Drop both navigation buttons.
    pub fn without_buttons(mut self) -> Self {
        self.prev = None;
        self.next = None;
        self
    }

    /// Draw the indicator as dots or as "2/5".
    pub fn with_indicator_type(mut self, kind: IndicatorType) -> Self {
        self.dots = self.dots.map(|dots| dots.with_type(kind));
        self
    }

    /// Style the indicator's dots and numbers.
    pub fn with_indicator_style(mut self, style: PageDotsStyle) -> Self {
        self.dots = self.dots.map(|dots| dots.with_style(style));
        self
    }

    /// Draw no indicator while there is only one page.
    pub fn hide_indicator_for_single_page(mut self, hide: bool) -> Self {
        self.dots = self.dots.map(|dots| dots.hide_for_single_page(hide));
        self
    }

    /// Replace the button labels. Has no effect after
    /// [`without_buttons`](Self::without_buttons).
    pub fn with_button_labels(mut self, prev: impl Into<String>, next: impl Into<String>) -> Self {
        self.prev = self.prev.map(|button| button.with_label(prev));
        self.next = self.next.map(|button| button.with_label(next));
        self
    }

    /// Style both navigation buttons.
    pub fn with_button_style(mut self, style: NavButtonStyle) -> Self {
        self.prev = self.prev.map(|button| button.with_style(style.clone()));
        self.next = self.next.map(|button| button.with_style(style));
        self
    }

    /// Set drag and animation tuning.
    pub fn with_config(mut self, config: StripConfig) -> Self {
        self.strip = self.strip.with_config(config);
        self
    }

    /// Text shown when there are no pages.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.strip = self.strip.with_placeholder(text);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_style(mut self, style: PagedViewStyle) -> Self {
        self.style = style;
        self
    }

    /// Identifier of the animation timer subscription. Give each view on
    /// screen its own.
    pub fn with_tick_id(mut self, id: &'static str) -> Self {
        self.tick_id = id;
        self
    }

    /// Replace the pages, keeping the current page when it still exists and
    /// moving to the last page otherwise.
    pub fn set_pages(&mut self, pages: Vec<Text<'static>>) {
        let total = pages.len();
        self.strip.set_pages(pages);
        if let Some(dots) = self.dots.as_mut() {
            dots.set_total(total);
        }
        let (sync, mut io) = self.parts();
        sync.reload(&mut io);
    }

    /// Navigate to `page`. Returns `false`, changing nothing, when it is out
    /// of range.
    pub fn go_to(&mut self, page: usize, animated: bool) -> bool {
        let Ok(page) = isize::try_from(page) else {
            return false;
        };
        let (sync, mut io) = self.parts();
        sync.set_current_page(&mut io, page, animated)
    }

    pub fn current_page(&self) -> usize {
        self.sync.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.strip.item_count()
    }

    pub fn drag_state(&self) -> DragState {
        self.sync.drag_state()
    }

    pub fn strip(&self) -> &PageStrip {
        &self.strip
    }

    pub fn indicator(&self) -> Option<&PageDots> {
        self.dots.as_ref()
    }

    pub fn prev_button(&self) -> Option<&NavButton> {
        self.prev.as_ref()
    }

    pub fn next_button(&self) -> Option<&NavButton> {
        self.next.as_ref()
    }

    pub fn focus(&mut self) {
        self.focus = true;
    }

    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Split borrows: the synchronizer plus everything it drives.
    fn parts(&mut self) -> (&mut PageSynchronizer, Collaborators<'_>) {
        let mut io = Collaborators::new(&mut self.strip);
        if let Some(dots) = self.dots.as_mut() {
            io = io.with_indicator(dots);
        }
        if let Some(next) = self.next.as_mut() {
            io = io.with_forward(next);
        }
        if let Some(prev) = self.prev.as_mut() {
            io = io.with_back(prev);
        }
        (&mut self.sync, io)
    }

    fn sync_outputs(&mut self) {
        let (sync, mut io) = self.parts();
        sync.sync_outputs(&mut io);
    }

    fn navigate(&mut self, delta: isize) {
        let (sync, mut io) = self.parts();
        sync.navigate_relative(&mut io, delta);
    }

    fn navigate_to(&mut self, page: isize, animated: bool) {
        let (sync, mut io) = self.parts();
        sync.set_current_page(&mut io, page, animated);
    }

    fn on_strip_event(&mut self, event: strip::Message) {
        let (sync, mut io) = self.parts();
        let settled = match event {
            strip::Message::DragEnded { will_decelerate } => {
                sync.on_drag_ended(&mut io, will_decelerate)
            }
            strip::Message::DecelerationEnded => sync.on_deceleration_ended(&mut io),
            strip::Message::Mouse(_) | strip::Message::Tick => Ok(None),
        };
        if let Err(err) = settled {
            tracing::warn!(%err, "scroll settled without a usable page");
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent) {
        if let Some(gesture) = self
            .strip
            .update(strip::Message::Mouse(event))
            .into_message()
        {
            self.on_strip_event(gesture);
        }

        let requested = self
            .dots
            .as_mut()
            .and_then(|dots| dots.update(indicator::Message::Mouse(event)).into_message());
        if let Some(indicator::Message::Changed(page)) = requested {
            let (sync, mut io) = self.parts();
            sync.on_indicator_changed(&mut io, page);
        }

        if pressed(self.prev.as_mut(), event) {
            self.navigate(-1);
        }
        if pressed(self.next.as_mut(), event) {
            self.navigate(1);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.navigate(-1),
            KeyCode::Right | KeyCode::Char('l') => self.navigate(1),
            KeyCode::Home => self.navigate_to(0, true),
            KeyCode::End => {
                let last = isize::try_from(self.page_count()).map_or(-1, |count| count - 1);
                self.navigate_to(last, true);
            }
            _ => {}
        }
    }
}

fn pressed(button: Option<&mut NavButton>, event: MouseEvent) -> bool {
    button.is_some_and(|button| {
        button.update(button::Message::Mouse(event)).into_message()
            == Some(button::Message::Triggered)
    })
}

impl Component for PagedView {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        let before = self.sync.current_page();
        match msg {
            Message::Mouse(event) => self.handle_mouse(event),
            Message::Key(key) if self.focus => self.handle_key(key),
            Message::Key(_) => {}
            Message::Tick => {
                if let Some(event) = self.strip.update(strip::Message::Tick).into_message() {
                    self.on_strip_event(event);
                }
            }
            Message::Next => self.navigate(1),
            Message::Previous => self.navigate(-1),
            Message::GoTo { page, animated } => self.navigate_to(page, animated),
            Message::IndicatorChanged(page) => {
                let (sync, mut io) = self.parts();
                sync.on_indicator_changed(&mut io, page);
            }
            Message::PageChanged(_) => {}
        }

        let after = self.sync.current_page();
        if after != before {
            Command::message(Message::PageChanged(after))
        } else {
            Command::none()
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let border = if self.focus {
            self.style.focused_border
        } else {
            self.style.border
        };
        let mut block = Block::bordered().border_style(border);
        if let Some(ref title) = self.title {
            block = block.title(title.as_str());
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let has_controls = self.dots.is_some() || self.prev.is_some() || self.next.is_some();
        if !has_controls {
            self.strip.view(frame, inner);
            return;
        }

        let [pages, controls] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        self.strip.view(frame, pages);

        let prev_width = self.prev.as_ref().map_or(0, NavButton::width);
        let next_width = self.next.as_ref().map_or(0, NavButton::width);
        let [left, middle, right] = Layout::horizontal([
            Constraint::Length(prev_width),
            Constraint::Min(0),
            Constraint::Length(next_width),
        ])
        .areas(controls);

        if let Some(ref prev) = self.prev {
            prev.view(frame, left);
        }
        if let Some(ref dots) = self.dots {
            dots.view(frame, middle);
        }
        if let Some(ref next) = self.next {
            next.view(frame, right);
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        if self.strip.is_animating() {
            let interval = self.strip.config().tick_interval;
            vec![subscribe(Every::new(interval, self.tick_id)).map(|_| Message::Tick)]
        } else {
            vec![]
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
