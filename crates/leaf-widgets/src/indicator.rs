//! Page indicator showing dot-style or numeric pagination.

use std::cell::Cell;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use leaf_core::command::Command;
use leaf_core::component::Component;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::sync::PageIndicator;

/// How the indicator draws the page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorType {
    /// Render dots: ● for the current page, ○ for the rest.
    Dots,
    /// Render Arabic numerals: "2/5".
    Arabic,
}

/// Messages for the page indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A mouse event; left clicks inside the indicator request a page.
    Mouse(MouseEvent),
    /// Emitted when a click asks for a page. The request may be out of range
    /// (e.g. `-1` from the left half of "1/5"); validating it is up to the
    /// owner.
    Changed(isize),
}

/// Style configuration for the indicator.
#[derive(Debug, Clone)]
pub struct PageDotsStyle {
    /// Style for the current page's dot.
    pub active_dot: Style,
    /// Style for the other dots.
    pub inactive_dot: Style,
    /// Style for numeric text (e.g. "2/5").
    pub text: Style,
}

impl Default for PageDotsStyle {
    fn default() -> Self {
        Self {
            active_dot: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            inactive_dot: Style::default().fg(Color::DarkGray),
            text: Style::default(),
        }
    }
}

/// A clickable page indicator, centered in its area.
///
/// It only ever displays the page it was told about through
/// [`PageIndicator::set_current_page`]; clicks are turned into
/// [`Message::Changed`] requests and do not move the highlight by
/// themselves. When the dots do not fit the area the numeric form is drawn
/// instead.
pub struct PageDots {
    total: usize,
    page: usize,
    kind: IndicatorType,
    hide_for_single_page: bool,
    style: PageDotsStyle,
    area: Cell<Rect>,
}

impl PageDots {
    /// Create an indicator for `total` pages, on the first page.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            page: 0,
            kind: IndicatorType::Dots,
            hide_for_single_page: false,
            style: PageDotsStyle::default(),
            area: Cell::new(Rect::default()),
        }
    }

    /// Set the indicator display type.
    pub fn with_type(mut self, kind: IndicatorType) -> Self {
        self.kind = kind;
        self
    }

    /// Draw nothing when there is only one page.
    pub fn hide_for_single_page(mut self, hide: bool) -> Self {
        self.hide_for_single_page = hide;
        self
    }

    /// Set the indicator style.
    pub fn with_style(mut self, style: PageDotsStyle) -> Self {
        self.style = style;
        self
    }

    /// The page shown as current (zero-indexed).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages shown.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Change the number of pages shown. The highlighted page is left alone;
    /// the owner re-synchronizes it.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
    }

    /// The area the indicator was last rendered into.
    pub fn area(&self) -> Rect {
        self.area.get()
    }

    /// Screen column of `page`'s dot in the last render, if dots were drawn.
    pub fn dot_column(&self, page: usize) -> Option<u16> {
        let area = self.area.get();
        if page >= self.total || self.effective_type(area.width) != IndicatorType::Dots {
            return None;
        }
        Some(self.content_left(area) + (page as u16) * 2)
    }

    fn hidden(&self) -> bool {
        self.total == 0 || (self.hide_for_single_page && self.total == 1)
    }

    fn dots_width(&self) -> usize {
        (self.total * 2).saturating_sub(1)
    }

    fn arabic_text(&self) -> String {
        format!("{}/{}", self.page + 1, self.total)
    }

    fn effective_type(&self, width: u16) -> IndicatorType {
        if self.kind == IndicatorType::Dots && self.dots_width() > usize::from(width) {
            IndicatorType::Arabic
        } else {
            self.kind
        }
    }

    fn content_width(&self, width: u16) -> u16 {
        let needed = match self.effective_type(width) {
            IndicatorType::Dots => self.dots_width(),
            IndicatorType::Arabic => self.arabic_text().len(),
        };
        u16::try_from(needed).unwrap_or(u16::MAX).min(width)
    }

    fn content_left(&self, area: Rect) -> u16 {
        area.x + (area.width - self.content_width(area.width)) / 2
    }

    fn requested_page(&self, column: u16) -> Option<isize> {
        let area = self.area.get();
        let left = self.content_left(area);
        let page = isize::try_from(self.page).ok()?;
        match self.effective_type(area.width) {
            IndicatorType::Dots => {
                let offset = column.checked_sub(left)?;
                let index = usize::from(offset / 2);
                (offset % 2 == 0 && index < self.total).then(|| index as isize)
            }
            // Like a native page control: left half goes back, right half forward.
            IndicatorType::Arabic => {
                let middle = area.x + area.width / 2;
                Some(if column < middle { page - 1 } else { page + 1 })
            }
        }
    }
}

impl PageIndicator for PageDots {
    fn set_current_page(&mut self, page: usize) {
        self.page = page;
    }
}

impl Component for PageDots {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Mouse(event) => {
                let inside = self
                    .area
                    .get()
                    .contains(Position::new(event.column, event.row));
                if event.kind != MouseEventKind::Down(MouseButton::Left) || !inside || self.hidden()
                {
                    return Command::none();
                }
                match self.requested_page(event.column) {
                    Some(page) => Command::message(Message::Changed(page)),
                    None => Command::none(),
                }
            }
            Message::Changed(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        self.area.set(area);
        if area.width == 0 || area.height == 0 || self.hidden() {
            return;
        }

        let left = self.content_left(area);
        let target = Rect {
            x: left,
            width: area.right() - left,
            height: 1,
            ..area
        };

        match self.effective_type(area.width) {
            IndicatorType::Dots => {
                let mut spans = Vec::with_capacity(self.total * 2);
                for i in 0..self.total {
                    if i > 0 {
                        spans.push(Span::raw(" "));
                    }
                    if i == self.page {
                        spans.push(Span::styled("●", self.style.active_dot));
                    } else {
                        spans.push(Span::styled("○", self.style.inactive_dot));
                    }
                }
                frame.render_widget(Paragraph::new(Line::from(spans)), target);
            }
            IndicatorType::Arabic => {
                let span = Span::styled(self.arabic_text(), self.style.text);
                frame.render_widget(Paragraph::new(span), target);
            }
        }
    }
}
