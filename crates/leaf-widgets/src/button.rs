//! Clickable next/previous page button.

use std::cell::Cell;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use leaf_core::command::Command;
use leaf_core::component::Component;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::sync::NavControl;

/// Messages for a navigation button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A mouse event; a left press inside the label triggers the button.
    Mouse(MouseEvent),
    /// Emitted when an enabled button is pressed.
    Triggered,
}

/// Style configuration for [`NavButton`].
#[derive(Debug, Clone)]
pub struct NavButtonStyle {
    /// Label style while the button can be pressed.
    pub enabled: Style,
    /// Label style while it cannot.
    pub disabled: Style,
}

impl Default for NavButtonStyle {
    fn default() -> Self {
        Self {
            enabled: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            disabled: Style::default().fg(Color::DarkGray),
        }
    }
}

/// A one-line label that can be clicked while enabled.
pub struct NavButton {
    label: String,
    enabled: bool,
    style: NavButtonStyle,
    area: Cell<Rect>,
}

impl NavButton {
    /// Create an enabled button.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            style: NavButtonStyle::default(),
            area: Cell::new(Rect::default()),
        }
    }

    /// Replace the label, keeping the style and enabled state.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_style(mut self, style: NavButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Display width of the label in columns.
    pub fn width(&self) -> u16 {
        u16::try_from(self.label.width()).unwrap_or(u16::MAX)
    }

    /// The area the label was last rendered into.
    pub fn area(&self) -> Rect {
        self.area.get()
    }
}

impl NavControl for NavButton {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl Component for NavButton {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Mouse(event)
                if self.enabled
                    && event.kind == MouseEventKind::Down(MouseButton::Left)
                    && self
                        .area
                        .get()
                        .contains(Position::new(event.column, event.row)) =>
            {
                Command::message(Message::Triggered)
            }
            Message::Mouse(_) | Message::Triggered => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let area = Rect {
            width: area.width.min(self.width()),
            height: area.height.min(1),
            ..area
        };
        self.area.set(area);
        if area.is_empty() {
            return;
        }
        let style = if self.enabled {
            self.style.enabled
        } else {
            self.style.disabled
        };
        frame.render_widget(Paragraph::new(self.label.as_str()).style(style), area);
    }
}
