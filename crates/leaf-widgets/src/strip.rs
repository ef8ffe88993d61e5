//! Horizontally paged content strip with drag, fling, and scroll animation.
//!
//! Each page is exactly one viewport wide and pages sit edge to edge, so the
//! content offset of page `i` is `i * width`. Positions are tracked in page
//! units internally; the column-based offset reported through
//! [`PageContainer`] is derived from the width learned at render time, which
//! keeps the current page aligned across terminal resizes.

use std::cell::Cell;
use std::time::Duration;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use leaf_core::command::Command;
use leaf_core::component::Component;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Text;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::sync::{PageContainer, ScrollAlign};

/// Messages for the page strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A mouse event; the strip reacts to left-button drags inside its area
    /// and to horizontal wheel scrolling.
    Mouse(MouseEvent),
    /// Advance the running animation by one frame.
    Tick,
    /// Emitted when a drag is released.
    DragEnded {
        /// Whether the content keeps moving toward a page boundary.
        will_decelerate: bool,
    },
    /// Emitted when a fling's deceleration comes to rest.
    DecelerationEnded,
}

/// Tuning for drags and animations.
#[derive(Debug, Clone)]
pub struct StripConfig {
    /// Minimum columns moved by the last drag step for a release to count as
    /// a fling.
    pub fling_threshold: f32,
    /// Fraction of the remaining distance covered per tick.
    pub animation_step: f32,
    /// Minimum columns covered per tick.
    pub min_step: f32,
    /// Interval between animation ticks.
    pub tick_interval: Duration,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            fling_threshold: 2.0,
            animation_step: 0.35,
            min_step: 1.0,
            tick_interval: Duration::from_millis(16),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    anchor_column: u16,
    anchor_position: f32,
    /// Columns moved by the most recent drag event, positive toward later
    /// pages.
    last_step: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MotionKind {
    /// Momentum after a fling; reports `DecelerationEnded` on arrival.
    Decelerating,
    /// A programmatic `scroll_to_item`; arrives silently.
    Scrolling,
}

#[derive(Debug, Clone, Copy)]
struct Motion {
    target: f32,
    kind: MotionKind,
}

/// A row of full-width pages scrolled horizontally.
pub struct PageStrip {
    pages: Vec<Text<'static>>,
    /// Leading edge of the viewport, in pages.
    position: f32,
    drag: Option<Drag>,
    motion: Option<Motion>,
    config: StripConfig,
    placeholder: String,
    placeholder_style: Style,
    /// Updated during each `view()` call via interior mutability.
    width: Cell<u16>,
    area: Cell<Rect>,
}

impl PageStrip {
    /// Create a strip showing `pages`, scrolled to the first one.
    pub fn new(pages: Vec<Text<'static>>) -> Self {
        Self {
            pages,
            position: 0.0,
            drag: None,
            motion: None,
            config: StripConfig::default(),
            placeholder: "No pages".to_string(),
            placeholder_style: Style::default().fg(Color::DarkGray),
            width: Cell::new(0),
            area: Cell::new(Rect::default()),
        }
    }

    /// Set drag and animation tuning.
    pub fn with_config(mut self, config: StripConfig) -> Self {
        self.config = config;
        self
    }

    /// Text shown when there are no pages.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Replace all pages. Any drag or animation is dropped and the position
    /// is clamped to the new content.
    pub fn set_pages(&mut self, pages: Vec<Text<'static>>) {
        self.pages = pages;
        self.drag = None;
        self.motion = None;
        self.position = self.position.clamp(0.0, self.max_position());
    }

    /// The pages.
    pub fn pages(&self) -> &[Text<'static>] {
        &self.pages
    }

    /// The drag and animation tuning in use.
    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Leading edge of the viewport in pages (`1.5` is halfway between the
    /// second and third page).
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether a fling or programmatic scroll is still moving.
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// The area the strip was last rendered into.
    pub fn area(&self) -> Rect {
        self.area.get()
    }

    fn max_position(&self) -> f32 {
        self.pages.len().saturating_sub(1) as f32
    }

    fn handle_mouse(&mut self, event: MouseEvent) -> Option<Message> {
        let width = f32::from(self.width.get());
        let inside = self
            .area
            .get()
            .contains(Position::new(event.column, event.row));

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) if inside && width > 0.0 => {
                // Grabbing moving content stops it where it is.
                self.motion = None;
                self.drag = Some(Drag {
                    anchor_column: event.column,
                    anchor_position: self.position,
                    last_step: 0.0,
                });
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let mut drag = self.drag?;
                if width <= 0.0 {
                    return None;
                }
                let moved = f32::from(drag.anchor_column) - f32::from(event.column);
                let next = (drag.anchor_position + moved / width).clamp(0.0, self.max_position());
                drag.last_step = (next - self.position) * width;
                self.position = next;
                self.drag = Some(drag);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let drag = self.drag.take()?;
                Some(self.release(drag.last_step))
            }
            MouseEventKind::ScrollRight if inside && self.drag.is_none() => {
                Some(self.fling_toward(1.0))
            }
            MouseEventKind::ScrollLeft if inside && self.drag.is_none() => {
                Some(self.fling_toward(-1.0))
            }
            _ => None,
        }
    }

    fn release(&mut self, last_step: f32) -> Message {
        if last_step.abs() >= self.config.fling_threshold {
            return self.fling_toward(last_step.signum());
        }
        self.position = self.position.round().clamp(0.0, self.max_position());
        Message::DragEnded {
            will_decelerate: false,
        }
    }

    /// Start decelerating toward the next page boundary in `direction`.
    /// At either end there is nowhere to go and the drag simply ends.
    fn fling_toward(&mut self, direction: f32) -> Message {
        let boundary = if direction > 0.0 {
            self.position.floor() + 1.0
        } else {
            self.position.ceil() - 1.0
        };
        let target = boundary.clamp(0.0, self.max_position());
        if (target - self.position).abs() < f32::EPSILON {
            self.position = target;
            return Message::DragEnded {
                will_decelerate: false,
            };
        }
        tracing::trace!(from = self.position, to = target, "fling");
        self.motion = Some(Motion {
            target,
            kind: MotionKind::Decelerating,
        });
        Message::DragEnded {
            will_decelerate: true,
        }
    }

    fn advance(&mut self) -> Option<Message> {
        let motion = self.motion?;
        let remaining = motion.target - self.position;
        let width = f32::from(self.width.get());
        let min_step = if width > 0.0 {
            self.config.min_step / width
        } else {
            f32::INFINITY
        };
        let step = (remaining.abs() * self.config.animation_step).max(min_step);

        if remaining.abs() <= step {
            self.position = motion.target;
            self.motion = None;
            return (motion.kind == MotionKind::Decelerating).then_some(Message::DecelerationEnded);
        }
        self.position += step.copysign(remaining);
        None
    }
}

impl PageContainer for PageStrip {
    fn item_count(&self) -> usize {
        self.pages.len()
    }

    fn content_offset_x(&self) -> f32 {
        self.position * f32::from(self.width.get())
    }

    fn viewport_width(&self) -> f32 {
        f32::from(self.width.get())
    }

    fn scroll_to_item(&mut self, index: usize, align: ScrollAlign, animated: bool) {
        let ScrollAlign::Leading = align;
        let target = (index as f32).min(self.max_position());
        self.drag = None;
        if animated && (target - self.position).abs() > f32::EPSILON {
            self.motion = Some(Motion {
                target,
                kind: MotionKind::Scrolling,
            });
        } else {
            self.position = target;
            self.motion = None;
        }
    }
}

impl Component for PageStrip {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        let emitted = match msg {
            Message::Mouse(event) => self.handle_mouse(event),
            Message::Tick => self.advance(),
            Message::DragEnded { .. } | Message::DecelerationEnded => None,
        };
        emitted.map_or_else(Command::none, Command::message)
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        self.area.set(area);
        self.width.set(area.width);
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.pages.is_empty() {
            let placeholder = Paragraph::new(self.placeholder.as_str()).style(self.placeholder_style);
            frame.render_widget(placeholder, area);
            return;
        }

        let width = i64::from(area.width);
        let scrolled = (f64::from(self.position) * width as f64).round() as i64;
        for (index, page) in self.pages.iter().enumerate() {
            let left = index as i64 * width - scrolled;
            if left >= width || left + width <= 0 {
                continue;
            }
            let start = left.max(0);
            let end = (left + width).min(width);
            let slot = Rect {
                x: area.x + start as u16,
                y: area.y,
                width: (end - start) as u16,
                height: area.height,
            };
            let skip = (-left).max(0) as u16;
            frame.render_widget(Paragraph::new(page.clone()).scroll((0, skip)), slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn mouse(kind: MouseEventKind, column: u16) -> Message {
        Message::Mouse(MouseEvent {
            kind,
            column,
            row: 1,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn pages(n: usize) -> Vec<Text<'static>> {
        (0..n).map(|i| Text::raw(format!("page-{i}"))).collect()
    }

    /// Render once so the strip learns its 40x3 area.
    fn laid_out(n: usize) -> PageStrip {
        let strip = PageStrip::new(pages(n));
        render(&strip);
        strip
    }

    fn render(strip: &PageStrip) -> String {
        render_at(strip, 40)
    }

    fn render_at(strip: &PageStrip, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
        terminal
            .draw(|frame| strip.view(frame, frame.area()))
            .unwrap();
        leaf_core::testing::buffer_to_string(terminal.backend().buffer())
    }

    fn emitted(strip: &mut PageStrip, msg: Message) -> Option<Message> {
        strip.update(msg).into_message()
    }

    fn run_animation(strip: &mut PageStrip) -> Vec<Message> {
        let mut out = vec![];
        for _ in 0..200 {
            if !strip.is_animating() {
                break;
            }
            out.extend(emitted(strip, Message::Tick));
        }
        out
    }

    #[test]
    fn reports_geometry_in_columns() {
        let mut strip = laid_out(4);
        assert_eq!(strip.item_count(), 4);
        assert_eq!(strip.viewport_width(), 40.0);
        strip.scroll_to_item(2, ScrollAlign::Leading, false);
        assert_eq!(strip.content_offset_x(), 80.0);
        assert!(!strip.is_animating());
    }

    #[test]
    fn resize_keeps_the_page_aligned() {
        let mut strip = laid_out(4);
        strip.scroll_to_item(2, ScrollAlign::Leading, false);
        assert_eq!(strip.content_offset_x(), 80.0);

        assert!(render_at(&strip, 25).starts_with("page-2"));
        assert_eq!(strip.viewport_width(), 25.0);
        assert_eq!(strip.content_offset_x(), 50.0);
    }

    #[test]
    fn unrendered_strip_has_zero_width() {
        let strip = PageStrip::new(pages(2));
        assert_eq!(strip.viewport_width(), 0.0);
    }

    #[test]
    fn slow_drag_snaps_and_ends_without_momentum() {
        let mut strip = laid_out(3);
        assert_eq!(emitted(&mut strip, mouse(MouseEventKind::Down(MouseButton::Left), 30)), None);
        for column in [25, 20, 15, 10, 9] {
            emitted(&mut strip, mouse(MouseEventKind::Drag(MouseButton::Left), column));
        }
        assert!(strip.is_dragging());
        // 21 columns of a 40-column page: past halfway.
        assert_eq!(
            emitted(&mut strip, mouse(MouseEventKind::Up(MouseButton::Left), 9)),
            Some(Message::DragEnded {
                will_decelerate: false
            })
        );
        assert_eq!(strip.position(), 1.0);
        assert_eq!(strip.content_offset_x(), 40.0);
    }

    #[test]
    fn fast_drag_flings_to_the_next_page() {
        let mut strip = laid_out(3);
        emitted(&mut strip, mouse(MouseEventKind::Down(MouseButton::Left), 30));
        emitted(&mut strip, mouse(MouseEventKind::Drag(MouseButton::Left), 24));
        assert_eq!(
            emitted(&mut strip, mouse(MouseEventKind::Up(MouseButton::Left), 24)),
            Some(Message::DragEnded {
                will_decelerate: true
            })
        );
        assert!(strip.is_animating());
        assert_eq!(run_animation(&mut strip), vec![Message::DecelerationEnded]);
        assert_eq!(strip.position(), 1.0);
    }

    #[test]
    fn fling_backward_targets_the_previous_page() {
        let mut strip = laid_out(3);
        strip.scroll_to_item(2, ScrollAlign::Leading, false);
        emitted(&mut strip, mouse(MouseEventKind::Down(MouseButton::Left), 10));
        emitted(&mut strip, mouse(MouseEventKind::Drag(MouseButton::Left), 16));
        emitted(&mut strip, mouse(MouseEventKind::Up(MouseButton::Left), 16));
        run_animation(&mut strip);
        assert_eq!(strip.position(), 1.0);
    }

    #[test]
    fn drags_stop_at_the_ends() {
        let mut strip = laid_out(2);
        emitted(&mut strip, mouse(MouseEventKind::Down(MouseButton::Left), 5));
        emitted(&mut strip, mouse(MouseEventKind::Drag(MouseButton::Left), 35));
        assert_eq!(strip.position(), 0.0);
        // Pinned at the edge, the release carries no momentum.
        assert_eq!(
            emitted(&mut strip, mouse(MouseEventKind::Up(MouseButton::Left), 35)),
            Some(Message::DragEnded {
                will_decelerate: false
            })
        );
        assert!(!strip.is_animating());
    }

    #[test]
    fn presses_outside_the_strip_are_ignored() {
        let mut strip = laid_out(3);
        let outside = Message::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        emitted(&mut strip, outside);
        assert!(!strip.is_dragging());
        assert_eq!(
            emitted(&mut strip, mouse(MouseEventKind::Up(MouseButton::Left), 5)),
            None
        );
    }

    #[test]
    fn animated_scroll_arrives_silently() {
        let mut strip = laid_out(5);
        strip.scroll_to_item(3, ScrollAlign::Leading, true);
        assert!(strip.is_animating());
        assert_eq!(strip.position(), 0.0);
        assert!(run_animation(&mut strip).is_empty());
        assert_eq!(strip.position(), 3.0);
    }

    #[test]
    fn grabbing_stops_an_animation() {
        let mut strip = laid_out(5);
        strip.scroll_to_item(4, ScrollAlign::Leading, true);
        emitted(&mut strip, Message::Tick);
        emitted(&mut strip, mouse(MouseEventKind::Down(MouseButton::Left), 20));
        assert!(!strip.is_animating());
        assert!(strip.is_dragging());
    }

    #[test]
    fn horizontal_wheel_flings() {
        let mut strip = laid_out(3);
        assert_eq!(
            emitted(&mut strip, mouse(MouseEventKind::ScrollRight, 10)),
            Some(Message::DragEnded {
                will_decelerate: true
            })
        );
        assert_eq!(run_animation(&mut strip), vec![Message::DecelerationEnded]);
        assert_eq!(strip.position(), 1.0);
    }

    #[test]
    fn set_pages_clamps_position() {
        let mut strip = laid_out(5);
        strip.scroll_to_item(4, ScrollAlign::Leading, false);
        strip.set_pages(pages(2));
        assert_eq!(strip.position(), 1.0);
        strip.set_pages(vec![]);
        assert_eq!(strip.position(), 0.0);
    }

    #[test]
    fn renders_the_current_page() {
        let mut strip = laid_out(3);
        assert!(render(&strip).starts_with("page-0"));
        strip.scroll_to_item(2, ScrollAlign::Leading, false);
        assert!(render(&strip).starts_with("page-2"));
    }

    #[test]
    fn renders_two_pages_mid_scroll() {
        let mut strip = laid_out(3);
        emitted(&mut strip, mouse(MouseEventKind::Down(MouseButton::Left), 30));
        emitted(&mut strip, mouse(MouseEventKind::Drag(MouseButton::Left), 10));
        let first_row = render(&strip).lines().next().unwrap_or_default().to_string();
        // Page 0 is scrolled out, page 1 starts 20 columns in.
        assert_eq!(&first_row[20..26], "page-1");
    }

    #[test]
    fn empty_strip_shows_placeholder() {
        let strip = PageStrip::new(vec![]).with_placeholder("nothing here");
        assert!(render(&strip).starts_with("nothing here"));
    }
}
