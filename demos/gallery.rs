//! # Gallery Demo
//!
//! A swipeable gallery built from a single [`PagedView`]:
//! - Drag the pages with the mouse (or use a horizontal wheel) to swipe
//! - Click a dot or the Prev/Next buttons to jump
//! - Arrow keys, `h`/`l`, Home and End navigate from the keyboard
//!
//! Set `RUST_LOG=debug` to see page commits in `gallery.log`.
//!
//! Run with: `cargo run --example gallery`

use leaf::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use leaf::ratatui::layout::{Constraint, Layout};
use leaf::ratatui::style::{Color, Modifier, Style};
use leaf::ratatui::text::{Line, Span, Text};
use leaf::ratatui::widgets::Paragraph;
use leaf::ratatui::Frame;
use leaf::widgets::paged_view::{self, PagedView};
use leaf::{terminal_events, Command, Component, Model, ProgramOptions, Subscription, TerminalEvent};

const SLIDES: &[(&str, &str)] = &[
    ("Welcome", "Swipe left and right to move between pages.\n\nA slow drag snaps to the nearest page.\nA quick flick carries on to the next one."),
    ("Dots", "The dots below follow the current page.\n\nClick one to jump straight to it."),
    ("Buttons", "Prev and Next step one page at a time.\n\nThey turn grey at either end."),
    ("Keyboard", "← / h    previous page\n→ / l    next page\nHome     first page\nEnd      last page"),
    ("The end", "Press q or Esc to quit."),
];

struct Gallery {
    pages: PagedView,
    visits: usize,
}

#[derive(Debug)]
enum Msg {
    Pages(paged_view::Message),
    Key(KeyEvent),
    Redraw,
}

fn slides() -> Vec<Text<'static>> {
    SLIDES
        .iter()
        .map(|(title, body)| {
            let mut text = Text::from(Line::from(Span::styled(
                *title,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            text.push_line(Line::raw(""));
            text.extend(Text::raw(*body));
            text
        })
        .collect()
}

impl Model for Gallery {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let mut pages = PagedView::new(slides()).with_title(" Gallery ");
        pages.focus();
        (Gallery { pages, visits: 1 }, Command::none())
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Pages(paged_view::Message::PageChanged(page)) => {
                self.visits += 1;
                tracing::info!(page, visits = self.visits, "page changed");
                Command::none()
            }
            Msg::Pages(m) => self.pages.update(m).map(Msg::Pages),
            Msg::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Command::quit(),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Command::quit()
                }
                _ => self
                    .pages
                    .update(paged_view::Message::Key(key))
                    .map(Msg::Pages),
            },
            Msg::Redraw => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [main, footer] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        self.pages.view(frame, main);

        let status = Line::from(vec![
            Span::styled(
                format!(" page {}/{} ", self.pages.current_page() + 1, self.pages.page_count()),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::raw(format!("  {} page views  ", self.visits)),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]);
        frame.render_widget(Paragraph::new(status), footer);
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        let mut subs = vec![terminal_events(|ev| match ev {
            TerminalEvent::Mouse(m) => Some(Msg::Pages(paged_view::Message::Mouse(m))),
            TerminalEvent::Key(k) => Some(Msg::Key(k)),
            TerminalEvent::Resize(..) => Some(Msg::Redraw),
        })];
        subs.extend(
            self.pages
                .subscriptions()
                .into_iter()
                .map(|sub| sub.map(Msg::Pages)),
        );
        subs
    }
}

#[leaf::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = ProgramOptions {
        title: Some("leaf gallery".into()),
        log_file: Some("gallery.log".into()),
        ..ProgramOptions::default()
    };
    let app = leaf::run_with::<Gallery>((), options).await?;
    println!(
        "Stopped on page {} after {} page views",
        app.pages.current_page() + 1,
        app.visits
    );
    Ok(())
}
