use crate::command::{Command, CommandInner};
use crate::model::Model;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

/// A headless harness that drives a [`Model`] without a terminal.
///
/// Synchronous commands ([`Command::message`]) are queued and flushed by
/// [`drain_messages`](TestProgram::drain_messages); futures are ignored and a
/// [`Command::quit`] only sets [`quit_requested`](TestProgram::quit_requested).
///
/// ```rust,ignore
/// let mut prog = TestProgram::<Gallery>::new(5);
/// prog.render(40, 8); // lets the page strip learn its width
/// prog.send(Msg::Pages(paged_view::Message::Next));
/// prog.drain_messages();
/// assert_eq!(prog.model().pages.current_page(), 1);
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending: Vec<M::Message>,
    quit: bool,
}

impl<M: Model> TestProgram<M> {
    /// Build the model with [`Model::init`] and queue its startup messages.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending: Vec::new(),
            quit: false,
        };
        program.collect(init_cmd);
        program
    }

    /// Run one update with `msg`; follow-up messages are queued, not run.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Run queued messages, and whatever they queue in turn, until idle.
    pub fn drain_messages(&mut self) {
        while !self.pending.is_empty() {
            let batch: Vec<_> = self.pending.drain(..).collect();
            for msg in batch {
                let cmd = self.model.update(msg);
                self.collect(cmd);
            }
        }
    }

    /// Messages queued by the last updates and not yet drained.
    pub fn pending(&self) -> &[M::Message] {
        &self.pending
    }

    /// Whether any update returned [`Command::quit`].
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// The model, for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Render into a fresh [`TestBackend`] buffer of the given size.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend cannot fail");
        terminal
            .draw(|frame| self.model.view(frame))
            .expect("test backend cannot fail");
        terminal.backend().buffer().clone()
    }

    /// Render and return the buffer as text, one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None | CommandInner::Future(_) => {}
            CommandInner::Message(msg) => self.pending.push(msg),
            CommandInner::Quit => self.quit = true,
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect(cmd);
                }
            }
        }
    }
}

/// Flatten a buffer into text, rows joined by `\n`.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            out.push('\n');
        }
    }
    out
}
