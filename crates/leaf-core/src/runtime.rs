use crate::command::{Command, CommandInner};
use crate::model::Model;
use crate::subscription::SubscriptionManager;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::path::PathBuf;
use std::sync::Once;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Errors that can occur while setting up or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// Terminal setup, drawing, teardown, or log file I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The `tracing` subscriber could not be installed.
    #[error("failed to install logging: {0}")]
    Logging(String),
}

/// Configuration for a [`Program`].
///
/// Override only what you need with struct update syntax:
///
/// ```rust,ignore
/// let opts = ProgramOptions {
///     title: Some("gallery".into()),
///     log_file: Some("gallery.log".into()),
///     ..ProgramOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Maximum redraws per second (default 60, clamped to 1..=120).
    pub fps: u32,
    /// Draw on the alternate screen (default true).
    pub alt_screen: bool,
    /// Capture mouse clicks, drags, and wheel (default true; swiping needs it).
    pub mouse_capture: bool,
    /// Terminal title to set on startup.
    pub title: Option<String>,
    /// Restore the terminal before a panic message is printed (default true).
    pub catch_panics: bool,
    /// Quit on Ctrl+C delivered as a signal (default true).
    pub handle_signals: bool,
    /// Send `tracing` output to this file (see [`log_to_file`](crate::logging::log_to_file)).
    pub log_file: Option<PathBuf>,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            alt_screen: true,
            mouse_capture: true,
            title: None,
            catch_panics: true,
            handle_signals: true,
            log_file: None,
        }
    }
}

/// Owns the terminal and a [`Model`], and runs the event loop until the model
/// returns [`Command::quit`].
///
/// ```rust,ignore
/// #[tokio::main]
/// async fn main() -> Result<(), ProgramError> {
///     let app = Program::<Gallery>::new(())?.run().await?;
///     println!("stopped on page {}", app.pages.current_page() + 1);
///     Ok(())
/// }
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    msg_tx: mpsc::UnboundedSender<M::Message>,
    msg_rx: mpsc::UnboundedReceiver<M::Message>,
    subscriptions: SubscriptionManager<M::Message>,
    options: ProgramOptions,
    needs_redraw: bool,
    should_quit: bool,
}

impl<M: Model> Program<M> {
    /// Create a program with default options.
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// Create a program with custom options.
    ///
    /// Installs file logging first (when configured) so terminal setup
    /// failures are already recorded.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        if let Some(ref path) = options.log_file {
            crate::logging::log_to_file(path)?;
        }

        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (model, init_cmd) = M::init(flags);
        let terminal = init_terminal(&options)?;
        let subscriptions = SubscriptionManager::new(msg_tx.clone());

        let mut program = Self {
            model,
            terminal,
            msg_tx,
            msg_rx,
            subscriptions,
            options,
            needs_redraw: true,
            should_quit: false,
        };
        tracing::debug!(fps = program.options.fps, "program initialized");

        program.execute_command(init_cmd);
        let subs = program.model.subscriptions();
        program.subscriptions.reconcile(subs);

        Ok(program)
    }

    /// Run until quit, then restore the terminal and hand back the model.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        let outcome = self.event_loop().await;

        tracing::debug!("shutting down");
        self.subscriptions.shutdown();
        restore_terminal(self.options.alt_screen)?;
        outcome?;

        Ok(self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        self.render()?;

        let fps = self.options.fps.clamp(1, 120);
        let mut frames = tokio::time::interval(Duration::from_secs_f64(1.0 / f64::from(fps)));
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let handle_signals = self.options.handle_signals;

        loop {
            tokio::select! {
                biased;

                _ = tokio::signal::ctrl_c(), if handle_signals => {
                    tracing::debug!("received ctrl+c");
                    return Ok(());
                }

                Some(msg) = self.msg_rx.recv() => {
                    self.process_message(msg);
                    // Drain whatever is already queued before the next frame.
                    while let Ok(msg) = self.msg_rx.try_recv() {
                        self.process_message(msg);
                        if self.should_quit {
                            break;
                        }
                    }
                    if self.should_quit {
                        return Ok(());
                    }
                }

                _ = frames.tick() => {
                    if self.needs_redraw {
                        self.render()?;
                        self.needs_redraw = false;
                    }
                }
            }
        }
    }

    fn process_message(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.execute_command(cmd);

        let subs = self.model.subscriptions();
        self.subscriptions.reconcile(subs);

        self.needs_redraw = true;
    }

    fn execute_command(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => {
                let _ = self.msg_tx.send(msg);
            }
            CommandInner::Quit => {
                self.should_quit = true;
            }
            CommandInner::Future(fut) => {
                let tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let _ = tx.send(fut.await);
                });
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd);
                }
            }
        }
    }

    fn render(&mut self) -> Result<(), ProgramError> {
        self.terminal.draw(|frame| self.model.view(frame))?;
        Ok(())
    }
}

fn init_terminal(options: &ProgramOptions) -> Result<Terminal<CrosstermBackend<Stdout>>, ProgramError> {
    if options.catch_panics {
        static HOOK_INSTALLED: Once = Once::new();
        let alt_screen = options.alt_screen;
        HOOK_INSTALLED.call_once(|| {
            let original_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal(alt_screen);
                original_hook(info);
            }));
        });
    }

    enable_raw_mode()?;
    let mut out = stdout();
    if options.alt_screen {
        execute!(out, EnterAlternateScreen)?;
    }
    if options.mouse_capture {
        execute!(out, EnableMouseCapture)?;
    }
    if let Some(ref title) = options.title {
        execute!(out, SetTitle(title))?;
    }
    execute!(out, cursor::Hide)?;

    Ok(Terminal::new(CrosstermBackend::new(out))?)
}

/// Best-effort teardown: keep going when a step fails, report raw-mode
/// failure.
fn restore_terminal(alt_screen: bool) -> Result<(), std::io::Error> {
    let raw = disable_raw_mode();
    let mut out = stdout();
    execute!(out, DisableMouseCapture).ok();
    execute!(out, cursor::Show).ok();
    if alt_screen {
        execute!(out, LeaveAlternateScreen).ok();
    }
    raw
}
