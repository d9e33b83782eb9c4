#![forbid(unsafe_code)]

//! Elm-style runtime for terminal applications.
//!
//! The program runtime manages the update/view loop, handling events and
//! rendering frames. It separates state (Model) from rendering (View) and
//! provides a command pattern for side effects.
//!
//! # Example
//!
//! ```ignore
//! use rest_core::event::Event;
//! use rest_render::frame::Frame;
//! use rest_runtime::program::{Cmd, Model};
//!
//! struct Counter {
//!     count: i32,
//! }
//!
//! enum Msg {
//!     Increment,
//!     Quit,
//!     Ignore,
//! }
//!
//! impl From<Event> for Msg {
//!     fn from(event: Event) -> Self {
//!         match event {
//!             Event::Key(k) if k.is_char('q') => Msg::Quit,
//!             Event::Key(k) if k.is_char('+') => Msg::Increment,
//!             _ => Msg::Ignore,
//!         }
//!     }
//! }
//!
//! impl Model for Counter {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message> {
//!         match msg {
//!             Msg::Increment => { self.count += 1; Cmd::none() }
//!             Msg::Quit => Cmd::quit(),
//!             Msg::Ignore => Cmd::none(),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         // Render counter value to frame
//!     }
//! }
//! ```

use rest_core::event::Event;
use rest_render::frame::Frame;
use std::time::Duration;

#[cfg(feature = "crossterm")]
use rest_core::terminal_session::{SessionOptions, TerminalSession};
#[cfg(feature = "crossterm")]
use rest_render::{buffer::Buffer, diff::BufferDiff, presenter::Presenter};
#[cfg(feature = "crossterm")]
use std::io::{self, Stdout};

/// The Model trait defines application state and behavior.
pub trait Model: Sized {
    /// Messages represent actions that update the model state.
    /// Must be convertible from terminal events.
    type Message: From<Event> + Send + 'static;

    /// Called once when the program starts.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Update the model in response to a message.
    ///
    /// This is the core state transition function. Returns commands
    /// for any side effects that should be executed.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state to a frame.
    fn view(&self, frame: &mut Frame);
}

/// Side effects returned from `init()` and `update()`.
#[derive(Debug)]
pub enum Cmd<M> {
    /// No operation.
    None,
    /// Quit the application.
    Quit,
    /// Execute multiple commands.
    Batch(Vec<Cmd<M>>),
    /// Execute commands in order, stopping after a quit.
    Sequence(Vec<Cmd<M>>),
    /// Send a message to the model.
    Msg(M),
    /// Record a log line. The full-screen runtime forwards it to `tracing`.
    Log(String),
}

impl<M> Cmd<M> {
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    #[inline]
    pub fn log(msg: impl Into<String>) -> Self {
        Self::Log(msg.into())
    }

    /// Create a batch; empty and single-element batches collapse.
    pub fn batch(mut cmds: Vec<Self>) -> Self {
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or_default(),
            _ => Self::Batch(cmds),
        }
    }

    /// Create a sequence; empty and single-element sequences collapse.
    pub fn sequence(mut cmds: Vec<Self>) -> Self {
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or_default(),
            _ => Self::Sequence(cmds),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}

/// Configuration for the program runtime.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    /// Draw on the alternate screen and restore the shell on exit.
    pub alternate_screen: bool,
    /// Input poll timeout.
    pub poll_timeout: Duration,
    /// Enable focus reporting.
    pub focus_reporting: bool,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            poll_timeout: Duration::from_millis(100),
            focus_reporting: false,
        }
    }
}

impl ProgramConfig {
    /// Alternate-screen configuration.
    pub fn fullscreen() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = timeout;
        self
    }
}

/// The program runtime that manages the update/view loop.
#[cfg(feature = "crossterm")]
pub struct Program<M: Model> {
    model: M,
    session: TerminalSession,
    presenter: Presenter<Stdout>,
    config: ProgramConfig,
    running: bool,
    /// Whether the UI needs to be redrawn.
    dirty: bool,
    size: (u16, u16),
    /// Last presented buffer; `None` forces a full redraw.
    prev_buffer: Option<Buffer>,
}

#[cfg(feature = "crossterm")]
impl<M: Model> Program<M> {
    /// Create a new program with default configuration.
    pub fn new(model: M) -> io::Result<Self> {
        Self::with_config(model, ProgramConfig::default())
    }

    /// Enter the terminal session and prepare the first frame.
    ///
    /// # Errors
    ///
    /// Fails if the terminal cannot be put into raw mode or queried.
    pub fn with_config(model: M, config: ProgramConfig) -> io::Result<Self> {
        let session = TerminalSession::new(SessionOptions {
            alternate_screen: config.alternate_screen,
            focus_events: config.focus_reporting,
        })?;
        let size = session.size()?;
        let mut presenter = Presenter::new(io::stdout());
        presenter.hide_cursor()?;
        tracing::info!(width = size.0, height = size.1, "program started");

        Ok(Self {
            model,
            session,
            presenter,
            config,
            running: true,
            dirty: true,
            size,
            prev_buffer: None,
        })
    }

    /// Run the main event loop until the model quits.
    pub fn run(&mut self) -> io::Result<()> {
        let cmd = self.model.init();
        self.execute_cmd(cmd);

        while self.running {
            if self.dirty {
                self.render_frame()?;
            }
            if !self.session.poll_event(self.config.poll_timeout)? {
                continue;
            }
            if let Some(event) = self.session.read_event()? {
                self.handle_event(event);
            }
        }

        self.presenter.show_cursor()?;
        tracing::info!("program stopped");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Resize { width, height } = event {
            self.size = (width, height);
            self.prev_buffer = None;
            self.dirty = true;
        }
        let _span = tracing::debug_span!("update").entered();
        let cmd = self.model.update(M::Message::from(event));
        self.dirty = true;
        self.execute_cmd(cmd);
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Msg(m) => {
                let cmd = self.model.update(m);
                self.dirty = true;
                self.execute_cmd(cmd);
            }
            Cmd::Batch(cmds) => {
                for c in cmds {
                    self.execute_cmd(c);
                }
            }
            Cmd::Sequence(cmds) => {
                for c in cmds {
                    self.execute_cmd(c);
                    if !self.running {
                        break;
                    }
                }
            }
            Cmd::Log(text) => tracing::info!(target: "betterrest::app", "{text}"),
        }
    }

    fn render_frame(&mut self) -> io::Result<()> {
        let (width, height) = self.size;
        let mut frame = Frame::new(width, height);
        self.model.view(&mut frame);

        match self.prev_buffer.as_ref() {
            Some(prev) => {
                let diff = BufferDiff::compute(prev, &frame.buffer);
                if !diff.is_empty() {
                    self.presenter.present(&frame.buffer, &diff)?;
                }
            }
            None => {
                self.presenter.present_full(&frame.buffer)?;
            }
        }

        match frame.cursor_position {
            Some((x, y)) => {
                self.presenter.position_cursor(x, y)?;
                self.presenter.show_cursor()?;
            }
            None => self.presenter.hide_cursor()?,
        }

        self.prev_buffer = Some(frame.buffer);
        self.dirty = false;
        Ok(())
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Consume the program, restoring the terminal, and return the model.
    pub fn into_model(self) -> M {
        self.model
    }
}

/// Builder for creating and running programs.
#[cfg(feature = "crossterm")]
pub struct App;

#[cfg(feature = "crossterm")]
impl App {
    pub fn new<M: Model>(model: M) -> AppBuilder<M> {
        AppBuilder {
            model,
            config: ProgramConfig::default(),
        }
    }

    /// Full-screen app on the alternate screen.
    pub fn fullscreen<M: Model>(model: M) -> AppBuilder<M> {
        Self::new(model)
    }
}

#[cfg(feature = "crossterm")]
pub struct AppBuilder<M: Model> {
    model: M,
    config: ProgramConfig,
}

#[cfg(feature = "crossterm")]
impl<M: Model> AppBuilder<M> {
    #[must_use]
    pub fn config(mut self, config: ProgramConfig) -> Self {
        self.config = config;
        self
    }

    /// Run until quit and hand back the final model.
    pub fn run(self) -> io::Result<M> {
        let mut program = Program::with_config(self.model, self.config)?;
        program.run()?;
        Ok(program.into_model())
    }
}
