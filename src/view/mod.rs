//! Demo terminal UI (impure shell)
//!
//! One streaming transcript pane driven by a [`ScrollSurface`]. Background
//! sources (idle timer, content generator, gesture-phase subscribers) post
//! [`AppEvent`]s into one channel that the loop drains on its own thread.

pub mod status;
pub mod transcript;
pub mod viewport;

pub use status::{PhaseIndicator, StatusLine};
pub use transcript::{Transcript, TranscriptSnapshot};
pub use viewport::{ScrollPosition, Viewport};

use crate::config::{Axis, KeyBindings, SurfaceConfig};
use crate::model::{AppError, KeyAction, PhaseChange, TimerError};
use crate::source::generator::auto_next_delay;
use crate::source::{ContentGenerator, Gesture, GestureTracker, IdleTimer, RawScrollPhaseSource};
use crate::surface::{forward_phases, ScrollSurface};
use crossterm::{
    event::{self, Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

/// Redraw cadence while nothing else happens.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Rows moved per wheel notch.
const WHEEL_ROWS: usize = 3;

const HELP_TEXT: &str = " s start  x stop  n next  a auto  j/k/wheel scroll  q quit";

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Background thread could not be started
    #[error("Background thread error: {0}")]
    Timer(#[from] TimerError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Everything posted to the UI loop from other threads or subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Idle-timer tick.
    Tick,
    /// Raw scroll phase transition.
    Phase(PhaseChange),
    /// Streamed text for message `generation`.
    Chunk {
        /// Message the chunk belongs to.
        generation: u64,
        /// Text to append.
        text: String,
    },
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    surface: ScrollSurface<TranscriptSnapshot>,
    transcript: Transcript,
    viewport: Viewport,
    gestures: GestureTracker,
    key_bindings: KeyBindings,
    events_tx: Sender<AppEvent>,
    events_rx: Receiver<AppEvent>,
    generator: Option<ContentGenerator>,
    generation: u64,
    _timer: IdleTimer,
    rng: StdRng,
    auto_next_at: Option<Instant>,
    reported_visibility: Option<bool>,
    drag_row: Option<u16>,
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build the app around an existing terminal and start its idle timer.
    pub fn with_terminal(
        terminal: Terminal<B>,
        config: SurfaceConfig,
        settle: Duration,
    ) -> Result<Self, TuiError> {
        if config.axis() == Axis::Horizontal {
            warn!("demo pane only scrolls vertically; ignoring horizontal axis");
        }

        let (events_tx, events_rx) = mpsc::channel();
        let transcript = Transcript::new();
        let surface = ScrollSurface::new(config).with_initial_content(transcript.snapshot());

        let mut gestures = GestureTracker::new(settle);
        gestures.subscribe(forward_phases(events_tx.clone(), AppEvent::Phase));

        let timer = surface.start_timer(events_tx.clone(), AppEvent::Tick)?;
        info!(policy = %surface.policy(), "demo surface ready");

        Ok(Self {
            terminal,
            surface,
            transcript,
            viewport: Viewport::new(),
            gestures,
            key_bindings: KeyBindings::default(),
            events_tx,
            events_rx,
            generator: None,
            generation: 0,
            _timer: timer,
            rng: StdRng::from_entropy(),
            auto_next_at: None,
            reported_visibility: None,
            drag_row: None,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(FRAME_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key)? {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            self.update(Instant::now())?;
            self.draw()?;
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> Result<bool, TuiError> {
        let Some(action) = self.key_bindings.get(key) else {
            return Ok(false);
        };
        let now = Instant::now();

        if action.is_scroll() {
            self.gestures.record(Gesture::Key, now);
        }

        match action {
            KeyAction::ScrollUp => self.viewport.scroll_up(1),
            KeyAction::ScrollDown => self.viewport.scroll_down(1),
            KeyAction::PageUp => self.viewport.scroll_up(self.viewport.page()),
            KeyAction::PageDown => self.viewport.scroll_down(self.viewport.page()),
            KeyAction::ScrollToTop => self.viewport.scroll_to_top(),
            KeyAction::ScrollToBottom => self.viewport.jump_to_bottom(),
            KeyAction::Start => self.start()?,
            KeyAction::Stop => self.stop(),
            KeyAction::Next => self.next()?,
            KeyAction::Auto => self.auto_next(now)?,
            KeyAction::Quit => return Ok(true),
        }
        Ok(false)
    }

    /// Handle a single mouse event
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let now = Instant::now();
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.gestures.record(Gesture::Wheel, now);
                self.viewport.scroll_up(WHEEL_ROWS);
            }
            MouseEventKind::ScrollDown => {
                self.gestures.record(Gesture::Wheel, now);
                self.viewport.scroll_down(WHEEL_ROWS);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.gestures.record(Gesture::Drag, now);
                self.drag_row = Some(mouse.row);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.gestures.record(Gesture::Drag, now);
                if let Some(previous) = self.drag_row.replace(mouse.row) {
                    // Content follows the pointer.
                    if mouse.row > previous {
                        self.viewport.scroll_up(usize::from(mouse.row - previous));
                    } else {
                        self.viewport.scroll_down(usize::from(previous - mouse.row));
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.drag_row.take().is_some() {
                    self.gestures.record(Gesture::Release, now);
                }
            }
            _ => {}
        }
    }

    /// Begin streaming as soon as the view appears, scheduling follow-ups
    /// when `auto` is set.
    fn launch(&mut self, auto: bool, now: Instant) -> Result<(), TuiError> {
        if auto {
            self.auto_next(now)
        } else {
            self.start()
        }
    }

    /// Begin a new streaming message.
    fn start(&mut self) -> Result<(), TuiError> {
        self.generation += 1;
        let generation = self.generation;
        self.transcript.start();
        self.generator = Some(ContentGenerator::start(
            self.events_tx.clone(),
            move |text| AppEvent::Chunk { generation, text },
        )?);
        debug!(generation, "message started");
        Ok(())
    }

    /// Stop streaming and archive the current message.
    fn stop(&mut self) {
        if self.generator.take().is_some() {
            debug!(generation = self.generation, "message stopped");
        }
        self.transcript.stop();
    }

    fn next(&mut self) -> Result<(), TuiError> {
        if self.transcript.is_streaming() {
            self.stop();
        }
        self.start()
    }

    fn auto_next(&mut self, now: Instant) -> Result<(), TuiError> {
        self.next()?;
        let delay = auto_next_delay(&mut self.rng);
        debug!(delay_ms = delay.as_millis() as u64, "next message scheduled");
        self.auto_next_at = Some(now + delay);
        Ok(())
    }

    /// Advance gestures and scheduled work, drain posted events, then feed
    /// the current transcript to the surface.
    fn update(&mut self, now: Instant) -> Result<(), TuiError> {
        self.gestures.poll(now);

        if self.auto_next_at.is_some_and(|at| at <= now) {
            self.auto_next_at = None;
            self.next()?;
        }

        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                AppEvent::Tick => self.surface.on_tick(),
                AppEvent::Phase(change) => self.surface.on_phase_change(change),
                AppEvent::Chunk { generation, text } => {
                    if generation == self.generation {
                        self.transcript.push_chunk(&text);
                    }
                }
            }
        }

        if let Some(outcome) = self.surface.observe(self.transcript.snapshot(), &mut self.viewport) {
            trace!(?outcome, "content observed");
        }
        if self.viewport.take_programmatic() {
            self.gestures.record(Gesture::Programmatic, now);
        }
        Ok(())
    }

    /// Render the current frame, then report sentinel visibility if it moved.
    fn draw(&mut self) -> Result<(), TuiError> {
        let status = StatusLine {
            policy: self.surface.policy(),
            phase: self.surface.current_phase(),
            raw: self.gestures.phase(),
            bottom_visible: self.surface.bottom_visible(),
            streaming: self.transcript.is_streaming(),
        };

        let transcript = &self.transcript;
        let viewport = &mut self.viewport;
        self.terminal.draw(|frame| render(frame, transcript, viewport, &status))?;

        let visible = self.viewport.sentinel_visible();
        if self.reported_visibility != Some(visible) {
            self.reported_visibility = Some(visible);
            self.surface.on_visibility_change(visible);
        }
        Ok(())
    }
}

fn render(frame: &mut Frame, transcript: &Transcript, viewport: &mut Viewport, status: &StatusLine) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
        header,
    );

    let block = Block::default().borders(Borders::ALL).title(" transcript ");
    let inner = block.inner(body);
    let lines = transcript.lines(usize::from(inner.width));
    viewport.layout(lines.len(), usize::from(inner.height));

    let visible: Vec<Line<'static>> = lines
        .into_iter()
        .skip(viewport.offset())
        .take(viewport.height())
        .collect();
    frame.render_widget(Paragraph::new(visible).block(block), body);

    frame.render_widget(Paragraph::new(status.render()), footer);
}

/// Initialize and run the demo
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(config: SurfaceConfig, settle: Duration, auto: bool) -> Result<(), TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(crossterm::event::EnableMouseCapture)?;
    let terminal: Terminal<CrosstermBackend<Stdout>> = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = TuiApp::with_terminal(terminal, config, settle).and_then(|mut app| {
        app.launch(auto, Instant::now())?;
        app.run()
    });

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
