//! Input handling for the Terra TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;

use terra_engine::{App, InputMode, NavAction, SectionId};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Rows far past any document height; `scroll_lines` clamps to the real max.
const SCROLL_TO_END: i32 = 65_535;

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and feeds them to the frame
/// loop through a bounded channel.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so the input thread unblocks if it is
        // currently backpressured on a send.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain up to one frame's worth of pending events into the app.
/// Returns `true` when the app should exit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

fn apply_event(app: &mut App, event: Event) -> bool {
    if let Event::Key(key) = event {
        // Handle press + repeat events (ignore releases)
        if matches!(key.kind, KeyEventKind::Release) {
            return app.should_quit();
        }

        // Ctrl+C quits from anywhere.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            app.quit();
            return true;
        }

        if app.menu().is_open() {
            handle_menu_keys(app, key);
        } else {
            match app.input_mode() {
                InputMode::Browse => handle_browse_mode(app, key),
                InputMode::Form => handle_form_mode(app, key),
            }
        }
    }
    app.should_quit()
}

fn handle_menu_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.menu_select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.menu_select_next(),
        KeyCode::Enter => app.menu_activate(),
        KeyCode::Esc | KeyCode::Char('m') => app.close_menu(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

fn handle_browse_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quit();
        }
        KeyCode::Char('m') => {
            app.toggle_menu();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_lines(-1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_lines(1);
        }
        KeyCode::PageUp => {
            app.scroll_page(-1);
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            app.scroll_page(1);
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.navigate(NavAction::ScrollToSection(SectionId::Home));
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.scroll_lines(SCROLL_TO_END);
        }
        // Carousel paging
        KeyCode::Left | KeyCode::Char('h') => {
            app.carousel_previous();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.carousel_next();
        }
        // Direct section jumps
        KeyCode::Char(c @ '1'..='4') => {
            let index = (c as usize) - ('1' as usize);
            app.navigate(NavAction::ScrollToSection(SectionId::ALL[index]));
        }
        KeyCode::Char('i') | KeyCode::Enter => {
            app.enter_form_mode();
        }
        _ => {}
    }
}

fn handle_form_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.leave_form_mode();
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form_focus_next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form_focus_previous();
        }
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Backspace => {
            app.form_backspace();
        }
        // Insert character (ignore \r)
        KeyCode::Char(c) if c != '\r' => {
            app.form_input(c);
        }
        _ => {}
    }
}
