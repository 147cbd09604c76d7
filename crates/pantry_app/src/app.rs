use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use pantry_core::{update, AppState, Msg, RequestPhase};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::style::Style;
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;
use tui_textarea::{CursorMove, TextArea};

use crate::config::ApiConfig;
use crate::effects::EffectRunner;

/// Which form field receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Pantry,
    TopK,
}

pub struct App<'a> {
    pub(crate) state: AppState,
    pub(crate) pantry_input: TextArea<'a>,
    pub(crate) top_k_input: TextArea<'a>,
    pub(crate) focus: FormFocus,
    pub(crate) table_state: TableState,
    pub(crate) throbber_state: ThrobberState,
    effects: EffectRunner,
}

impl<'a> App<'a> {
    pub fn new(config: ApiConfig) -> Self {
        let state = AppState::new();
        let pantry_input = single_line_input(state.pantry_input());
        let top_k_input = single_line_input(state.top_k_input());
        Self {
            state,
            pantry_input,
            top_k_input,
            focus: FormFocus::Pantry,
            table_state: TableState::default(),
            throbber_state: ThrobberState::default(),
            effects: EffectRunner::new(&config),
        }
    }

    /// Pump the terminal event loop until the user exits.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, event_rx) = mpsc::channel();
        let event_loop_running = Arc::new(AtomicBool::new(true));
        let event_loop_flag = Arc::clone(&event_loop_running);

        let event_thread = thread::spawn(move || -> Result<()> {
            while event_loop_flag.load(Ordering::Relaxed) {
                if event::poll(Duration::from_millis(50))? {
                    let event = event::read()?;
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(())
        });

        let mut pending_events = VecDeque::new();

        let result: Result<()> = 'event_loop: loop {
            self.pump_engine_events();
            self.throbber_state.calc_next();

            loop {
                match event_rx.try_recv() {
                    Ok(Event::Resize(_, _)) => {}
                    Ok(event) => pending_events.push_back(event),
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        break 'event_loop Err(anyhow!("input event channel disconnected"));
                    }
                }
            }

            terminal.draw(|frame| self.draw(frame))?;

            let mut quit = false;
            while let Some(event) = pending_events.pop_front() {
                if let Event::Key(key) = event {
                    if key.kind == KeyEventKind::Press && self.handle_key(key) {
                        quit = true;
                        break;
                    }
                }
            }
            if quit {
                break Ok(());
            }

            thread::sleep(Duration::from_millis(16));
        };

        ratatui::restore();

        event_loop_running.store(false, Ordering::Relaxed);
        match event_thread.join() {
            Ok(join_result) => join_result?,
            Err(err) => std::panic::resume_unwind(err),
        }

        result
    }

    /// Returns true when the user asked to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Enter => self.dispatch_msg(Msg::RecommendClicked),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    FormFocus::Pantry => FormFocus::TopK,
                    FormFocus::TopK => FormFocus::Pantry,
                };
            }
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            _ => self.forward_to_focused_input(key),
        }
        false
    }

    fn forward_to_focused_input(&mut self, key: KeyEvent) {
        let changed = match self.focus {
            FormFocus::Pantry => self.pantry_input.input(key),
            FormFocus::TopK => self.top_k_input.input(key),
        };
        if !changed {
            return;
        }
        let msg = match self.focus {
            FormFocus::Pantry => Msg::PantryChanged(first_line(&self.pantry_input)),
            FormFocus::TopK => Msg::TopKChanged(first_line(&self.top_k_input)),
        };
        self.dispatch_msg(msg);
    }

    fn pump_engine_events(&mut self) {
        while let Some(msg) = self.effects.poll() {
            self.dispatch_msg(msg);
        }
    }

    pub(crate) fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects);

        // Replaced results may be shorter than the previous selection.
        let len = self.result_count();
        if self.table_state.selected().is_some_and(|s| s >= len) {
            self.table_state.select(None);
        }
    }

    pub(crate) fn result_count(&self) -> usize {
        match self.state.phase() {
            RequestPhase::Loaded(hits) => hits.len(),
            _ => 0,
        }
    }

    fn move_selection_up(&mut self) {
        if let Some(selected) = self.table_state.selected() {
            if selected > 0 {
                self.table_state.select(Some(selected - 1));
            }
        }
    }

    fn move_selection_down(&mut self) {
        let len = self.result_count();
        if len == 0 {
            return;
        }
        match self.table_state.selected() {
            Some(selected) if selected + 1 < len => self.table_state.select(Some(selected + 1)),
            Some(_) => {}
            None => self.table_state.select(Some(0)),
        }
    }
}

fn single_line_input(text: &str) -> TextArea<'static> {
    let mut input = TextArea::new(vec![text.to_string()]);
    input.set_cursor_line_style(Style::default());
    input.move_cursor(CursorMove::End);
    input
}

pub(crate) fn first_line(input: &TextArea) -> String {
    input.lines().first().cloned().unwrap_or_default()
}
