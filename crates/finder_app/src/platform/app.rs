use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Local};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use finder_core::{update, AppState, Effect, Msg};
use finder_logging::{finder_info, finder_warn};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use super::config::{load_config, AppConfig, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::logging;
use super::ui::form::{FormUi, KeyAction};
use super::ui::render::{render_ui, StatusLine};

/// Input poll interval; also bounds how long a settled query waits to be shown.
const TICK: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    let (config, config_error) = match load_config(Path::new(CONFIG_FILENAME)) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::initialize(config.log_destination);
    if let Some(err) = config_error {
        finder_warn!("Using default configuration: {}", err);
    }

    let effects =
        EffectRunner::new(&config.client_settings()).context("starting the query engine")?;
    finder_info!("finder_app started against {}", config.base_url);

    enable_raw_mode()?;
    // Dropped on every exit path from here on, unwinding included.
    let _restore = RestoreOnDrop::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = Session::new(config.base_url.clone());
    run_loop(&mut terminal, &mut session, &effects).context("terminal event loop")
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        finder_warn!("Could not leave raw mode: {}", err);
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        finder_warn!("Could not restore the terminal screen: {}", err);
    }
}

/// Runs `restore` once when dropped.
struct RestoreOnDrop<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreOnDrop<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

struct Session {
    state: AppState,
    form: FormUi,
    endpoint: String,
    last_response: Option<DateTime<Local>>,
}

impl Session {
    fn new(endpoint: String) -> Self {
        Self {
            state: AppState::new(),
            form: FormUi::default(),
            endpoint,
            last_response: None,
        }
    }

    fn dispatch_msg(&mut self, msg: Msg, effects: &EffectRunner) {
        effects.enqueue(self.apply(msg));
    }

    fn apply(&mut self, msg: Msg) -> Vec<Effect> {
        if let Msg::QueryCompleted { submission_id, .. } = &msg {
            // Stale completions are dropped by `update` and leave the screen alone.
            if self.state.in_flight() == Some(*submission_id) {
                self.last_response = Some(Local::now());
                self.form.reset_scroll();
            }
        }
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        effects
    }

    fn status_line(&self) -> StatusLine<'_> {
        StatusLine {
            endpoint: &self.endpoint,
            last_response: self
                .last_response
                .map(|at| at.format("%H:%M:%S").to_string()),
        }
    }
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    effects: &EffectRunner,
) -> io::Result<()> {
    let mut redraw = true;
    loop {
        if redraw {
            let view = session.state.view();
            let status = session.status_line();
            terminal.draw(|f| render_ui(f, &view, &session.form, &status))?;
            redraw = false;
        }

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let view = session.state.view();
                    match session.form.handle_key(key, &view) {
                        KeyAction::Quit => return Ok(()),
                        KeyAction::Dispatch(msg) => session.dispatch_msg(msg, effects),
                        KeyAction::Redraw => redraw = true,
                        KeyAction::Ignored => {}
                    }
                }
                Event::Resize(..) => redraw = true,
                _ => {}
            }
        }

        for msg in effects.drain_messages() {
            session.dispatch_msg(msg, effects);
        }
        redraw |= session.state.consume_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use finder_core::{Algorithm, QueryOutcome};
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};

    fn submitted_session() -> (Session, u64) {
        let mut session = Session::new("http://localhost:8000".to_string());
        session.apply(Msg::TargetItemChanged("Pump".to_string()));
        session.apply(Msg::AlgorithmSelected(Some(Algorithm::Hss)));
        let effects = session.apply(Msg::SubmitClicked);
        let id = match effects.as_slice() {
            [Effect::SendQuery { submission_id, .. }] => *submission_id,
            other => panic!("expected one SendQuery, got {other:?}"),
        };
        (session, id)
    }

    fn scroll_down(session: &mut Session) {
        let view = session.state.view();
        let key = KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(session.form.handle_key(key, &view), KeyAction::Redraw);
    }

    #[test]
    fn stale_completion_leaves_status_and_scroll_untouched() {
        let (mut session, id) = submitted_session();
        scroll_down(&mut session);

        session.apply(Msg::QueryCompleted {
            submission_id: id + 1,
            outcome: QueryOutcome::Failure("late".to_string()),
        });
        assert!(session.last_response.is_none());
        assert_eq!(session.form.results_scroll(), 5);
        assert!(session.state.is_submitting());
    }

    #[test]
    fn matching_completion_stamps_status_and_resets_scroll() {
        let (mut session, id) = submitted_session();
        scroll_down(&mut session);

        session.apply(Msg::QueryCompleted {
            submission_id: id,
            outcome: QueryOutcome::Failure("boom".to_string()),
        });
        assert!(session.last_response.is_some());
        assert_eq!(session.form.results_scroll(), 0);
        assert!(!session.state.is_submitting());
    }

    #[test]
    fn restore_runs_when_the_loop_panics() {
        let restored = Cell::new(0);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _restore = RestoreOnDrop::new(|| restored.set(restored.get() + 1));
            panic!("event loop failed");
        }));
        assert!(result.is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn restore_runs_on_early_error_return() {
        let restored = Cell::new(0);
        let setup = || -> io::Result<()> {
            let _restore = RestoreOnDrop::new(|| restored.set(restored.get() + 1));
            Err(io::Error::other("alternate screen unavailable"))
        };
        assert!(setup().is_err());
        assert_eq!(restored.get(), 1);
    }
}
