use std::io::{self, Stdout};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use classifier_core::{update, FormState, Msg};
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use engine_logging::{engine_info, engine_warn};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::config::{load_config, AppConfig};
use super::effects::EffectRunner;
use super::input::{map_key, map_paste, KeyAction, ListCursor};
use super::ui;

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn run_app() -> Result<()> {
    let (config, config_error) = match load_config(Path::new(".")) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    engine_logging::initialize(
        config.log_destination(),
        engine_logging::parse_level(&config.log_level),
    );
    if let Some(err) = config_error {
        engine_warn!("Using default configuration: {}", err);
    }
    engine_info!("Starting classifier, endpoint={}", config.endpoint);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(config.classify_settings(), msg_tx)
        .context("start classification engine")?;

    let mut terminal = enter_terminal()?;
    let mut app = App::new(runner, msg_rx);
    let result = app.run(&mut terminal);
    let restored = restore_terminal(&mut terminal);

    engine_info!("Classifier exiting");
    result.and(restored)
}

fn enter_terminal() -> Result<Tui> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("create terminal")
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )
    .context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")
}

struct App {
    state: FormState,
    cursor: ListCursor,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    needs_redraw: bool,
}

impl App {
    fn new(runner: EffectRunner, msg_rx: mpsc::Receiver<Msg>) -> Self {
        Self {
            state: FormState::new(),
            cursor: ListCursor::default(),
            runner,
            msg_rx,
            needs_redraw: true,
        }
    }

    fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        loop {
            self.process_pending_messages();

            if self.needs_redraw {
                let view = self.state.view();
                let cursor = self.cursor;
                terminal
                    .draw(|frame| ui::render::render(frame, &view, cursor))
                    .context("draw frame")?;
                self.needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(50)).context("poll event")? {
                continue;
            }

            let action = match event::read().context("read event")? {
                Event::Key(key) => map_key(&self.state.view(), &mut self.cursor, key),
                Event::Paste(text) => map_paste(&self.state.view(), &text),
                Event::Resize(_, _) => KeyAction::Redraw,
                _ => KeyAction::Ignore,
            };

            match action {
                KeyAction::Dispatch(msg) => self.dispatch_msg(msg),
                KeyAction::Redraw => self.needs_redraw = true,
                KeyAction::Quit => return Ok(()),
                KeyAction::Ignore => {}
            }
        }
    }

    fn process_pending_messages(&mut self) {
        let inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        for msg in inbox {
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.needs_redraw = true;
        }
        self.state = state;
        self.runner.enqueue(effects);
    }
}
