use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

use tapr::config::{Config, ConfigStore, FileConfigStore};
use tapr::runtime::{EventStream, TrainerEvent};
use tapr::session::Session;
use tapr::texts::{Difficulty, TextBank};
use tapr::TICK_RATE_MS;

/// minimal typing trainer tui with live accuracy and speed readouts
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A minimal typing TUI: a reference text is shown, you retype it, and every keystroke is classified against the reference in real time with live error-rate and chars-per-minute figures."
)]
pub struct Cli {
    /// difficulty of the reference text (defaults to the last one used)
    #[clap(short = 'd', long, value_enum)]
    difficulty: Option<Difficulty>,

    /// custom reference text to type instead of a bundled one
    #[clap(short = 't', long)]
    text: Option<String>,
}

#[derive(Debug)]
pub struct App {
    pub difficulty: Difficulty,
    pub custom_text: Option<String>,
    pub session: Session,
    bank: TextBank,
}

impl App {
    pub fn new(cli: &Cli, stored: &Config) -> Self {
        let difficulty = cli.difficulty.unwrap_or_else(|| stored.difficulty());
        let bank = TextBank::load();
        let reference = cli
            .text
            .clone()
            .unwrap_or_else(|| bank.pick(difficulty));

        let mut session = Session::new();
        // A fresh session is idle; start cannot fail here.
        session
            .start(reference)
            .expect("fresh session must accept start");

        Self {
            difficulty,
            custom_text: cli.text.clone(),
            session,
            bank,
        }
    }

    /// Start over with the same reference text.
    pub fn restart(&mut self) {
        let reference = self
            .session
            .reference()
            .map(str::to_string)
            .or_else(|| self.custom_text.clone())
            .unwrap_or_else(|| self.bank.pick(self.difficulty));
        self.session.reset();
        self.session
            .start(reference)
            .expect("reset session must accept start");
    }

    /// Start over with a newly picked reference text.
    pub fn new_text(&mut self) {
        let reference = self
            .custom_text
            .clone()
            .unwrap_or_else(|| self.bank.pick(self.difficulty));
        self.session.reset();
        self.session
            .start(reference)
            .expect("reset session must accept start");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let mut app = App::new(&cli, &store.load());
    let _ = store.save(&Config::with_difficulty(app.difficulty));

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventStream::spawn(Duration::from_millis(TICK_RATE_MS));
    let result = run(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventStream,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui(app, f))?;

    loop {
        match events.next()? {
            TrainerEvent::Tick => {
                // The session ignores ticks while inactive, so the timer
                // thread can run for the whole process lifetime.
                let _ = app.session.tick();
                if app.session.is_active() {
                    terminal.draw(|f| ui(app, f))?;
                }
            }
            TrainerEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            TrainerEvent::Key(key) => {
                if !handle_key(app, key) {
                    break;
                }
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}

/// Apply one key event. Returns false when the app should exit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let ended = app.session.is_completed() || app.session.is_stopped();

    match key.code {
        KeyCode::Esc => {
            if !ended && app.session.is_active() {
                // First Esc stops the running session; results stay up.
                app.session.stop();
            } else {
                return false;
            }
        }
        KeyCode::Backspace if !ended => {
            let mut input = app.session.input().to_string();
            if input.pop().is_some() {
                let _ = app.session.apply_input(&input);
            }
        }
        KeyCode::Left if ended => app.restart(),
        KeyCode::Right if ended => app.new_text(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) && c == 'c' {
                return false;
            }
            if ended {
                match c {
                    'r' => app.restart(),
                    'n' => app.new_text(),
                    _ => {}
                }
            } else {
                let mut input = app.session.input().to_string();
                input.push(c);
                let _ = app.session.apply_input(&input);
            }
        }
        _ => {}
    }

    true
}

fn ui(app: &mut App, f: &mut Frame) {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::{Modifier, Style},
        widgets::Paragraph,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(f.area());

    let title = Paragraph::new(app.difficulty.to_string())
        .style(Style::default().add_modifier(Modifier::BOLD | Modifier::DIM))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    f.render_widget(&app.session, chunks[1]);
}
