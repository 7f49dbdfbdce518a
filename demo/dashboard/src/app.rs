//! TUI Application state and event handling.

use crate::form::{Field, PortfolioForm};
use crate::screens;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use risk_models::assessment::{assess, RiskAssessment};
use risk_models::portfolio::PortfolioConfig;
use std::io::{self, Stdout};
use std::time::Duration;

/// Available screens in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Inputs with the payoff and scenario charts
    Assessment,
    /// Explanatory text
    Concepts,
}

impl Screen {
    /// Get screen title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Assessment => "Risk Assessment",
            Self::Concepts => "Key Concepts",
        }
    }

    /// The other screen
    pub fn toggle(self) -> Self {
        match self {
            Self::Assessment => Self::Concepts,
            Self::Concepts => Self::Assessment,
        }
    }
}

/// Everything the dashboard renders, independent of the terminal.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Current screen
    pub screen: Screen,
    /// Current inputs
    pub form: PortfolioForm,
    /// Inputs restored by reset
    initial_form: PortfolioForm,
    /// Selected sidebar field
    pub selected: Field,
    /// Last successful assessment
    pub assessment: Option<RiskAssessment>,
    /// Validation message for the current inputs, if they are invalid
    pub status: Option<String>,
    /// Exit flag
    pub should_quit: bool,
}

impl DashboardState {
    /// Creates the state from starting inputs and assesses them once.
    pub fn new(config: &PortfolioConfig) -> Self {
        let form = PortfolioForm::from(config);
        let mut state = Self {
            screen: Screen::Assessment,
            initial_form: form.clone(),
            form,
            selected: Field::Notional,
            assessment: None,
            status: None,
            should_quit: false,
        };
        state.reassess();
        state
    }

    /// Recomputes both charts from the current inputs.
    ///
    /// On a validation error the previous charts stay on screen and the
    /// message is shown in the status line.
    pub fn reassess(&mut self) {
        match self.form.to_config().and_then(|config| assess(&config)) {
            Ok(assessment) => {
                tracing::debug!(
                    option_type = %assessment.config.option_type(),
                    strike = assessment.config.strike(),
                    scenarios = assessment.scenario_risks.len(),
                    "Reassessed portfolio"
                );
                self.assessment = Some(assessment);
                self.status = None;
            }
            Err(err) => {
                tracing::debug!(kind = err.kind(), "Inputs rejected: {}", err);
                self.status = Some(err.to_string());
            }
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) {
        let changed = match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                false
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.screen = self.screen.toggle();
                false
            }
            KeyCode::Char('r') => {
                self.form = self.initial_form.clone();
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.previous();
                false
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = self.selected.next();
                false
            }
            KeyCode::Left | KeyCode::Char('h') => self.form.step(self.selected, -1),
            KeyCode::Right | KeyCode::Char('l') => self.form.step(self.selected, 1),
            KeyCode::Char(' ') | KeyCode::Enter => self.form.activate(self.selected),
            _ => false,
        };

        if changed {
            self.reassess();
        }
    }
}

/// TUI Application state
pub struct TuiApp {
    /// Dashboard state
    state: DashboardState,
    /// Terminal
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiApp {
    /// Create a new TUI application
    pub fn new(config: &PortfolioConfig) -> Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            state: DashboardState::new(config),
            terminal,
        })
    }

    /// Run the TUI event loop
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let state = &self.state;
            self.terminal.draw(|frame| {
                Self::draw(frame, state);
            })?;

            // Handle events with timeout so resizes redraw promptly
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.state.handle_key(key.code);
                    }
                }
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Draw the current screen
    fn draw(frame: &mut Frame, state: &DashboardState) {
        let area = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Footer
            ])
            .split(area);

        screens::draw_header(frame, chunks[0], state.screen);

        match state.screen {
            Screen::Assessment => screens::draw_assessment(frame, chunks[1], state),
            Screen::Concepts => screens::draw_concepts(frame, chunks[1]),
        }

        screens::draw_footer(frame, chunks[2], state.status.as_deref());
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
