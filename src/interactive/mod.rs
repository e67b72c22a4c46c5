use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use crate::api::ApiClient;
use crate::config::Config;
use crate::inventory::export_inventory;

mod application;
pub mod constants;
mod domain;
pub mod ui;


use self::application::api_service::ApiService;
use self::constants::*;
use self::domain::models::{ApiRequest, ApiResponse, Focus, Mode};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

/// The full-screen inventory builder.
pub struct InteractiveApp {
    state: AppState,
    renderer: Renderer,
    api: ApiService,
    responses: Receiver<ApiResponse>,
    output_dir: PathBuf,
    next_catalog_id: u64,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
    should_quit: bool,
}

impl InteractiveApp {
    pub fn new(config: &Config, client: ApiClient, runtime: tokio::runtime::Handle) -> Self {
        let (tx, rx) = mpsc::channel();

        Self {
            state: AppState::new(config),
            renderer: Renderer::new(),
            api: ApiService::new(client, runtime, tx),
            responses: rx,
            output_dir: config.output_dir.clone(),
            next_catalog_id: 0,
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        // Catalog is fetched once, when the screen comes up
        let command = self.state.start();
        self.execute_command(command);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            self.drain_responses();

            self.clear_expired_message();

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_input(key);
                    }
                }
            }
        }
        Ok(())
    }

    /// Apply every backend response that has arrived, in arrival order.
    fn drain_responses(&mut self) {
        while let Ok(response) = self.responses.try_recv() {
            let message = match response {
                ApiResponse::Catalog { id, result } => {
                    tracing::debug!(id, ok = result.is_ok(), "catalog response");
                    Message::CatalogLoaded(result)
                }
                ApiResponse::Generation { id, result } => {
                    tracing::debug!(id, ok = result.is_ok(), "generation response");
                    Message::GenerationCompleted { id, result }
                }
            };
            self.handle_message(message);
        }
    }

    /// Clears the status line once a scheduled delay has elapsed.
    fn clear_expired_message(&mut self) {
        if let Some(timer) = self.message_timer {
            if timer.elapsed() >= Duration::from_millis(self.message_clear_delay) {
                self.message_timer = None;
                self.handle_message(Message::ClearStatus);
            }
        }
    }

    fn handle_input(&mut self, key: KeyEvent) {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    self.should_quit = true;
                    return;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.handle_message(Message::SetStatus(EXIT_PROMPT.to_string()));
            // The prompt is only meaningful while a second press would still quit
            self.execute_command(Command::ScheduleClearMessage(
                DOUBLE_CTRL_C_TIMEOUT_SECS * 1000,
            ));
            return;
        }

        if let Some(message) = self.route_key(key) {
            self.handle_message(message);
        }
    }

    /// Maps a key to a message. Quitting is handled here and produces none.
    fn route_key(&mut self, key: KeyEvent) -> Option<Message> {
        // Components edit their own copy of the fields; bring them up to date first
        self.renderer.sync(&self.state);

        if self.state.mode == Mode::Help {
            return self.renderer.get_help_dialog_mut().handle_key(key);
        }

        // Global keys
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return None;
            }
            KeyCode::F(1) => return Some(Message::ShowHelp),
            KeyCode::Char('?') if self.state.focus == Focus::Style => {
                return Some(Message::ShowHelp);
            }
            KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(Message::GenerateRequested);
            }
            KeyCode::Tab => return Some(Message::FocusNext),
            KeyCode::BackTab => return Some(Message::FocusPrevious),
            _ => {}
        }

        // Focus-specific input handling
        match self.state.focus {
            Focus::Search => match key.code {
                KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
                    self.renderer.get_role_list_mut().handle_key(key)
                }
                KeyCode::Char('p') | KeyCode::Char('n')
                    if key.modifiers == KeyModifiers::CONTROL =>
                {
                    self.renderer.get_role_list_mut().handle_key(key)
                }
                _ => self.renderer.get_search_bar_mut().handle_key(key),
            },
            Focus::Host | Focus::Style | Focus::Ignore => match key.code {
                KeyCode::PageUp | KeyCode::PageDown => {
                    self.renderer.get_preview_mut().handle_key(key)
                }
                _ => self.renderer.get_inventory_form_mut().handle_key(key),
            },
        }
    }

    fn handle_message(&mut self, message: Message) {
        let previous = self.state.ui.message.clone();
        let command = self.state.update(message);

        // A pending clear belongs to the message it was scheduled for
        if self.state.ui.message != previous
            && !matches!(command, Command::ScheduleClearMessage(_))
        {
            self.message_timer = None;
        }

        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::LoadCatalog => {
                self.next_catalog_id += 1;
                self.api.dispatch(ApiRequest::LoadCatalog {
                    id: self.next_catalog_id,
                });
            }
            Command::Generate { id, request } => {
                tracing::info!(id, host = %request.host, style = %request.style, "generating inventory");
                self.api.dispatch(ApiRequest::Generate { id, request });
            }
            Command::ExportInventory(result) => {
                let outcome =
                    export_inventory(&self.output_dir, &result).map_err(|e| format!("{e:#}"));
                if let Err(error) = &outcome {
                    tracing::error!(%error, "export failed");
                }
                self.handle_message(Message::ExportFinished(outcome));
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }
}
