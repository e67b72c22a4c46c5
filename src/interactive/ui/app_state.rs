use crate::api::Style;
use crate::config::Config;
use crate::interactive::constants::*;
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use crate::inventory::{compose_request, filter_roles};
use std::path::PathBuf;

// Re-export Mode and Focus
pub use crate::interactive::domain::models::{Focus, Mode};

/// All state of the interactive screen. Owned by the event loop and lent to
/// the renderer.
pub struct AppState {
    pub mode: Mode,
    pub focus: Focus,
    pub catalog: CatalogState,
    pub form: FormState,
    pub generation: GenerationState,
    pub ui: UiState,
}

pub struct CatalogState {
    /// Authoritative, unfiltered role list.
    pub roles: Vec<String>,
    /// `roles` narrowed by `query`. Always a subsequence of `roles`.
    pub filtered: Vec<String>,
    pub query: String,
    pub selected_index: usize,
    pub is_loading: bool,
}

pub struct FormState {
    pub host: String,
    pub style: Style,
    /// Raw comma-separated text; parsed when a request is composed.
    pub ignore: String,
}

pub struct GenerationState {
    pub in_flight: usize,
    pub next_request_id: u64,
    /// Content of the most recently arrived inventory.
    pub preview: String,
    pub preview_filename: Option<String>,
    pub last_export: Option<PathBuf>,
}

pub struct UiState {
    pub message: Option<String>,
    pub preview_scroll: u16,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            mode: Mode::Main,
            focus: Focus::Search,
            catalog: CatalogState {
                roles: Vec::new(),
                filtered: Vec::new(),
                query: String::new(),
                selected_index: 0,
                is_loading: false,
            },
            form: FormState {
                host: config.host.clone(),
                style: config.style,
                ignore: config.ignore.clone(),
            },
            generation: GenerationState {
                in_flight: 0,
                next_request_id: 1,
                preview: String::new(),
                preview_filename: None,
                last_export: None,
            },
            ui: UiState {
                message: None,
                preview_scroll: 0,
            },
        }
    }

    /// Marks the catalog as loading and asks for it to be fetched.
    pub fn start(&mut self) -> Command {
        self.catalog.is_loading = true;
        self.ui.message = Some("[loading roles...]".to_string());
        Command::LoadCatalog
    }

    pub fn is_generating(&self) -> bool {
        self.generation.in_flight > 0
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::CatalogLoaded(Ok(roles)) => {
                self.catalog.is_loading = false;
                self.catalog.roles = roles;
                self.refilter();
                self.ui.message = None;
                Command::None
            }
            Message::CatalogLoaded(Err(error)) => {
                // Catalog stays empty; nothing is retried
                self.catalog.is_loading = false;
                self.ui.message = Some(format!("Failed to load roles: {error}"));
                Command::None
            }
            Message::QueryChanged(query) => {
                self.catalog.query = query;
                self.refilter();
                Command::None
            }
            Message::SelectRole(index) => {
                if index < self.catalog.filtered.len() {
                    self.catalog.selected_index = index;
                }
                Command::None
            }
            Message::HostChanged(host) => {
                self.form.host = host;
                Command::None
            }
            Message::ToggleStyle => {
                self.form.style = self.form.style.toggle();
                Command::None
            }
            Message::IgnoreChanged(ignore) => {
                self.form.ignore = ignore;
                Command::None
            }
            Message::FocusNext => {
                self.focus = self.focus.next();
                Command::None
            }
            Message::FocusPrevious => {
                self.focus = self.focus.previous();
                Command::None
            }
            Message::GenerateRequested => {
                // Overlapping requests are allowed; each one resolves on its own
                let id = self.generation.next_request_id;
                self.generation.next_request_id += 1;
                self.generation.in_flight += 1;
                self.ui.message = Some("[generating...]".to_string());
                let request =
                    compose_request(&self.form.host, self.form.style, &self.form.ignore);
                Command::Generate { id, request }
            }
            Message::GenerationCompleted { id, result } => {
                self.generation.in_flight = self.generation.in_flight.saturating_sub(1);
                match result {
                    Ok(result) => {
                        tracing::debug!(id, filename = %result.filename, "applying inventory");
                        // Last arrival wins, regardless of request order
                        self.generation.preview = result.content.clone();
                        self.generation.preview_filename = Some(result.filename.clone());
                        self.ui.preview_scroll = 0;
                        self.ui.message = None;
                        Command::ExportInventory(result)
                    }
                    Err(error) => {
                        self.ui.message = Some(format!("Generation failed: {error}"));
                        Command::None
                    }
                }
            }
            Message::ExportFinished(Ok(path)) => {
                self.ui.message = Some(format!("✓ Saved {}", path.display()));
                self.generation.last_export = Some(path);
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::ExportFinished(Err(error)) => {
                self.ui.message = Some(format!("Failed to save inventory: {error}"));
                Command::None
            }
            Message::PreviewScrollUp => {
                self.ui.preview_scroll = self.ui.preview_scroll.saturating_sub(PREVIEW_SCROLL_STEP);
                Command::None
            }
            Message::PreviewScrollDown => {
                let lines = self.generation.preview.lines().count().saturating_sub(1);
                let max_scroll = u16::try_from(lines).unwrap_or(u16::MAX);
                self.ui.preview_scroll = self
                    .ui
                    .preview_scroll
                    .saturating_add(PREVIEW_SCROLL_STEP)
                    .min(max_scroll);
                Command::None
            }
            Message::ShowHelp => {
                self.mode = Mode::Help;
                Command::None
            }
            Message::CloseHelp => {
                self.mode = Mode::Main;
                Command::None
            }
            Message::SetStatus(status) => {
                self.ui.message = Some(status);
                Command::None
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
        }
    }

    fn refilter(&mut self) {
        self.catalog.filtered = filter_roles(&self.catalog.roles, &self.catalog.query);
        if self.catalog.selected_index >= self.catalog.filtered.len() {
            self.catalog.selected_index = 0;
        }
    }
}
