use crate::interactive::constants::*;
use crate::interactive::ui::app_state::{AppState, Focus, Mode};
use crate::interactive::ui::components::{
    Component, help_dialog::HelpDialog, inventory_form::InventoryForm, preview::Preview,
    role_list::RoleList, search_bar::SearchBar, status_bar::StatusBar,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub struct Renderer {
    search_bar: SearchBar,
    role_list: RoleList,
    inventory_form: InventoryForm,
    preview: Preview,
    status_bar: StatusBar,
    help_dialog: HelpDialog,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            role_list: RoleList::new(),
            inventory_form: InventoryForm::new(),
            preview: Preview::new(),
            status_bar: StatusBar::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        self.sync(state);
        self.render_main(f);
        if state.mode == Mode::Help {
            self.help_dialog.render(f, f.area());
        }
    }

    /// Push the current state into the components before drawing.
    pub fn sync(&mut self, state: &AppState) {
        let catalog = &state.catalog;

        self.search_bar.set_query(&catalog.query);
        self.search_bar.set_focused(state.focus == Focus::Search);
        self.search_bar.set_loading(catalog.is_loading);
        self.search_bar
            .set_counts(catalog.filtered.len(), catalog.roles.len());

        self.role_list.set_roles(&catalog.filtered);
        self.role_list.set_selected_index(catalog.selected_index);
        self.role_list.set_highlight(state.focus == Focus::Search);
        self.role_list.set_empty_message(if catalog.is_loading {
            "Loading roles..."
        } else if catalog.roles.is_empty() {
            "No roles available"
        } else {
            "No roles match the search"
        });

        self.inventory_form
            .set_values(&state.form.host, state.form.style, &state.form.ignore);
        self.inventory_form.set_focus(Some(state.focus));
        self.inventory_form.set_in_flight(state.generation.in_flight);

        self.preview.set_content(
            &state.generation.preview,
            state.generation.preview_filename.as_deref(),
        );
        self.preview.set_scroll(state.ui.preview_scroll);

        self.status_bar.set_message(state.ui.message.clone());
    }

    fn render_main(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Percentage(ROLE_LIST_PERCENT),
                Constraint::Length(FORM_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(f.area());

        render_header(f, chunks[0]);
        self.search_bar.render(f, chunks[1]);
        self.role_list.render(f, chunks[2]);
        self.inventory_form.render(f, chunks[3]);
        self.preview.render(f, chunks[4]);
        self.status_bar.render(f, chunks[5]);
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_role_list_mut(&mut self) -> &mut RoleList {
        &mut self.role_list
    }

    pub fn get_inventory_form_mut(&mut self) -> &mut InventoryForm {
        &mut self.inventory_form
    }

    pub fn get_preview_mut(&mut self) -> &mut Preview {
        &mut self.preview
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Infinito Inventory Builder",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Generate Ansible inventories interactively from invokable Infinito.Nexus roles.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
