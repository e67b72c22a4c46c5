#[cfg(test)]
mod tests {
    use super::super::app_state::*;
    use super::super::commands::Command;
    use super::super::events::Message;
    use crate::api::{GenerationResult, Style};
    use crate::config::Config;
    use std::path::PathBuf;

    fn create_test_state() -> AppState {
        AppState::new(&Config::default())
    }

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn inventory(content: &str) -> GenerationResult {
        GenerationResult {
            filename: "inventory.yml".to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = create_test_state();

        assert_eq!(state.mode, Mode::Main);
        assert_eq!(state.focus, Focus::Search);
        assert!(state.catalog.roles.is_empty());
        assert!(state.catalog.filtered.is_empty());
        assert_eq!(state.form.host, "localhost");
        assert_eq!(state.form.style, Style::Group);
        assert_eq!(state.form.ignore, "");
        assert!(!state.is_generating());
        assert!(state.generation.preview.is_empty());
    }

    #[test]
    fn test_initial_form_follows_config() {
        let config = Config {
            host: "node1.example.org".to_string(),
            style: Style::Hostvars,
            ignore: "web-app-x".to_string(),
            ..Config::default()
        };
        let state = AppState::new(&config);
        assert_eq!(state.form.host, "node1.example.org");
        assert_eq!(state.form.style, Style::Hostvars);
        assert_eq!(state.form.ignore, "web-app-x");
    }

    #[test]
    fn test_start_requests_catalog() {
        let mut state = create_test_state();
        let command = state.start();
        assert_eq!(command, Command::LoadCatalog);
        assert!(state.catalog.is_loading);
    }

    #[test]
    fn test_catalog_loaded_populates_both_lists() {
        let mut state = create_test_state();
        state.start();

        let command = state.update(Message::CatalogLoaded(Ok(roles(&["role-a", "role-b"]))));

        assert_eq!(command, Command::None);
        assert_eq!(state.catalog.roles, vec!["role-a", "role-b"]);
        assert_eq!(state.catalog.filtered, vec!["role-a", "role-b"]);
        assert!(!state.catalog.is_loading);
        assert_eq!(state.ui.message, None);
    }

    #[test]
    fn test_catalog_failure_leaves_catalog_empty() {
        let mut state = create_test_state();
        state.start();

        let command = state.update(Message::CatalogLoaded(Err("connection refused".to_string())));

        assert_eq!(command, Command::None);
        assert!(state.catalog.roles.is_empty());
        assert!(state.catalog.filtered.is_empty());
        assert!(!state.catalog.is_loading);
        assert!(state.ui.message.as_deref().unwrap().contains("connection refused"));
    }

    #[test]
    fn test_query_change_filters_without_network() {
        let mut state = create_test_state();
        state.update(Message::CatalogLoaded(Ok(roles(&[
            "web-app-nextcloud",
            "svc-db-postgres",
            "WEB-APP-gitea",
        ]))));

        let command = state.update(Message::QueryChanged("web-app".to_string()));

        assert_eq!(command, Command::None);
        assert_eq!(state.catalog.filtered, vec!["web-app-nextcloud", "WEB-APP-gitea"]);
        assert_eq!(state.catalog.roles.len(), 3);

        let command = state.update(Message::QueryChanged(String::new()));
        assert_eq!(command, Command::None);
        assert_eq!(state.catalog.filtered, state.catalog.roles);
    }

    #[test]
    fn test_selection_is_clamped_after_filtering() {
        let mut state = create_test_state();
        state.update(Message::CatalogLoaded(Ok(roles(&["a", "b", "c"]))));

        state.update(Message::SelectRole(2));
        assert_eq!(state.catalog.selected_index, 2);

        state.update(Message::SelectRole(5));
        assert_eq!(state.catalog.selected_index, 2);

        state.update(Message::QueryChanged("a".to_string()));
        assert_eq!(state.catalog.selected_index, 0);
    }

    #[test]
    fn test_form_edits() {
        let mut state = create_test_state();

        state.update(Message::HostChanged("db1".to_string()));
        state.update(Message::ToggleStyle);
        state.update(Message::IgnoreChanged("x, y".to_string()));

        assert_eq!(state.form.host, "db1");
        assert_eq!(state.form.style, Style::Hostvars);
        assert_eq!(state.form.ignore, "x, y");

        state.update(Message::ToggleStyle);
        assert_eq!(state.form.style, Style::Group);
    }

    #[test]
    fn test_focus_cycle() {
        let mut state = create_test_state();
        state.update(Message::FocusNext);
        assert_eq!(state.focus, Focus::Host);
        state.update(Message::FocusNext);
        state.update(Message::FocusNext);
        assert_eq!(state.focus, Focus::Ignore);
        state.update(Message::FocusNext);
        assert_eq!(state.focus, Focus::Search);
        state.update(Message::FocusPrevious);
        assert_eq!(state.focus, Focus::Ignore);
    }

    #[test]
    fn test_generate_composes_request() {
        let mut state = create_test_state();
        state.update(Message::ToggleStyle);
        state.update(Message::IgnoreChanged("web-app-x, svc-db-y,,  ".to_string()));

        let command = state.update(Message::GenerateRequested);

        match command {
            Command::Generate { id, request } => {
                assert_eq!(id, 1);
                assert_eq!(request.host, "localhost");
                assert_eq!(request.style, Style::Hostvars);
                assert_eq!(request.ignore, vec!["web-app-x", "svc-db-y"]);
            }
            other => panic!("expected Generate, got {other:?}"),
        }
        assert!(state.is_generating());
    }

    #[test]
    fn test_successful_generation_previews_and_exports_once() {
        let mut state = create_test_state();
        let Command::Generate { id, .. } = state.update(Message::GenerateRequested) else {
            panic!("expected Generate");
        };

        let result = inventory("all:\n  hosts:\n  - localhost\n");
        let command = state.update(Message::GenerationCompleted {
            id,
            result: Ok(result.clone()),
        });

        assert_eq!(command, Command::ExportInventory(result));
        assert_eq!(state.generation.preview, "all:\n  hosts:\n  - localhost\n");
        assert_eq!(state.generation.preview_filename.as_deref(), Some("inventory.yml"));
        assert!(!state.is_generating());

        let command = state.update(Message::ExportFinished(Ok(PathBuf::from(
            "/tmp/inventory.yml",
        ))));
        assert_eq!(
            command,
            Command::ScheduleClearMessage(crate::interactive::constants::MESSAGE_CLEAR_DELAY_MS)
        );
        assert_eq!(
            state.generation.last_export,
            Some(PathBuf::from("/tmp/inventory.yml"))
        );
    }

    #[test]
    fn test_overlapping_generations_last_arrival_wins() {
        let mut state = create_test_state();
        let Command::Generate { id: first, .. } = state.update(Message::GenerateRequested) else {
            panic!("expected Generate");
        };
        let Command::Generate { id: second, .. } = state.update(Message::GenerateRequested)
        else {
            panic!("expected Generate");
        };
        assert_ne!(first, second);
        assert_eq!(state.generation.in_flight, 2);

        // The second request answers first
        let command = state.update(Message::GenerationCompleted {
            id: second,
            result: Ok(inventory("second")),
        });
        assert!(matches!(command, Command::ExportInventory(_)));
        assert!(state.is_generating());

        let command = state.update(Message::GenerationCompleted {
            id: first,
            result: Ok(inventory("first")),
        });
        assert!(matches!(command, Command::ExportInventory(_)));

        assert_eq!(state.generation.preview, "first");
        assert!(!state.is_generating());
    }

    #[test]
    fn test_failed_generation_keeps_previous_preview() {
        let mut state = create_test_state();
        state.update(Message::GenerateRequested);
        state.update(Message::GenerationCompleted {
            id: 1,
            result: Ok(inventory("old")),
        });

        state.update(Message::GenerateRequested);
        let command = state.update(Message::GenerationCompleted {
            id: 2,
            result: Err("backend returned 400 Bad Request: bad style".to_string()),
        });

        assert_eq!(command, Command::None);
        assert_eq!(state.generation.preview, "old");
        assert!(state.ui.message.as_deref().unwrap().contains("bad style"));
        assert!(!state.is_generating());
    }

    #[test]
    fn test_preview_scroll_bounds() {
        let mut state = create_test_state();
        state.generation.preview = (0..8).map(|i| format!("line{i}\n")).collect();

        state.update(Message::PreviewScrollDown);
        assert_eq!(state.ui.preview_scroll, 5);
        state.update(Message::PreviewScrollDown);
        assert_eq!(state.ui.preview_scroll, 7);
        state.update(Message::PreviewScrollUp);
        assert_eq!(state.ui.preview_scroll, 2);
        state.update(Message::PreviewScrollUp);
        assert_eq!(state.ui.preview_scroll, 0);
    }

    #[test]
    fn test_help_mode_transitions() {
        let mut state = create_test_state();
        state.update(Message::ShowHelp);
        assert_eq!(state.mode, Mode::Help);
        state.update(Message::CloseHelp);
        assert_eq!(state.mode, Mode::Main);
    }

    #[test]
    fn test_status_messages() {
        let mut state = create_test_state();
        state.update(Message::SetStatus("hello".to_string()));
        assert_eq!(state.ui.message.as_deref(), Some("hello"));
        state.update(Message::ClearStatus);
        assert_eq!(state.ui.message, None);
    }
}
