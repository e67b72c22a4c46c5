use crate::api::GenerationResult;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub enum Message {
    // Catalog events
    CatalogLoaded(Result<Vec<String>, String>),
    QueryChanged(String),
    SelectRole(usize),

    // Form events
    HostChanged(String),
    ToggleStyle,
    IgnoreChanged(String),
    FocusNext,
    FocusPrevious,

    // Generation events
    GenerateRequested,
    GenerationCompleted {
        id: u64,
        result: Result<GenerationResult, String>,
    },
    ExportFinished(Result<PathBuf, String>),

    // Preview
    PreviewScrollUp,
    PreviewScrollDown,

    // Mode changes
    ShowHelp,
    CloseHelp,

    // UI events
    SetStatus(String),
    ClearStatus,
}
