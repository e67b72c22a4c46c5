use crate::api::{GenerationRequest, GenerationResult};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Main,
    Help,
}

/// Which input receives keystrokes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Focus {
    #[default]
    Search,
    Host,
    Style,
    Ignore,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Host,
            Focus::Host => Focus::Style,
            Focus::Style => Focus::Ignore,
            Focus::Ignore => Focus::Search,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Search => Focus::Ignore,
            Focus::Host => Focus::Search,
            Focus::Style => Focus::Host,
            Focus::Ignore => Focus::Style,
        }
    }

    pub fn is_form_field(self) -> bool {
        !matches!(self, Focus::Search)
    }
}

// Requests and responses exchanged with the API worker
#[derive(Clone, Debug)]
pub enum ApiRequest {
    LoadCatalog { id: u64 },
    Generate { id: u64, request: GenerationRequest },
}

#[derive(Debug)]
pub enum ApiResponse {
    Catalog {
        id: u64,
        result: Result<Vec<String>, String>,
    },
    Generation {
        id: u64,
        result: Result<GenerationResult, String>,
    },
}
