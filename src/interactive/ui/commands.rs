use crate::api::{GenerationRequest, GenerationResult};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    LoadCatalog,
    Generate { id: u64, request: GenerationRequest },
    ExportInventory(GenerationResult),
    ScheduleClearMessage(u64), // delay in milliseconds
}
