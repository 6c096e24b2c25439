//! Application state modules
//!
//! Grouped state structs owned by CursorWeaveApp. Each struct owns its
//! related fields and poll method; results flow back through StateEvent
//! values instead of direct app mutation.

mod themes;
mod ui;

pub use themes::ThemesState;
pub use ui::{Tab, UiState};

/// Events that state poll methods can return.
#[derive(Debug)]
pub enum StateEvent {
    /// Update the status message
    StatusMessage(String),

    /// Log an info message
    LogInfo(String),

    /// Log an error message
    LogError(String),

    /// An apply operation failed. The workflow absorbs the failure;
    /// surfacing it is the consumer's choice.
    ApplyFailed(String),
}
