mod confirm;
mod engine;
mod log;

pub use confirm::{is_affirmative, AssumeYes, Confirmer, StdinConfirmer};
pub use engine::{
    confirm_and_delete, delete_entries, DeleteEvent, DeletionFailure, DeletionOutcome,
    DeletionReport, FailureKind, CONFIRM_PROMPT,
};
pub use log::{DeletionLog, LOG_FILE_NAME};
