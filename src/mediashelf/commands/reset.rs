use crate::commands::{CmdMessage, CmdResult};
use crate::confirm::ConfirmOptions;
use crate::error::Result;
use crate::store::{clear_all, StorageBackend};

pub fn confirmation() -> ConfirmOptions {
    ConfirmOptions::default()
        .with_title("Confirm Reset")
        .with_message(
            "Are you sure you want to clear every collection? This action cannot be undone.",
        )
        .with_confirm_label("Reset")
}

pub fn run<B: StorageBackend>(backend: &B) -> Result<CmdResult> {
    clear_all(backend)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(
        "All collections cleared. They will be restored from the samples on next use.",
    ));
    Ok(result)
}
