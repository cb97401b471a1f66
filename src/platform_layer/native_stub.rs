/*
 * Non-Windows stand-in for the native save dialog. There is no common-dialog
 * subsystem to call, so every invocation is reported as cancelled and no
 * owner window is ever found. It keeps the rest of the crate (and its tests)
 * building on any host.
 */
use super::error::Result as PlatformResult;
use crate::core::{
    DialogParameterBlock, NativeSaveDialogOperations, OsVersion, OwnerHandle,
    OwnerWindowOperations,
};

pub struct NativeSaveDialog;

impl NativeSaveDialog {
    pub fn new() -> PlatformResult<Self> {
        Ok(NativeSaveDialog)
    }
}

impl NativeSaveDialogOperations for NativeSaveDialog {
    fn show_save_dialog(&self, _block: &mut DialogParameterBlock) -> bool {
        log::warn!("NativeSaveDialog (STUB): No native save dialog on this platform; cancelling.");
        false
    }

    fn os_version(&self) -> OsVersion {
        OsVersion::default()
    }
}

impl OwnerWindowOperations for NativeSaveDialog {
    fn owner_window_handle(&self) -> Option<OwnerHandle> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SaveFileDialog;
    use crate::core::save_file_dialog::DialogOutcome;

    #[test]
    fn test_stub_reports_cancel_and_keeps_file_name() {
        crate::initialize_logging();
        let native = NativeSaveDialog::new().unwrap();
        let mut dialog = SaveFileDialog::new();
        dialog.set_file_name("report");

        let outcome = dialog.show(&native, &native).unwrap();

        assert_eq!(outcome, DialogOutcome::Cancelled);
        assert_eq!(dialog.file_name(), "report");
    }
}
