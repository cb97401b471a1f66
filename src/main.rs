// src/main.rs

use save_file_dialog::core::{ConfigManagerOperations, CoreConfigManager};
use save_file_dialog::{APP_NAME, DialogOutcome, NativeSaveDialog, SaveFileDialog};

use std::process::ExitCode;

const DEFAULT_FILTER: &str = "Text files (*.txt)|*.txt|All files (*.*)|*.*";

/*
 * Demo entry point: restores the last used dialog settings, shows the native
 * "Save As" dialog once and prints the chosen path. An optional first argument
 * seeds the file name. On acceptance the settings, including the new path,
 * are persisted for the next run.
 */
fn main() -> ExitCode {
    save_file_dialog::initialize_logging();

    let config_manager = CoreConfigManager::new();
    let mut dialog = SaveFileDialog::new();

    match config_manager.load_dialog_settings(APP_NAME) {
        Ok(Some(settings)) => {
            if let Err(e) = dialog.apply_settings(&settings) {
                log::warn!("main: Ignoring stored dialog settings: {e}");
            }
        }
        Ok(None) => {
            log::debug!("main: No stored dialog settings; using defaults.");
            if let Err(e) = dialog.set_filter(DEFAULT_FILTER) {
                log::error!("main: Default filter rejected: {e}");
            }
            dialog.set_default_ext(".txt");
            dialog.set_title("Save As");
            dialog.set_restore_directory(true);
        }
        Err(e) => log::warn!("main: Could not load dialog settings: {e}"),
    }

    if let Some(seed) = std::env::args().nth(1) {
        dialog.set_file_name(&seed);
    }

    let native = match NativeSaveDialog::new() {
        Ok(native) => native,
        Err(e) => {
            log::error!("main: Native dialog unavailable: {e}");
            return ExitCode::from(2);
        }
    };

    match dialog.show(&native, &native) {
        Ok(DialogOutcome::Accepted(path)) => {
            println!("{path}");
            if let Err(e) = config_manager.save_dialog_settings(APP_NAME, &dialog.to_settings()) {
                log::warn!("main: Could not save dialog settings: {e}");
            }
            ExitCode::SUCCESS
        }
        Ok(DialogOutcome::Cancelled) => {
            log::info!("main: Dialog cancelled.");
            ExitCode::from(1)
        }
        Err(e) => {
            log::error!("main: Could not show dialog: {e}");
            ExitCode::from(2)
        }
    }
}
