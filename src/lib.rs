/*
 * A "Save As" file picker that delegates the dialog itself to the host's
 * common-dialog subsystem. `core` holds the parameter model and the pure
 * marshaling into the native parameter block; `platform_layer` owns the
 * native call.
 */
pub mod core;
pub mod platform_layer;

pub use crate::core::{
    DialogError, DialogOutcome, DialogResult, DialogSettings, SaveFileDialog,
};
pub use platform_layer::NativeSaveDialog;

use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::File;
use std::sync::Once;

pub const APP_NAME: &str = "SaveFileDialog";
const LOG_FILE_NAME: &str = "save_file_dialog.log";

static LOGGING_INIT: Once = Once::new();

/*
 * Installs the global logger once per process: Debug and above to the
 * terminal, and Trace to a log file in the application's config directory
 * when that directory is available. Safe to call repeatedly, which tests do.
 */
pub fn initialize_logging() {
    LOGGING_INIT.call_once(|| {
        let config = ConfigBuilder::new()
            .set_time_format_rfc3339()
            .set_thread_level(LevelFilter::Off)
            .build();

        let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
            LevelFilter::Debug,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )];

        if let Some(config_dir) = crate::core::path_utils::get_base_app_config_local_dir(APP_NAME) {
            match File::create(config_dir.join(LOG_FILE_NAME)) {
                Ok(file) => loggers.push(WriteLogger::new(LevelFilter::Trace, config, file)),
                Err(e) => eprintln!("Warning: could not create log file: {e}"),
            }
        }

        if let Err(e) = CombinedLogger::init(loggers) {
            eprintln!("Warning: logger already initialized: {e}");
        }
    });
}
