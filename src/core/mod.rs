/*
 * Platform-agnostic part of the save dialog: the parameter model, the pure
 * marshaling functions that fill the native parameter block (filter encoding,
 * file-name buffer packing, option flags), and persisted settings. Nothing in
 * here calls the OS; the native call is reached through
 * `NativeSaveDialogOperations`.
 */
pub mod config;
pub mod error;
pub mod file_name_buffer;
pub mod filter;
pub mod options;
pub mod parameter_block;
pub mod path_utils;
pub mod save_file_dialog;


pub use config::{ConfigError, ConfigManagerOperations, CoreConfigManager, DialogSettings};
pub use error::DialogError;
pub use file_name_buffer::{FILE_NAME_CAPACITY, FILE_TITLE_CAPACITY, FileNameBuffer};
pub use filter::{FilterPair, OsVersion, encode_filter};
pub use options::{DialogOptions, OptionFlags, to_flags};
pub use parameter_block::{
    DialogParameterBlock, NativeSaveDialogOperations, OwnerHandle, OwnerWindowOperations,
    PARAMETER_BLOCK_VERSION,
};
pub use save_file_dialog::{DialogOutcome, DialogResult, SaveFileDialog};
