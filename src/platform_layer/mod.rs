/*
 * Native side of the save dialog. On Windows `NativeSaveDialog` drives the
 * common-dialog `GetSaveFileNameW` call; elsewhere a stub with the same
 * surface reports every invocation as cancelled.
 */
pub mod error;

#[cfg(target_os = "windows")]
mod native_dialog;
#[cfg(target_os = "windows")]
pub use native_dialog::NativeSaveDialog;

#[cfg(not(target_os = "windows"))]
mod native_stub;
#[cfg(not(target_os = "windows"))]
pub use native_stub::NativeSaveDialog;

pub use error::{PlatformError, Result as PlatformResult};
