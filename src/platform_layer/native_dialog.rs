/*
 * Win32 backend for the save dialog. It maps a `DialogParameterBlock` onto
 * `OPENFILENAMEW`, runs the blocking `GetSaveFileNameW` call on the caller's
 * thread, and lets the OS write the chosen path straight into the block's
 * file-name buffer. The owner window is the calling thread's active window.
 */
use super::error::{PlatformError, Result as PlatformResult};
use crate::core::{
    DialogParameterBlock, NativeSaveDialogOperations, OsVersion, OwnerHandle,
    OwnerWindowOperations,
};

use std::ffi::c_void;
use std::mem::size_of;

use windows::{
    Win32::{
        Foundation::{GetLastError, HWND, RPC_E_CHANGED_MODE},
        System::{
            Com::{COINIT_APARTMENTTHREADED, CoInitializeEx, CoUninitialize},
            SystemInformation::GetVersion,
        },
        UI::{
            Controls::{
                Dialogs::{
                    COMMON_DLG_ERRORS, CommDlgExtendedError, GetSaveFileNameW,
                    OPEN_FILENAME_FLAGS, OPENFILENAMEW,
                },
                ICC_STANDARD_CLASSES, INITCOMMONCONTROLSEX, InitCommonControlsEx,
            },
            Input::KeyboardAndMouse::GetActiveWindow,
        },
    },
    core::{HSTRING, PCWSTR, PWSTR},
};

pub struct NativeSaveDialog {
    com_initialized: bool,
}

impl NativeSaveDialog {
    /*
     * Prepares the calling thread for common dialogs: initializes COM as a
     * single-threaded apartment (the Explorer-style dialog hosts shell
     * components) and registers the standard common control classes.
     */
    pub fn new() -> PlatformResult<Self> {
        unsafe {
            let hr = CoInitializeEx(None, COINIT_APARTMENTTHREADED);
            if hr.is_err() && hr != RPC_E_CHANGED_MODE {
                log::error!("NativeSaveDialog: CoInitializeEx failed: {:?}", hr);
                return Err(PlatformError::Win32(hr.into()));
            }
            // RPC_E_CHANGED_MODE means COM is already up in another mode and
            // must not be balanced with CoUninitialize.
            let dialog = NativeSaveDialog {
                com_initialized: hr.is_ok(),
            };

            let icex = INITCOMMONCONTROLSEX {
                dwSize: size_of::<INITCOMMONCONTROLSEX>() as u32,
                dwICC: ICC_STANDARD_CLASSES,
            };
            if !InitCommonControlsEx(&icex).as_bool() {
                // Dropping `dialog` balances the COM initialization above.
                return Err(PlatformError::InitializationFailed(format!(
                    "InitCommonControlsEx failed: {:?}",
                    GetLastError()
                )));
            }

            Ok(dialog)
        }
    }
}

impl Drop for NativeSaveDialog {
    fn drop(&mut self) {
        if self.com_initialized {
            unsafe { CoUninitialize() };
        }
    }
}

fn to_hwnd(handle: OwnerHandle) -> HWND {
    HWND(handle.0 as *mut c_void)
}

fn pcwstr_or_null(value: &Option<HSTRING>) -> PCWSTR {
    value
        .as_ref()
        .map_or(PCWSTR::null(), |h_str| PCWSTR(h_str.as_ptr()))
}

impl NativeSaveDialogOperations for NativeSaveDialog {
    fn show_save_dialog(&self, block: &mut DialogParameterBlock) -> bool {
        let title = block.title.as_deref().map(HSTRING::from);
        let initial_dir = block.initial_directory.as_deref().map(HSTRING::from);
        let default_ext = block.default_extension.as_deref().map(HSTRING::from);
        let filter = block
            .filter
            .as_ref()
            .map_or(PCWSTR::null(), |encoded| PCWSTR(encoded.as_ptr()));
        let max_file = block.file_name.capacity() as u32;
        let max_file_title = block.file_title.capacity() as u32;

        // Custom filter, hook and template stay zeroed via Default.
        let mut ofn = OPENFILENAMEW {
            lStructSize: size_of::<OPENFILENAMEW>() as u32,
            hwndOwner: block.owner.map_or(HWND::default(), to_hwnd),
            lpstrFilter: filter,
            nFilterIndex: block.filter_index,
            lpstrFile: PWSTR(block.file_name.as_mut_slice().as_mut_ptr()),
            nMaxFile: max_file,
            lpstrFileTitle: PWSTR(block.file_title.as_mut_slice().as_mut_ptr()),
            nMaxFileTitle: max_file_title,
            lpstrInitialDir: pcwstr_or_null(&initial_dir),
            lpstrTitle: pcwstr_or_null(&title),
            lpstrDefExt: pcwstr_or_null(&default_ext),
            Flags: OPEN_FILENAME_FLAGS(block.flags.bits()),
            ..Default::default()
        };

        let accepted = unsafe { GetSaveFileNameW(&mut ofn) }.as_bool();
        if accepted {
            block.filter_index = ofn.nFilterIndex;
            log::debug!("NativeSaveDialog: GetSaveFileNameW succeeded.");
        } else {
            // CommDlgExtendedError returns 0 if the user cancelled.
            let error_code = unsafe { CommDlgExtendedError() };
            if error_code != COMMON_DLG_ERRORS(0) {
                log::error!(
                    "NativeSaveDialog: GetSaveFileNameW failed. CommDlgExtendedError: {:?}",
                    error_code
                );
            } else {
                log::debug!("NativeSaveDialog: Dialog cancelled by user (no error).");
            }
        }
        accepted
    }

    fn os_version(&self) -> OsVersion {
        let version = unsafe { GetVersion() };
        OsVersion::new(version & 0xFF, (version >> 8) & 0xFF)
    }
}

impl OwnerWindowOperations for NativeSaveDialog {
    fn owner_window_handle(&self) -> Option<OwnerHandle> {
        let hwnd = unsafe { GetActiveWindow() };
        if hwnd.is_invalid() {
            None
        } else {
            Some(OwnerHandle(hwnd.0 as isize))
        }
    }
}
