/*
 * The save-dialog parameter model. Callers configure it through property
 * setters, call `show` (or `show_dialog`) once per dialog use, and read the
 * chosen path back from `file_name`.
 *
 * Each invocation re-derives the encoded filter and the packed file-name
 * buffer from the current property values, so nothing but the selected file
 * name carries over between calls. `show` blocks the caller's thread until the
 * native dialog is dismissed and must not be entered twice concurrently on the
 * same instance; `&mut self` enforces that.
 */
use super::config::DialogSettings;
use super::error::{DialogError, Result};
use super::file_name_buffer::{FILE_NAME_CAPACITY, FileNameBuffer};
use super::filter::{self, FilterPair, OsVersion};
use super::options::{self, DialogOptions};
use super::parameter_block::{
    DialogParameterBlock, NativeSaveDialogOperations, OwnerHandle, OwnerWindowOperations,
    non_empty,
};

use std::fs::File;

/// Tri-state result of the last `show_dialog` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogResult {
    /// The dialog has not been shown since construction or the last reset.
    #[default]
    None,
    Ok,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Accepted(String),
    /// The user cancelled or the native call failed; the two are indistinguishable.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFileDialog {
    filter: Option<String>,
    filter_index: u32,
    title: Option<String>,
    initial_directory: Option<String>,
    default_ext: Option<String>,
    restore_directory: bool,
    dereference_links: bool,
    // Only the first entry is ever read or written; multi-select is not supported.
    file_names: Vec<String>,
    file_title: String,
    last_result: DialogResult,
}

impl Default for SaveFileDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveFileDialog {
    pub fn new() -> Self {
        SaveFileDialog {
            filter: None,
            filter_index: 1,
            title: None,
            initial_directory: None,
            default_ext: None,
            restore_directory: false,
            dereference_links: true,
            file_names: Vec::new(),
            file_title: String::new(),
            last_result: DialogResult::None,
        }
    }

    /// Restores every property to its initial value.
    pub fn reset(&mut self) {
        log::debug!("SaveFileDialog: Resetting all properties to defaults.");
        *self = Self::new();
    }

    pub fn filter(&self) -> &str {
        self.filter.as_deref().unwrap_or("")
    }

    /*
     * Sets the `|`-delimited filter expression. Assigning the current value is
     * a no-op. An odd segment count fails with `InvalidFilterFormat` and keeps
     * the previous filter. An empty string clears the filter.
     */
    pub fn set_filter(&mut self, raw: &str) -> Result<()> {
        if raw == self.filter() {
            return Ok(());
        }
        filter::validate_filter(raw)?;
        self.filter = non_empty(raw);
        log::trace!("SaveFileDialog: Filter set to '{raw}'.");
        Ok(())
    }

    pub fn filter_pairs(&self) -> Vec<FilterPair> {
        filter::parse_filter_pairs(self.filter())
    }

    /// 1-based index of the selected filter. Not range checked.
    pub fn filter_index(&self) -> u32 {
        self.filter_index
    }

    pub fn set_filter_index(&mut self, index: u32) {
        self.filter_index = index;
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = non_empty(title);
    }

    pub fn initial_directory(&self) -> &str {
        self.initial_directory.as_deref().unwrap_or("")
    }

    pub fn set_initial_directory(&mut self, directory: &str) {
        self.initial_directory = non_empty(directory);
    }

    pub fn default_ext(&self) -> &str {
        self.default_ext.as_deref().unwrap_or("")
    }

    /*
     * Sets the fallback extension appended when the typed name has none.
     * One leading dot is dropped, so ".txt" and "txt" are equivalent.
     */
    pub fn set_default_ext(&mut self, value: &str) {
        let stripped = value.strip_prefix('.').unwrap_or(value);
        self.default_ext = non_empty(stripped);
    }

    pub fn restore_directory(&self) -> bool {
        self.restore_directory
    }

    pub fn set_restore_directory(&mut self, restore: bool) {
        self.restore_directory = restore;
    }

    pub fn dereference_links(&self) -> bool {
        self.dereference_links
    }

    pub fn set_dereference_links(&mut self, dereference: bool) {
        self.dereference_links = dereference;
    }

    pub fn file_name(&self) -> &str {
        self.file_names.first().map(String::as_str).unwrap_or("")
    }

    pub fn set_file_name(&mut self, file_name: &str) {
        self.file_names = match non_empty(file_name) {
            Some(name) => vec![name],
            None => Vec::new(),
        };
    }

    /// A copy of the selected names; changing it does not affect the dialog.
    pub fn file_names(&self) -> Vec<String> {
        self.file_names.clone()
    }

    /// Name of the chosen file without its directory, as reported by the OS.
    pub fn file_title(&self) -> &str {
        &self.file_title
    }

    /// Final path component of the current file name.
    pub fn safe_file_name(&self) -> &str {
        self.file_name().rsplit(['\\', '/']).next().unwrap_or("")
    }

    pub fn last_result(&self) -> DialogResult {
        self.last_result
    }

    pub fn options(&self) -> DialogOptions {
        DialogOptions {
            restore_directory: self.restore_directory,
        }
    }

    /*
     * Builds the native parameter block from the current properties. Fails
     * with `FileNameTooLong` before anything is handed to the OS if the
     * current file name cannot fit in the fixed buffer.
     */
    pub fn build_parameter_block(
        &self,
        owner: Option<OwnerHandle>,
        os_version: OsVersion,
    ) -> Result<DialogParameterBlock> {
        let file_name = FileNameBuffer::pack(self.file_name(), FILE_NAME_CAPACITY)?;
        let mut block = DialogParameterBlock::new(file_name);
        block.owner = owner;
        block.filter = filter::encode_filter(self.filter.as_deref(), self.dereference_links, os_version);
        block.filter_index = self.filter_index;
        block.initial_directory = self.initial_directory.clone();
        block.title = self.title.clone();
        block.default_extension = self.default_ext.clone();
        block.flags = options::to_flags(self.options());
        Ok(block)
    }

    /*
     * Shows the native dialog and blocks until it is dismissed. On acceptance
     * the returned path replaces the current file name; on cancel or failure
     * the stored name is left untouched. Exactly one native call is made.
     */
    pub fn show(
        &mut self,
        native: &dyn NativeSaveDialogOperations,
        owner: &dyn OwnerWindowOperations,
    ) -> Result<DialogOutcome> {
        let owner_handle = owner.owner_window_handle();
        if owner_handle.is_none() {
            log::debug!("SaveFileDialog: No active window; showing the dialog unowned.");
        }

        let mut block = self.build_parameter_block(owner_handle, native.os_version())?;
        log::debug!(
            "SaveFileDialog: Showing dialog. Title: '{}', Filter: '{}', Index: {}, Flags: {:?}",
            self.title(),
            self.filter(),
            block.filter_index,
            block.flags
        );

        if !native.show_save_dialog(&mut block) {
            log::debug!("SaveFileDialog: Dialog cancelled or failed; file name unchanged.");
            self.last_result = DialogResult::Cancel;
            return Ok(DialogOutcome::Cancelled);
        }

        let selected = block.file_name.unpack();
        self.set_file_name(&selected);
        self.file_title = block.file_title.unpack();
        self.filter_index = block.filter_index;
        self.last_result = DialogResult::Ok;
        log::debug!("SaveFileDialog: Dialog accepted. Path: '{selected}'");
        Ok(DialogOutcome::Accepted(selected))
    }

    pub fn show_dialog(
        &mut self,
        native: &dyn NativeSaveDialogOperations,
        owner: &dyn OwnerWindowOperations,
    ) -> Result<DialogResult> {
        self.show(native, owner)?;
        Ok(self.last_result)
    }

    /// Creates (or truncates) the selected file for writing.
    pub fn open_file(&self) -> Result<File> {
        let name = self.file_name();
        if name.is_empty() {
            return Err(DialogError::NoFileSelected);
        }
        log::debug!("SaveFileDialog: Creating selected file '{name}'.");
        Ok(File::create(name)?)
    }

    /*
     * Applies persisted settings. The filter is validated first so a bad
     * stored filter leaves the dialog unchanged.
     */
    pub fn apply_settings(&mut self, settings: &DialogSettings) -> Result<()> {
        self.set_filter(&settings.filter)?;
        self.set_filter_index(settings.filter_index);
        self.set_title(&settings.title);
        self.set_initial_directory(&settings.initial_directory);
        self.set_default_ext(&settings.default_ext);
        self.set_restore_directory(settings.restore_directory);
        self.set_file_name(&settings.last_file_name);
        Ok(())
    }

    pub fn to_settings(&self) -> DialogSettings {
        DialogSettings {
            title: self.title().to_string(),
            filter: self.filter().to_string(),
            filter_index: self.filter_index,
            initial_directory: self.initial_directory().to_string(),
            default_ext: self.default_ext().to_string(),
            restore_directory: self.restore_directory,
            last_file_name: self.file_name().to_string(),
        }
    }
}
