/*
 * Defines the record passed to the native save dialog and the two seams the
 * dialog model calls through: the blocking dialog call itself and the lookup
 * of an owner window. The record only carries data; the filter and file-name
 * encodings that fill it live in `filter` and `file_name_buffer`.
 */
use super::file_name_buffer::{FILE_NAME_CAPACITY, FILE_TITLE_CAPACITY, FileNameBuffer};
use super::filter::OsVersion;
use super::options::OptionFlags;

/// Bumped whenever a field is added to or removed from `DialogParameterBlock`.
pub const PARAMETER_BLOCK_VERSION: u32 = 1;

/// Opaque native handle of the window that owns the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerHandle(pub isize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogParameterBlock {
    pub struct_version: u32,
    pub owner: Option<OwnerHandle>,
    /// Encoded, doubly-terminated filter list, or `None` for no filter.
    pub filter: Option<Vec<u16>>,
    /// 1-based index into the filter list.
    pub filter_index: u32,
    /// In/out buffer: seeded with the current name, overwritten with the choice.
    pub file_name: FileNameBuffer,
    /// Out buffer for the chosen name without its directory.
    pub file_title: FileNameBuffer,
    pub initial_directory: Option<String>,
    pub title: Option<String>,
    pub default_extension: Option<String>,
    pub flags: OptionFlags,
}

impl DialogParameterBlock {
    pub fn new(file_name: FileNameBuffer) -> Self {
        DialogParameterBlock {
            struct_version: PARAMETER_BLOCK_VERSION,
            owner: None,
            filter: None,
            filter_index: 1,
            file_name,
            file_title: FileNameBuffer::empty(FILE_TITLE_CAPACITY),
            initial_directory: None,
            title: None,
            default_extension: None,
            flags: OptionFlags::empty(),
        }
    }
}

impl Default for DialogParameterBlock {
    fn default() -> Self {
        Self::new(FileNameBuffer::empty(FILE_NAME_CAPACITY))
    }
}

/// Maps an empty string to `None` so the native side receives a null pointer.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/*
 * The blocking native "Save As" call. Implementations show the dialog, and on
 * acceptance leave the chosen path in `block.file_name` and return true. A
 * user cancel and an OS failure both return false.
 */
pub trait NativeSaveDialogOperations {
    fn show_save_dialog(&self, block: &mut DialogParameterBlock) -> bool;
    fn os_version(&self) -> OsVersion;
}

/// Supplies the window that should own the dialog, if any.
pub trait OwnerWindowOperations {
    fn owner_window_handle(&self) -> Option<OwnerHandle>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_block_is_versioned_and_empty() {
        let block = DialogParameterBlock::default();
        assert_eq!(block.struct_version, PARAMETER_BLOCK_VERSION);
        assert_eq!(block.file_name.capacity(), FILE_NAME_CAPACITY);
        assert_eq!(block.file_title.capacity(), FILE_TITLE_CAPACITY);
        assert_eq!(block.file_name.unpack(), "");
        assert!(block.owner.is_none());
        assert!(block.filter.is_none());
        assert_eq!(block.filter_index, 1);
    }

    #[test]
    fn test_non_empty_normalizes_empty_strings() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("Save report"), Some("Save report".to_string()));
    }
}
