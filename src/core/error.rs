use std::io;

// Errors raised by the save-dialog model before or after the native call.
//
// Cancelling the dialog is not represented here: the native call reports user
// cancellation and OS failure through the same boolean, so both surface as
// `DialogOutcome::Cancelled` rather than as an error.
#[derive(Debug)]
pub enum DialogError {
    /// The filter expression has an odd number of `|`-separated segments.
    InvalidFilterFormat(String),
    /// The current file name does not fit in the fixed in/out buffer.
    FileNameTooLong { length: usize, capacity: usize },
    /// An operation needed a selected file but none is set.
    NoFileSelected,
    Io(io::Error),
}

impl From<io::Error> for DialogError {
    fn from(err: io::Error) -> Self {
        DialogError::Io(err)
    }
}

impl std::fmt::Display for DialogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DialogError::InvalidFilterFormat(filter) => write!(
                f,
                "Invalid filter format: '{filter}'. Expected description|pattern pairs."
            ),
            DialogError::FileNameTooLong { length, capacity } => write!(
                f,
                "File name too long: {length} characters, buffer holds at most {}",
                capacity.saturating_sub(1)
            ),
            DialogError::NoFileSelected => write!(f, "No file selected"),
            DialogError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for DialogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DialogError::Io(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DialogError>;
