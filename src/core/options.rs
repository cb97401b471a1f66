use bitflags::bitflags;

bitflags! {
    /// Option bits understood by the native save dialog. Values match the
    /// common-dialog `OFN_*` constants so the bitmask passes through unchanged.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OptionFlags: u32 {
        /// Ask before replacing an existing file.
        const OVERWRITE_PROMPT = 0x0000_0002;
        /// Leave the process working directory untouched.
        const NO_CHANGE_DIR = 0x0000_0008;
        /// Do not probe the target by creating and deleting a test file.
        const NO_TEST_FILE_CREATE = 0x0001_0000;
    }
}

/// Caller-configurable dialog behaviors. The overwrite prompt and the
/// suppressed existence probe are always on and have no toggle here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialogOptions {
    pub restore_directory: bool,
}

pub fn to_flags(options: DialogOptions) -> OptionFlags {
    let mut flags = OptionFlags::NO_TEST_FILE_CREATE | OptionFlags::OVERWRITE_PROMPT;
    if options.restore_directory {
        flags |= OptionFlags::NO_CHANGE_DIR;
    }
    flags
}
