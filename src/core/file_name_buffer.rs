/*
 * Fixed-capacity UTF-16 buffers used to move file names across the native
 * dialog call. The caller seeds the buffer with the current file name, the OS
 * overwrites it with the chosen path, and the result is read back up to the
 * first terminator.
 *
 * Capacity is counted in UTF-16 code units and includes the terminator, so a
 * name must be strictly shorter than the capacity to fit. Oversized names are
 * rejected with `FileNameTooLong`; they are never truncated.
 */
use super::error::{DialogError, Result};

/// Capacity of the file-name buffer handed to the dialog.
pub const FILE_NAME_CAPACITY: usize = 8192;
/// Capacity of the file-title (name without directory) output buffer.
pub const FILE_TITLE_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameBuffer {
    units: Vec<u16>,
}

impl FileNameBuffer {
    /// An all-terminator buffer of the given capacity.
    pub fn empty(capacity: usize) -> Self {
        FileNameBuffer {
            units: vec![0; capacity],
        }
    }

    /*
     * Packs `current_file_name` into a fresh buffer of `capacity` units.
     * Everything after the copied name is zero, so the name is always
     * terminated.
     */
    pub fn pack(current_file_name: &str, capacity: usize) -> Result<Self> {
        let name_units: Vec<u16> = current_file_name.encode_utf16().collect();
        if name_units.len() >= capacity {
            log::warn!(
                "FileNameBuffer: Refusing to pack a {}-unit name into a {}-unit buffer.",
                name_units.len(),
                capacity
            );
            return Err(DialogError::FileNameTooLong {
                length: name_units.len(),
                capacity,
            });
        }
        let mut buffer = Self::empty(capacity);
        buffer.units[..name_units.len()].copy_from_slice(&name_units);
        Ok(buffer)
    }

    /// Contents up to, not including, the first terminator.
    pub fn unpack(&self) -> String {
        let len = self
            .units
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(self.units.len());
        String::from_utf16_lossy(&self.units[..len])
    }

    pub fn capacity(&self) -> usize {
        self.units.len()
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.units
    }

    /// Raw in/out view for the native call.
    pub fn as_mut_slice(&mut self) -> &mut [u16] {
        &mut self.units
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_then_unpack_returns_original_name() {
        for name in ["", "report", r"C:\out\report.txt", "naïve 文件.txt"] {
            let buffer = FileNameBuffer::pack(name, FILE_NAME_CAPACITY).unwrap();
            assert_eq!(buffer.capacity(), FILE_NAME_CAPACITY);
            assert_eq!(buffer.unpack(), name);
        }
    }

    #[test]
    fn test_pack_zero_fills_after_the_name() {
        let buffer = FileNameBuffer::pack("abc", 8).unwrap();
        assert_eq!(buffer.as_slice(), &[97, 98, 99, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_pack_accepts_name_one_shorter_than_capacity() {
        let name = "x".repeat(15);
        let buffer = FileNameBuffer::pack(&name, 16).unwrap();
        assert_eq!(buffer.unpack(), name);
        assert_eq!(buffer.as_slice()[15], 0, "Last unit must stay a terminator");
    }

    #[test]
    fn test_pack_rejects_name_at_or_over_capacity() {
        for len in [16, 17, 100] {
            let name = "y".repeat(len);
            match FileNameBuffer::pack(&name, 16) {
                Err(DialogError::FileNameTooLong { length, capacity }) => {
                    assert_eq!(length, len);
                    assert_eq!(capacity, 16);
                }
                other => panic!("Expected FileNameTooLong for length {len}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_pack_counts_utf16_units_not_chars() {
        // Each emoji is a surrogate pair, so four of them need eight units.
        let name = "😀😀😀😀";
        assert!(FileNameBuffer::pack(name, 8).is_err());
        assert_eq!(FileNameBuffer::pack(name, 9).unwrap().unpack(), name);
    }

    #[test]
    fn test_unpack_stops_at_first_terminator() {
        let mut buffer = FileNameBuffer::pack("seed-name", 32).unwrap();
        let replacement: Vec<u16> = "out".encode_utf16().collect();
        let slice = buffer.as_mut_slice();
        slice[..replacement.len()].copy_from_slice(&replacement);
        slice[replacement.len()] = 0;
        assert_eq!(buffer.unpack(), "out");
    }

    #[test]
    fn test_unpack_without_terminator_uses_whole_buffer() {
        let mut buffer = FileNameBuffer::empty(4);
        buffer.as_mut_slice().copy_from_slice(&[97, 98, 99, 100]);
        assert_eq!(buffer.unpack(), "abcd");
    }
}
