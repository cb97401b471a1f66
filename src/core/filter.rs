/*
 * Handles the filter expression shown in the dialog's "Save as type" list.
 * Callers author filters as a single `|`-delimited string of description and
 * pattern pairs, e.g. "Text files|*.txt|All files|*.*". This module validates
 * that form and encodes it into the null-delimited, doubly-null-terminated
 * UTF-16 list the common dialog expects.
 *
 * Encoding is a pure function of the filter text, the link-dereferencing
 * setting and the host OS version. The dialog model re-encodes on every
 * invocation and never caches the result.
 */
use super::error::{DialogError, Result};

pub const FILTER_DELIMITER: char = '|';
pub const FILTER_TERMINATOR: u16 = 0;

// Substituted for an empty filter on hosts that resolve shortcuts incorrectly
// when handed a null filter list.
const LINK_DEREFERENCE_FILTER: &str = " |*.*";

/// Host OS version as reported by the native backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
}

impl OsVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        OsVersion { major, minor }
    }

    /*
     * Windows 5.0 and later fail to dereference shortcut links in the save
     * dialog when no filter list is supplied.
     */
    pub fn mishandles_null_filter(&self) -> bool {
        self.major >= 5
    }
}

/// One entry of the "Save as type" list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPair {
    pub description: String,
    pub patterns: String,
}

/*
 * Checks that a non-empty filter splits into an even number of segments, so
 * every description has exactly one pattern list. An empty filter is valid
 * and means "no filter".
 */
pub fn validate_filter(filter: &str) -> Result<()> {
    if filter.is_empty() {
        return Ok(());
    }
    let segment_count = filter.split(FILTER_DELIMITER).count();
    if segment_count % 2 != 0 {
        log::debug!(
            "Filter: Rejected '{filter}' with {segment_count} segments (expected an even count)."
        );
        return Err(DialogError::InvalidFilterFormat(filter.to_string()));
    }
    Ok(())
}

/*
 * Splits a validated filter into its ordered description/pattern pairs.
 * Returns an empty list for an empty or malformed filter.
 */
pub fn parse_filter_pairs(filter: &str) -> Vec<FilterPair> {
    if filter.is_empty() || validate_filter(filter).is_err() {
        return Vec::new();
    }
    let segments: Vec<&str> = filter.split(FILTER_DELIMITER).collect();
    segments
        .chunks_exact(2)
        .map(|pair| FilterPair {
            description: pair[0].to_string(),
            patterns: pair[1].to_string(),
        })
        .collect()
}

/*
 * Encodes a filter expression into the common dialog's wire form: every
 * delimiter becomes a terminator and two terminators close the list.
 *
 * An unset or empty filter normally encodes to `None`, which tells the OS
 * there is no filter list. When links are dereferenced on a host that
 * mishandles a null filter, the blank "all files" filter is encoded instead.
 */
pub fn encode_filter(
    filter: Option<&str>,
    dereference_links: bool,
    os_version: OsVersion,
) -> Option<Vec<u16>> {
    let filter = match filter {
        Some(f) if !f.is_empty() => f,
        _ => {
            if dereference_links && os_version.mishandles_null_filter() {
                log::trace!(
                    "Filter: Substituting blank filter for link dereferencing on OS {}.{}",
                    os_version.major,
                    os_version.minor
                );
                LINK_DEREFERENCE_FILTER
            } else {
                return None;
            }
        }
    };

    let mut encoded: Vec<u16> = filter
        .encode_utf16()
        .map(|unit| {
            if unit == FILTER_DELIMITER as u16 {
                FILTER_TERMINATOR
            } else {
                unit
            }
        })
        .collect();
    encoded.push(FILTER_TERMINATOR);
    encoded.push(FILTER_TERMINATOR);
    Some(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_validate_filter_accepts_even_segment_counts() {
        assert!(validate_filter("").is_ok());
        assert!(validate_filter("Text|*.txt").is_ok());
        assert!(validate_filter("Text|*.txt|All|*.*").is_ok());
        assert!(validate_filter("|").is_ok(), "Two empty segments still pair up");
    }

    #[test]
    fn test_validate_filter_rejects_odd_segment_counts() {
        for bad in ["Text", "Text|*.txt|All", "Text|*.txt|", "||"] {
            match validate_filter(bad) {
                Err(DialogError::InvalidFilterFormat(f)) => assert_eq!(f, bad),
                other => panic!("Expected InvalidFilterFormat for '{bad}', got {other:?}"),
            }
        }
    }

    #[test]
    fn test_encode_filter_replaces_delimiters_and_double_terminates() {
        let encoded = encode_filter(Some("Text|*.txt|All|*.*"), true, OsVersion::new(10, 0))
            .expect("Non-empty filter should encode");

        let mut expected = wide("Text\0*.txt\0All\0*.*");
        expected.extend_from_slice(&[0, 0]);
        assert_eq!(encoded, expected);
        assert_eq!(&encoded[encoded.len() - 2..], &[0, 0]);
    }

    #[test]
    fn test_encode_filter_substitutes_blank_filter_on_affected_os() {
        let mut expected = wide(" \0*.*");
        expected.extend_from_slice(&[0, 0]);

        assert_eq!(encode_filter(None, true, OsVersion::new(5, 0)), Some(expected.clone()));
        assert_eq!(encode_filter(Some(""), true, OsVersion::new(10, 0)), Some(expected));
    }

    #[test]
    fn test_encode_filter_returns_none_without_dereference_or_on_old_os() {
        assert_eq!(encode_filter(None, false, OsVersion::new(10, 0)), None);
        assert_eq!(encode_filter(Some(""), false, OsVersion::new(5, 1)), None);
        assert_eq!(encode_filter(None, true, OsVersion::new(4, 10)), None);
    }

    #[test]
    fn test_encode_filter_preserves_non_ascii_descriptions() {
        let encoded = encode_filter(Some("Bilder (ä)|*.png"), false, OsVersion::default())
            .expect("Filter should encode");
        let mut expected = wide("Bilder (ä)\0*.png");
        expected.extend_from_slice(&[0, 0]);
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_parse_filter_pairs_keeps_order() {
        let pairs = parse_filter_pairs("Text|*.txt|Images|*.png;*.jpg");
        assert_eq!(
            pairs,
            vec![
                FilterPair {
                    description: "Text".to_string(),
                    patterns: "*.txt".to_string(),
                },
                FilterPair {
                    description: "Images".to_string(),
                    patterns: "*.png;*.jpg".to_string(),
                },
            ]
        );
        assert!(parse_filter_pairs("").is_empty());
        assert!(parse_filter_pairs("Odd").is_empty());
    }
}
