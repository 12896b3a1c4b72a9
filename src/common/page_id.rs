//! Page identifier type.
//!
//! Page identifiers are opaque: the simulator only ever compares them for
//! equality. There is deliberately no reserved "invalid" value — an empty
//! slot is expressed as `Slot::Empty`, so every `u32` is a legal page and
//! cannot collide with a sentinel.

use std::fmt;

/// Identifies a page in a reference sequence.
///
/// # Example
/// ```
/// use framesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate so callers' width/alignment flags apply to the number.
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
    }

    #[test]
    fn test_page_id_equality_is_all_that_matters() {
        assert_eq!(PageId::new(7), PageId::new(7));
        assert_ne!(PageId::new(7), PageId::new(0));
    }

    #[test]
    fn test_page_id_max_is_a_legal_page() {
        // No sentinel: even u32::MAX names a real page.
        let pid = PageId::new(u32::MAX);
        assert_eq!(format!("{}", pid), format!("{}", u32::MAX));
    }
}
