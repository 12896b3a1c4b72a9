//! Frame identifier type.

use std::fmt;

/// Identifies a slot in the frame table.
///
/// Using `usize` because:
/// 1. Slots are stored in `Vec<Slot>`
/// 2. Direct indexing without casting: `slots[frame_id.0]`
/// 3. Matches Rust idioms for array/vector indexing
///
/// # Example
/// ```
/// use framesim::FrameId;
///
/// let frame_id = FrameId::new(5);
/// // Can use directly as index: slots[frame_id.0]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
