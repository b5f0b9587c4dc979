//! Stable per-series color assignment.
//!
//! A series keeps the same color across re-renders because the assignment is
//! a pure function of its position in the input list; there is no shared
//! palette state.

/// Chart line palette (blue, red, green, orange, purple, pink, cyan, lime).
pub const PALETTE: [&str; 8] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#06B6D4", "#84CC16",
];

/// Palette slot for the series at `position` in the input list.
pub fn color_index(position: usize) -> usize {
    position % PALETTE.len()
}

/// Hex color for the series at `position` in the input list.
pub fn color_hex(position: usize) -> &'static str {
    PALETTE[color_index(position)]
}
