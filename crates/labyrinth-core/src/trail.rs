//! Compact breadcrumb rendering.

use crate::room::RoomId;

/// Default number of rooms shown in a compact trail.
pub const DEFAULT_TRAIL_WINDOW: usize = 5;

/// Render the last `window` rooms of `path` as `a/b/c`, prefixed with `../`
/// when older rooms were left out.
pub fn format_trail(path: &[RoomId], window: usize) -> String {
    let window = window.max(1);
    let skip = path.len().saturating_sub(window);
    let visible: Vec<&str> = path[skip..].iter().map(RoomId::as_str).collect();

    let mut trail = String::new();
    if skip > 0 {
        trail.push_str("../");
    }
    trail.push_str(&visible.join("/"));
    trail
}
