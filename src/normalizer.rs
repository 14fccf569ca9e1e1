//! Dot-segment removal.

use alloc::{string::String, vec::Vec};
use core::mem;

/// Removes `.` and `..` segments from a decoded path, per RFC 3986
/// section 5.2.4.
///
/// The path keeps its shape conventions: a leading empty segment marks an
/// absolute path, a trailing empty segment marks a directory. A `..` never
/// pops the root of an absolute path.
pub(crate) fn remove_dot_segments(path: &mut Vec<String>) {
    let input = mem::take(path);
    let is_absolute = input.first().map_or(false, String::is_empty);

    let mut at_directory_level = false;
    for segment in input {
        if segment == "." {
            at_directory_level = true;
        } else if segment == ".." {
            if !path.is_empty() && (!is_absolute || path.len() > 1) {
                path.pop();
            }
            at_directory_level = true;
        } else {
            let is_empty = segment.is_empty();
            // Repeated directory markers collapse into one.
            if !at_directory_level || !is_empty {
                path.push(segment);
            }
            at_directory_level = is_empty;
        }
    }

    // Mark the directory we stayed at.
    if at_directory_level && matches!(path.last(), Some(last) if !last.is_empty()) {
        path.push(String::new());
    }
}
