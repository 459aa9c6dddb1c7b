//! Outline indent reconstruction from parent/child index relationships.

use log::debug;

use super::models::As2IndexRecord;

/// Assign a tree level to every record in one forward pass.
///
/// The file stores no depth; it is reconstructed from how the parent pointer
/// changes between consecutive records, assuming the list is written in a
/// depth-first, pre-order-like sequence:
/// - parent equals the previous record's index (and is non-zero): the record
///   opens a new child level, indent increases by one;
/// - parent differs from the previous record's parent: the record returns to
///   an ancestor level, indent decreases by one;
/// - otherwise: a sibling, indent unchanged.
///
/// This tracks depth changes of at most one level per step. A chain that
/// jumps several ancestor levels at once under-decrements; that matches the
/// behavior of the AS/2 tooling this format comes from and must not be
/// replaced with a true tree build from parent pointers.
pub fn assign_tree_levels(records: &mut [As2IndexRecord]) {
    let mut previous_index = 0;
    let mut previous_parent_index = 0;
    let mut indent_level = 0;

    for record in records.iter_mut() {
        if record.parent == previous_index && record.parent > 0 {
            indent_level += 1;
        } else if record.parent != previous_parent_index {
            indent_level -= 1;
        }

        record.tree_level = indent_level;

        previous_index = record.index;
        previous_parent_index = record.parent;
    }

    debug!("Assigned tree levels to {} records", records.len());
}
