//! Head movement accounting and the split point shared by the sweep algorithms.

/// Total distance the head travels servicing `sequence` in order, starting at `start`.
pub fn compute_movement(sequence: &[usize], start: usize) -> usize {
    let mut head = start;
    let mut total = 0;
    for &cylinder in sequence {
        total += cylinder.abs_diff(head);
        head = cylinder;
    }
    total
}

/// Index of the first request in `sorted` at or above `reference`, or `sorted.len()`
/// when every request lies below it.
///
/// `sorted` must be ascending. Everything before the index is below the reference,
/// everything from the index on is at or above it.
pub fn find_split(sorted: &[usize], reference: usize) -> usize {
    sorted.partition_point(|&cylinder| cylinder < reference)
}
