//! Pure index navigation for paged containers.
//!
//! Computes the neighbor of a page index given the item count and whether
//! carousel wraparound is enabled. Side-effect free; the container delegates
//! every neighbor decision here so the rules live in exactly one place.

/// Returns the index of the page after `position`, or `None` when navigation
/// stops at that edge.
///
/// With carousel enabled and more than one item the successor wraps past the
/// last index back to 0. A single item is never its own neighbor, so
/// `count == 1` yields `None` even in carousel mode.
pub fn next_position(position: usize, count: usize, carousel: bool) -> Option<usize> {
    if carousel && count > 1 {
        Some((position + 1) % count)
    } else if position + 1 < count {
        Some(position + 1)
    } else {
        None
    }
}

/// Returns the index of the page before `position`, or `None` when navigation
/// stops at that edge.
///
/// Symmetric to [`next_position`]: wraps from 0 back to `count - 1` under
/// carousel, otherwise stops at index 0.
pub fn previous_position(position: usize, count: usize, carousel: bool) -> Option<usize> {
    if carousel && count > 1 {
        Some((position + count - 1) % count)
    } else if position > 0 && count > 0 {
        Some(position - 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_linear() {
        assert_eq!(next_position(0, 3, false), Some(1));
        assert_eq!(next_position(1, 3, false), Some(2));
        assert_eq!(next_position(2, 3, false), None);
    }

    #[test]
    fn test_previous_linear() {
        assert_eq!(previous_position(2, 3, false), Some(1));
        assert_eq!(previous_position(1, 3, false), Some(0));
        assert_eq!(previous_position(0, 3, false), None);
    }

    #[test]
    fn test_carousel_wraps() {
        assert_eq!(next_position(2, 3, true), Some(0));
        assert_eq!(previous_position(0, 3, true), Some(2));
        assert_eq!(next_position(0, 3, true), Some(1));
        assert_eq!(previous_position(2, 3, true), Some(1));
    }

    #[test]
    fn test_empty_has_no_neighbors() {
        for carousel in [false, true] {
            for position in [0, 1, 7] {
                assert_eq!(next_position(position, 0, carousel), None);
                assert_eq!(previous_position(position, 0, carousel), None);
            }
        }
    }

    #[test]
    fn test_single_item_is_never_its_own_neighbor() {
        assert_eq!(next_position(0, 1, true), None);
        assert_eq!(previous_position(0, 1, true), None);
        assert_eq!(next_position(0, 1, false), None);
        assert_eq!(previous_position(0, 1, false), None);
    }

    #[test]
    fn test_linear_edges() {
        // next is None exactly at the last index, previous exactly at 0
        for count in 1..6usize {
            for position in 0..count {
                assert_eq!(next_position(position, count, false).is_none(), position == count - 1);
                assert_eq!(previous_position(position, count, false).is_none(), position == 0);
            }
        }
    }

    #[test]
    fn test_carousel_next_previous_are_inverses() {
        for count in 2..8usize {
            for position in 0..count {
                let forward = next_position(position, count, true).unwrap();
                assert_eq!(previous_position(forward, count, true), Some(position));

                let backward = previous_position(position, count, true).unwrap();
                assert_eq!(next_position(backward, count, true), Some(position));
            }
        }
    }
}
