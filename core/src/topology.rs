// SPDX-License-Identifier: MIT OR Apache-2.0

//! Grid adjacency

/// Get the indices adjacent to `index` on a `size`×`size` grid.
///
/// Order is fixed: up, down, left, right. Edge and corner cells yield fewer
/// neighbors; an index outside the grid yields none.
pub fn neighbors_of(index: usize, size: u8) -> Vec<usize> {
    let size = size as usize;
    let mut result = Vec::with_capacity(4);
    if size == 0 || index >= size * size {
        return result;
    }

    let row = index / size;
    let col = index % size;

    // Up
    if row > 0 {
        result.push(index - size);
    }

    // Down
    if row + 1 < size {
        result.push(index + size);
    }

    // Left
    if col > 0 {
        result.push(index - 1);
    }

    // Right
    if col + 1 < size {
        result.push(index + 1);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_cell() {
        assert_eq!(neighbors_of(5, 4), vec![1, 9, 4, 6]);
    }

    #[test]
    fn test_corners() {
        assert_eq!(neighbors_of(0, 4), vec![4, 1]);
        assert_eq!(neighbors_of(3, 4), vec![7, 2]);
        assert_eq!(neighbors_of(12, 4), vec![8, 13]);
        assert_eq!(neighbors_of(15, 4), vec![11, 14]);
    }

    #[test]
    fn test_edges() {
        assert_eq!(neighbors_of(1, 3), vec![4, 0, 2]);
        assert_eq!(neighbors_of(3, 3), vec![0, 6, 4]);
    }

    #[test]
    fn test_out_of_range() {
        assert!(neighbors_of(9, 3).is_empty());
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        for size in 2..=10u8 {
            let cells = size as usize * size as usize;
            for index in 0..cells {
                for n in neighbors_of(index, size) {
                    assert!(neighbors_of(n, size).contains(&index));
                }
            }
        }
    }
}
