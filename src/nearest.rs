//! Nearest-neighbor route construction.

/// Orders `candidates` (indices into `matrix`) greedily.
///
/// Starts at the first candidate and keeps appending the closest unvisited
/// one. Ties go to the candidate listed earlier, so callers passing indices
/// in input order get lowest-original-index tie-breaking.
pub(crate) fn nearest_neighbor(candidates: &[usize], matrix: &[Vec<f64>]) -> Vec<usize> {
    let Some((&first, rest)) = candidates.split_first() else {
        return Vec::new();
    };

    let mut order = Vec::with_capacity(candidates.len());
    let mut remaining: Vec<usize> = rest.to_vec();
    order.push(first);
    let mut current = first;

    while !remaining.is_empty() {
        let mut best_pos = 0;
        let mut best_dist = f64::INFINITY;
        for (pos, &candidate) in remaining.iter().enumerate() {
            let dist = matrix[current][candidate];
            if dist < best_dist {
                best_dist = dist;
                best_pos = pos;
            }
        }

        // `Vec::remove` keeps the rest in input order for later tie-breaks.
        current = remaining.remove(best_pos);
        order.push(current);
    }

    order
}

/// One-way length of `order` under `matrix`.
pub(crate) fn order_distance(order: &[usize], matrix: &[Vec<f64>]) -> f64 {
    order.windows(2).map(|pair| matrix[pair[0]][pair[1]]).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_matrix(xs: &[f64]) -> Vec<Vec<f64>> {
        xs.iter()
            .map(|a| xs.iter().map(|b| (a - b).abs()).collect())
            .collect()
    }

    #[test]
    fn test_empty_and_single() {
        let matrix = line_matrix(&[0.0]);
        assert!(nearest_neighbor(&[], &matrix).is_empty());
        assert_eq!(nearest_neighbor(&[0], &matrix), vec![0]);
    }

    #[test]
    fn test_follows_closest() {
        // Positions: 0, 2, 1, 3
        let matrix = line_matrix(&[0.0, 2.0, 1.0, 3.0]);
        assert_eq!(nearest_neighbor(&[0, 1, 2, 3], &matrix), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_ties_prefer_earlier_candidate() {
        // From 0, both 1 (at -1) and 2 (at +1) are equally far.
        let matrix = line_matrix(&[0.0, -1.0, 1.0]);
        assert_eq!(nearest_neighbor(&[0, 1, 2], &matrix), vec![0, 1, 2]);
        assert_eq!(nearest_neighbor(&[0, 2, 1], &matrix), vec![0, 2, 1]);
    }

    #[test]
    fn test_subset_seeded_by_first_candidate() {
        let matrix = line_matrix(&[0.0, 5.0, 1.0, 4.0]);
        assert_eq!(nearest_neighbor(&[3, 0, 2], &matrix), vec![3, 2, 0]);
    }

    #[test]
    fn test_order_distance() {
        let matrix = line_matrix(&[0.0, 2.0, 1.0, 3.0]);
        assert_eq!(order_distance(&[0, 1, 2, 3], &matrix), 5.0);
        assert_eq!(order_distance(&[0, 2, 1, 3], &matrix), 3.0);
        assert_eq!(order_distance(&[1], &matrix), 0.0);
    }
}
