//! Grid distance helpers, admissible as A* heuristics on their
//! respective movement models.

/// Manhattan distance between two grid positions: the exact remaining
/// cost on a 4-connected grid without obstacles, and therefore an
/// admissible estimate on any 4-connected grid.
pub fn manhattan_distance(a: (i64, i64), b: (i64, i64)) -> f64 {
    ((a.0 - b.0).abs() + (a.1 - b.1).abs()) as f64
}

/// Euclidean (straight-line) distance between two points, admissible
/// whenever movement cost is at least the geometric distance covered.
pub fn euclidean_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan() {
        assert_eq!(manhattan_distance((0, 0), (3, 4)), 7.0);
        assert_eq!(manhattan_distance((3, 4), (0, 0)), 7.0);
        assert_eq!(manhattan_distance((-2, 1), (2, -1)), 6.0);
        assert_eq!(manhattan_distance((5, 5), (5, 5)), 0.0);
    }

    #[test]
    fn test_euclidean() {
        assert_eq!(euclidean_distance((0.0, 0.0), (3.0, 4.0)), 5.0);
        assert_eq!(euclidean_distance((1.0, 1.0), (1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_euclidean_never_exceeds_manhattan() {
        for (a, b) in [((0, 0), (3, 4)), ((-5, 2), (7, -9)), ((1, 1), (2, 2))] {
            let euclid = euclidean_distance(
                (a.0 as f64, a.1 as f64),
                (b.0 as f64, b.1 as f64),
            );
            assert!(euclid <= manhattan_distance(a, b));
        }
    }
}
