//! Membership scans over slices.

/// Whether `items` contains an element equal to `key`, by linear scan.
pub fn linear_contains<T: PartialEq>(items: &[T], key: &T) -> bool {
    items.iter().any(|item| item == key)
}

/// Whether the **sorted** slice `items` contains an element equal to
/// `key`, by binary search. The result is unspecified when the slice
/// is not sorted.
pub fn binary_contains<T: Ord>(items: &[T], key: &T) -> bool {
    let mut low = 0usize;
    let mut high = items.len();
    while low < high {
        let middle = (low + high) / 2;
        match items[middle].cmp(key) {
            std::cmp::Ordering::Less => low = middle + 1,
            std::cmp::Ordering::Greater => high = middle,
            std::cmp::Ordering::Equal => return true,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_contains() {
        assert!(linear_contains(&[1, 5, 15, 15, 15, 15, 20], &5));
        assert!(!linear_contains(&[1, 5, 15], &7));
        assert!(!linear_contains::<i32>(&[], &7));
    }

    #[test]
    fn test_binary_contains() {
        assert!(binary_contains(&["a", "d", "e", "f", "z"], &"f"));
        assert!(!binary_contains(
            &["john", "mark", "ronald", "sarah"],
            &"sheila"
        ));
        assert!(!binary_contains::<&str>(&[], &"x"));
    }

    #[test]
    fn test_binary_contains_endpoints() {
        let items = [2, 4, 6, 8, 10];
        assert!(binary_contains(&items, &2));
        assert!(binary_contains(&items, &10));
        assert!(!binary_contains(&items, &1));
        assert!(!binary_contains(&items, &11));
    }
}
