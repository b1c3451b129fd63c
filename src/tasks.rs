//! Small stateless helpers built on top of [`Vector`].

use std::collections::HashMap;
use std::hash::Hash;

use crate::vector::Vector;

/// Counts ASCII vowels, either case.
pub fn count_vowels(s: &str) -> usize {
    s.chars()
        .filter(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U'))
        .count()
}

/// Keeps the numbers matching `predicate`, in input order.
///
/// The result is reserved for `numbers.len()` up front so filtering never grows it.
pub fn filter_numbers<F>(numbers: &[i32], predicate: F) -> Vector<i32>
where
    F: Fn(i32) -> bool,
{
    let mut result = Vector::with_capacity(numbers.len());
    for &n in numbers {
        if predicate(n) {
            result.push_back(n);
        }
    }
    result
}

/// Swaps keys and values. Duplicate values keep one arbitrary key.
pub fn invert_map<K, V>(map: HashMap<K, V>) -> HashMap<V, K>
where
    V: Eq + Hash,
{
    map.into_iter().map(|(k, v)| (v, k)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", 0 ; "empty")]
    #[test_case("rhythm", 0 ; "no vowels")]
    #[test_case("Hello World", 3 ; "mixed")]
    #[test_case("AEIOUaeiou", 10 ; "all vowels")]
    #[test_case("héllo", 1 ; "non ascii ignored")]
    fn vowels(input: &str, expected: usize) {
        assert_eq!(count_vowels(input), expected);
    }

    #[test]
    fn filter_keeps_order() {
        let evens = filter_numbers(&[1, 2, 3, 4, 5, 6], |n| n % 2 == 0);
        assert_eq!(evens.data(), &[2, 4, 6]);
        assert_eq!(evens.capacity(), 6);
    }

    #[test]
    fn filter_nothing_matches() {
        let none = filter_numbers(&[1, 3, 5], |n| n > 10);
        assert!(none.empty());
        let from_empty = filter_numbers(&[], |_| true);
        assert_eq!((from_empty.size(), from_empty.capacity()), (0, 0));
    }

    #[test]
    fn invert_unique_values() {
        let map = HashMap::from([("one", 1), ("two", 2)]);
        let inverted = invert_map(map);
        assert_eq!(inverted, HashMap::from([(1, "one"), (2, "two")]));
    }

    #[test]
    fn invert_duplicate_values_keeps_one_key() {
        let map = HashMap::from([("a", 1), ("b", 1), ("c", 2)]);
        let inverted = invert_map(map);
        assert_eq!(inverted.len(), 2);
        assert!(matches!(inverted[&1], "a" | "b"));
        assert_eq!(inverted[&2], "c");
    }

    #[test]
    fn invert_empty() {
        let inverted: HashMap<i32, String> = invert_map(HashMap::new());
        assert!(inverted.is_empty());
    }
}
