pub trait TextStats {
    /// Number of pieces produced by splitting on single spaces.
    fn space_separated_count(&self) -> usize;

    /// Lower-cases the text and reports whether any needle occurs in it.
    fn contains_any_lowercase(&self, needles: &[&str]) -> bool;
}

impl TextStats for str {
    fn space_separated_count(&self) -> usize {
        self.split(' ').count()
    }

    fn contains_any_lowercase(&self, needles: &[&str]) -> bool {
        let haystack = self.to_lowercase();
        needles.iter().any(|needle| haystack.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_separated_count() {
        assert_eq!("one two three".space_separated_count(), 3);
        assert_eq!("".space_separated_count(), 1);
        assert_eq!("a  b".space_separated_count(), 3);
    }

    #[test]
    fn test_contains_any_lowercase() {
        assert!("Please EXPLAIN this".contains_any_lowercase(&["explain"]));
        assert!(!"hello".contains_any_lowercase(&["bye", "later"]));
    }
}
