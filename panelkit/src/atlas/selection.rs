//! Arity-tagged results.

use crate::error::AtlasError;

/// The result of filtering an atlas: nothing, exactly one value, or several.
///
/// Loading and selecting hand back a bare value when exactly one image
/// matched, so callers pick single sprites without indexing. `Many` built by
/// [`Selection::from_vec`] or `collect` holds two or more values; `len`,
/// `is_empty` and `expect_single` go by the actual count either way.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T> {
    Empty,
    One(T),
    Many(Vec<T>),
}

impl<T> Selection<T> {
    /// Classify a vector by its length.
    pub fn from_vec(mut values: Vec<T>) -> Self {
        match values.len() {
            0 => Selection::Empty,
            1 => values.pop().map_or(Selection::Empty, Selection::One),
            _ => Selection::Many(values),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Selection::Empty => 0,
            Selection::One(_) => 1,
            Selection::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The single value, or `EmptyResult` / `Ambiguous`.
    pub fn expect_single(self) -> Result<T, AtlasError> {
        match Self::from_vec(self.into_vec()) {
            Selection::One(value) => Ok(value),
            Selection::Empty => Err(AtlasError::EmptyResult),
            Selection::Many(values) => Err(AtlasError::Ambiguous(values.len())),
        }
    }

    /// Flatten back into a vector regardless of arity.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Selection::Empty => Vec::new(),
            Selection::One(value) => vec![value],
            Selection::Many(values) => values,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Selection::Empty => &[],
            Selection::One(value) => std::slice::from_ref(value),
            Selection::Many(values) => values,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Transform every value, keeping the arity.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Selection<U> {
        match self {
            Selection::Empty => Selection::Empty,
            Selection::One(value) => Selection::One(f(value)),
            Selection::Many(values) => Selection::Many(values.into_iter().map(f).collect()),
        }
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Empty
    }
}

impl<T> FromIterator<T> for Selection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Selection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Selection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_classification() {
        assert_eq!(Selection::<u8>::from_vec(vec![]), Selection::Empty);
        assert_eq!(Selection::from_vec(vec![7]), Selection::One(7));
        assert_eq!(Selection::from_vec(vec![1, 2]), Selection::Many(vec![1, 2]));
    }

    #[test]
    fn test_expect_single() {
        assert_eq!(Selection::One(3).expect_single().unwrap(), 3);
        assert!(matches!(
            Selection::<u8>::Empty.expect_single(),
            Err(AtlasError::EmptyResult)
        ));
        assert!(matches!(
            Selection::Many(vec![1, 2, 3]).expect_single(),
            Err(AtlasError::Ambiguous(3))
        ));
    }

    #[test]
    fn test_hand_built_many_follows_len() {
        let none: Selection<u8> = Selection::Many(vec![]);
        assert!(none.is_empty());
        assert!(matches!(none.expect_single(), Err(AtlasError::EmptyResult)));

        let lone = Selection::Many(vec![5]);
        assert!(!lone.is_empty());
        assert_eq!(lone.expect_single().unwrap(), 5);
    }

    #[test]
    fn test_as_slice_matches_len() {
        let one = Selection::One("a");
        assert_eq!(one.as_slice(), &["a"]);
        assert_eq!(one.len(), 1);
        assert_eq!(Selection::Many(vec![1, 2]).iter().sum::<i32>(), 3);
    }
}
