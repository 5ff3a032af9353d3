//! Explicit bulk in-place updates.
//!
//! Every sequence operator in this library is a pure function of its input:
//! [`project`](crate::sequence::Sequence::project) in particular never
//! writes back onto the elements it transforms. Where a caller genuinely
//! wants to mutate every element of a collection it owns, that is a
//! separate capability with its own name, provided here.

/// Applies `update` to every element of the slice, in place, front to back.
///
/// # Examples
///
/// ```rust
/// use sequor::mutate::update_each;
///
/// let mut prices = vec![200, 100, 150];
/// update_each(&mut prices, |price| *price *= 2);
/// assert_eq!(prices, vec![400, 200, 300]);
/// ```
pub fn update_each<T, F>(elements: &mut [T], mut update: F)
where
    F: FnMut(&mut T),
{
    for element in elements.iter_mut() {
        update(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_update_each_visits_every_element_once() {
        let mut visits = vec![0_u32; 5];
        update_each(&mut visits, |visit| *visit += 1);
        assert_eq!(visits, vec![1, 1, 1, 1, 1]);
    }

    #[rstest]
    fn test_update_each_on_empty_slice_is_a_no_op() {
        let mut empty: Vec<u32> = Vec::new();
        update_each(&mut empty, |_| unreachable!());
        assert!(empty.is_empty());
    }
}
