//! Pure positional list operations shared by the task and note
//! collections: new entries go to the front, removal is by index, and the
//! order of the remaining elements is preserved.

/// Most-recent-first insert.
pub fn prepend<T>(items: Vec<T>, item: T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.push(item);
    next.extend(items);
    next
}

/// Removes the element at `index`; out-of-range indices leave the list
/// unchanged.
pub fn remove_at<T>(items: Vec<T>, index: usize) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{prepend, remove_at};

    #[test]
    fn prepend_puts_the_new_element_first() {
        let items = prepend(vec!["b", "c"], "a");
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn remove_head_after_prepend_restores_the_original() {
        let original = vec![1, 2, 3];
        assert_eq!(remove_at(prepend(original.clone(), 0), 0), original);
    }

    #[test]
    fn remove_at_preserves_order_of_the_rest() {
        assert_eq!(remove_at(vec!["a", "b", "c"], 1), vec!["a", "c"]);
    }

    #[test]
    fn remove_at_out_of_range_is_a_noop() {
        assert_eq!(remove_at(vec![1, 2], 7), vec![1, 2]);
    }
}
