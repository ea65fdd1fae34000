//! Ordered-list helpers

/// Move the element at `from` so that it ends up at index `to`
///
/// Elements in between shift by one towards the vacated slot, matching a
/// drag-and-drop move. Returns false and leaves the list untouched when
/// either index is out of bounds.
pub fn move_element<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    true
}
