use itertools::Itertools;

// Every tie in the puzzle is broken by the same rule: the least element wins.
// Node handles order like their identifiers, so gate choice ((distance, gate) pairs),
// step choice (neighbors) and candidate order ((gate, neighbor) corridors) all go through here.

/// The element every tie-break picks, or `None` if there is nothing to pick from.
pub(crate) fn first<T: Ord>(items: impl IntoIterator<Item = T>) -> Option<T> {
    items.into_iter().min()
}

/// `items` in the order ties are broken, without duplicates.
pub(crate) fn ranked<T: Ord>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    items.into_iter().sorted().dedup().collect_vec()
}
