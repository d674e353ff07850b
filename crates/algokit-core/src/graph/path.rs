//! Path reconstruction from predecessor maps

use indexmap::IndexMap;

use crate::graph::types::NodeId;

/// Walk `parents` back from `target` to `source`.
///
/// Returns `None` when `target` was never reached. The walk is bounded by
/// the map size, so a malformed map cannot loop forever.
pub fn reconstruct_path<N: NodeId>(
    parents: &IndexMap<N, Option<N>>,
    source: &N,
    target: &N,
) -> Option<Vec<N>> {
    if !parents.contains_key(target) {
        return None;
    }

    let mut path = vec![target.clone()];
    let mut current = target;
    while current != source {
        let pred = parents.get(current)?.as_ref()?;
        path.push(pred.clone());
        if path.len() > parents.len() {
            return None;
        }
        current = pred;
    }

    path.reverse();
    Some(path)
}
