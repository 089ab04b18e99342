//! Group phase: bring alternatives with a shared leading symbol together.
//!
//! This is a positional scan-and-swap, not a sort. Later ties are resolved by
//! scan position, and generated parsers depend on the exact resulting order.

use llkit_core::Node;
use log::trace;

/// Rearrange `items` in place.
///
/// For each position `i`, scan `j` from the end down to `i + 1` and swap the
/// pair `(j - 1, j)` when either
/// - the element originally at `i` matches `items[j]` but not `items[j - 1]`, or
/// - `items[j - 1]` is `Empty` and `items[j]` does not lead with a macro.
pub(crate) fn group(items: &mut [Node]) {
    let len = items.len();
    for i in 0..len {
        let target = items[i].clone();
        for j in (i + 1..len).rev() {
            if should_swap(&target, &items[j - 1], &items[j]) {
                trace!("group: swap `{}` <-> `{}`", items[j - 1], items[j]);
                items.swap(j - 1, j);
            }
        }
    }
}

fn should_swap(target: &Node, prev: &Node, next: &Node) -> bool {
    let pulls_match = target.matches(next) && !target.matches(prev);
    // Epsilon loses priority, but never to a RECOVER/LOOKAHEAD alternative.
    let sinks_empty = matches!(prev, Node::Empty) && !next.leads_with_macro();
    pulls_match || sinks_empty
}
