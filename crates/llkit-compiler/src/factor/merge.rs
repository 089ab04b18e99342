//! Merge phase: fold runs of alternatives with matching heads.

use llkit_core::Node;
use log::debug;

use super::factor;

/// Merge `slots[common..]` into one alternation.
///
/// Consumed slots are tombstoned with `None`. When the heads of `common` and
/// `offset` match, the pair becomes `head ( tail(common) | tail(offset) )` at
/// `common` and scanning continues without advancing `common`, so any number
/// of alternatives with the same head fold into one decision.
pub(crate) fn merge(slots: &mut [Option<Node>], common: usize, offset: usize) -> Node {
    if offset >= slots.len() {
        return factor(take(slots, common));
    }

    let heads_match = match (&slots[common], &slots[offset]) {
        (Some(left), Some(right)) => left.head().matches(right.head()),
        _ => false,
    };

    if heads_match {
        let (head, left_tail) = take(slots, common).into_head_tail();
        let (_, right_tail) = take(slots, offset).into_head_tail();
        debug!("merge: factoring out `{head}`");
        slots[common] = Some(Node::seq(head, Node::alt(left_tail, right_tail)));
        return merge(slots, common, offset + 1);
    }

    let right = merge(slots, offset, offset + 1);
    let left = factor(take(slots, common));
    Node::alt(left, right)
}

fn take(slots: &mut [Option<Node>], index: usize) -> Node {
    slots[index].take().unwrap_or(Node::Empty)
}
