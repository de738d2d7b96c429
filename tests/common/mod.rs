use proptest::prelude::*;

pub(super) type U16Seq = Vec<u16>;

// Keys drawn from a small range so that sequences repeat keys often.
pub(super) fn small_keys() -> impl Strategy<Value = U16Seq> {
    prop::collection::vec(0u16..1024u16, 0..512)
}

#[allow(dead_code)]
pub(super) fn short_strings() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{0,2}", 0..512)
}

// Sorted runs, ascending or descending, which force a rotation on nearly
// every insert.
#[allow(dead_code)]
pub(super) fn sorted_runs() -> impl Strategy<Value = U16Seq> {
    (0u16..1024, 1u16..1024, any::<bool>()).prop_map(|(start, len, rev)| {
        let end = start.saturating_add(len);
        if rev {
            (start..end).rev().collect()
        } else {
            (start..end).collect()
        }
    })
}
