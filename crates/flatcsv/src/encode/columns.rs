use indexmap::{IndexMap, IndexSet};

/// Ordered union of all record keys.
///
/// Each key appears once, in the order it is first seen across the full
/// scan. Used when the encoder is not handed an explicit column list.
pub fn infer_columns<V>(records: &[IndexMap<String, V>]) -> Vec<String> {
    let mut seen: IndexSet<String> = IndexSet::new();
    for record in records {
        for key in record.keys() {
            if !seen.contains(key) {
                seen.insert(key.clone());
            }
        }
    }
    seen.into_iter().collect()
}
