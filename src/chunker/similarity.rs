use crate::labels::EntitySet;

/// |a ∩ b| / |a ∪ b|, with an empty union counted as 1
pub fn jaccard_similarity(a: &EntitySet, b: &EntitySet) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.union(b).count().max(1);

    intersection as f64 / union as f64
}
