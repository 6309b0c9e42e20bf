use std::cmp::Ordering;

/// Total order over suggestion candidates: higher frequency first, equal
/// frequencies broken by ascending word order. Written as a named comparator
/// so the direction is explicit rather than hidden in a heap convention.
pub fn rank_order(a: &(String, u32), b: &(String, u32)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Best `max_results` words under `rank_order`, highest ranked first.
pub fn top_k(mut candidates: Vec<(String, u32)>, max_results: usize) -> Vec<String> {
    candidates.sort_by(rank_order);
    candidates
        .into_iter()
        .take(max_results)
        .map(|(word, _)| word)
        .collect()
}
