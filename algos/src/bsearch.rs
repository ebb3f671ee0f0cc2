/// Binary search over a sorted slice for the smallest element `>= target`
/// (a lower bound, in `partition_point` terms).
///
/// Returns the number of halving iterations performed together with that
/// element, or `None` if every element is smaller than `target`.
pub fn lower_bound(sorted: &[f64], target: f64) -> (usize, Option<f64>) {
    let mut iterations = 0;
    let mut bound = None;

    if sorted.is_empty() {
        return (iterations, bound);
    }

    let mut low = 0usize;
    let mut high = sorted.len() - 1; // inclusive

    while low <= high {
        iterations += 1;
        let mid = low + (high - low) / 2;

        if sorted[mid] < target {
            low = mid + 1;
        } else {
            // candidate; keep looking left for a smaller one
            bound = Some(sorted[mid]);
            match mid.checked_sub(1) {
                Some(next) => high = next,
                None => break,
            }
        }
    }

    (iterations, bound)
}
