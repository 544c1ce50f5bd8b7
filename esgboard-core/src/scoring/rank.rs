use core::cmp::Ordering;

/// Assign 1-based descending ranks to `scores`.
///
/// Every position gets a distinct rank. Equal scores keep their input order
/// (stable sort), and NaN ranks after every number.
///
/// ```
/// assert_eq!(esgboard_core::rank(&[70.0, 90.0, 70.0, 80.0]), vec![3, 1, 4, 2]);
/// ```
#[must_use]
pub fn rank(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        let (x, y) = (scores[a], scores[b]);
        match (x.is_nan(), y.is_nan()) {
            (false, false) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            (a_nan, b_nan) => a_nan.cmp(&b_nan),
        }
    });
    let mut ranks = vec![0; scores.len()];
    for (pos, idx) in order.into_iter().enumerate() {
        ranks[idx] = pos + 1;
    }
    ranks
}
