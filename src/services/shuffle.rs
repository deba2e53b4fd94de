use rand::Rng;

/// In-place Fisher-Yates shuffle
///
/// Walks from the last index down to 1, swapping each element with a
/// uniformly chosen one at an index no greater than its own.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
