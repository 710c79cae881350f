use rand::Rng;

/// Durstenfeld shuffle: each pass draws from the unshuffled prefix and
/// parks the pick at the end of that prefix.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let len = items.len();
    for i in 0..len {
        let last_unshuffled = len - 1 - i;
        let j = rng.gen_range(0..len - i);
        items.swap(j, last_unshuffled);
    }
}
