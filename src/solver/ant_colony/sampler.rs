use rand::Rng;

/// Roulette-wheel pick over a probability vector for a uniform draw in `[0, 1)`.
///
/// Nonzero entries are kept in ascending index order and each one is paired with its
/// suffix sum (its own probability plus every retained entry after it). Suffix sums fall
/// as the index grows, so the entry whose band `(next suffix, own suffix]` contains the
/// draw is the highest-index entry with a suffix sum of at least `draw`. When rounding
/// leaves no entry qualifying, the last retained entry is returned.
///
/// The vector must contain at least one nonzero entry.
pub fn sample_destination(probabilities: &[f64], draw: f64) -> usize {
    let retained: Vec<(usize, f64)> = probabilities
        .iter()
        .enumerate()
        .filter(|(_, p)| **p != 0.0)
        .map(|(i, p)| (i, *p))
        .collect();
    debug_assert!(
        !retained.is_empty(),
        "sample_destination needs at least one nonzero probability"
    );

    let mut suffix = vec![0.0; retained.len()];
    let mut running = 0.0;
    for (k, (_, p)) in retained.iter().enumerate().rev() {
        running += *p;
        suffix[k] = running;
    }

    let mut chosen = None;
    for (k, (index, _)) in retained.iter().enumerate() {
        if suffix[k] >= draw {
            chosen = Some(*index);
        } else {
            break;
        }
    }

    match (chosen, retained.last()) {
        (Some(index), _) => index,
        (None, Some((index, _))) => *index,
        (None, None) => 0,
    }
}

/// Draw a destination with one uniform sample from `rng`.
pub fn draw_destination<R: Rng + ?Sized>(probabilities: &[f64], rng: &mut R) -> usize {
    let draw: f64 = rng.gen();
    sample_destination(probabilities, draw)
}
