//! Small iteration helpers for enumerating index combinations.

/// Iterate over all `(first, second)` pairs, varying `second` fastest.
pub(crate) fn pairs<A, B>(firsts: A, seconds: B) -> impl Iterator<Item = (usize, usize)>
where
    A: Iterator<Item = usize>,
    B: Iterator<Item = usize> + Clone,
{
    firsts.flat_map(move |first| seconds.clone().map(move |second| (first, second)))
}

/// Iterate over all `(first, second, third)` triples, varying `third`
/// fastest.
pub(crate) fn triples<A, B, C>(
    firsts: A,
    seconds: B,
    thirds: C,
) -> impl Iterator<Item = (usize, usize, usize)>
where
    A: Iterator<Item = usize>,
    B: Iterator<Item = usize> + Clone,
    C: Iterator<Item = usize> + Clone,
{
    firsts.flat_map(move |first| {
        let thirds = thirds.clone();
        seconds
            .clone()
            .flat_map(move |second| thirds.clone().map(move |third| (first, second, third)))
    })
}
