use crate::adapters::{Gif, GifResults};
use rand::Rng;

/// Pick the GIF to send
///
/// A random lookup yields its single GIF. A search yields one candidate drawn
/// uniformly, or `None` when nothing matched.
pub fn select_gif<'a, R: Rng>(results: &'a GifResults, rng: &mut R) -> Option<&'a Gif> {
    match results {
        GifResults::Random(gif) => Some(gif),
        GifResults::Search(gifs) if gifs.is_empty() => None,
        GifResults::Search(gifs) => gifs.get(rng.random_range(0..gifs.len())),
    }
}
