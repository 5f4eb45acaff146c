use rand::Rng;

use crate::error::{Error, Result};

/// Randomly chooses an item using its weight as the relative probability.
///
/// Draws `r` uniformly in `[0, total)` and returns the first item whose
/// cumulative weight exceeds `r`. Items are scanned in slice order, so a
/// fixed seed always picks the same item for the same input.
///
/// # Errors
/// Returns `EmptyDistribution` if `pairs` is empty or all weights are zero.
pub fn choose<'a, T, R>(rng: &mut R, pairs: &'a [(T, usize)]) -> Result<&'a T>
where
	R: Rng + ?Sized,
{
	let total: usize = pairs.iter().map(|(_, weight)| weight).sum();
	if total == 0 {
		return Err(Error::EmptyDistribution);
	}

	let r = rng.random_range(0..total);
	let mut cumulative = 0;
	for (item, weight) in pairs {
		cumulative += weight;
		if r < cumulative {
			return Ok(item);
		}
	}

	// r < total guarantees a hit above
	Err(Error::EmptyDistribution)
}
