use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PickError {
	#[error("No queries available.")]
	Empty,
}

/// Picks `queries[floor(roll * len)]` for a roll in `[0, 1)`.
pub fn pick_with(queries: &[String], roll: f64) -> Result<&str, PickError> {
	if queries.is_empty() {
		return Err(PickError::Empty);
	}
	let idx = ((roll * queries.len() as f64).floor() as usize).min(queries.len() - 1);
	Ok(&queries[idx])
}

/// Uniform pick driven by `Math.random()`.
pub fn pick(queries: &[String]) -> Result<&str, PickError> {
	if queries.is_empty() {
		return Err(PickError::Empty);
	}
	pick_with(queries, js_sys::Math::random())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn pool(items: &[&str]) -> Vec<String> {
		items.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn empty_pool_is_an_error() {
		assert_eq!(pick_with(&[], 0.5), Err(PickError::Empty));
		// no Math.random() call when there is nothing to pick
		assert_eq!(pick(&[]), Err(PickError::Empty));
	}

	#[test]
	fn single_entry_always_wins() {
		let queries = pool(&["a"]);
		for roll in [0.0, 0.3, 0.999_999] {
			assert_eq!(pick_with(&queries, roll), Ok("a"));
		}
	}

	#[test]
	fn roll_maps_to_floor_index() {
		let queries = pool(&["a", "b", "c", "d"]);
		assert_eq!(pick_with(&queries, 0.0), Ok("a"));
		assert_eq!(pick_with(&queries, 0.26), Ok("b"));
		assert_eq!(pick_with(&queries, 0.5), Ok("c"));
		assert_eq!(pick_with(&queries, 0.99), Ok("d"));
		// out-of-range rolls stay in bounds
		assert_eq!(pick_with(&queries, 1.0), Ok("d"));
	}
}
