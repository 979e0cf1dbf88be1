/// Shared-prefix proximity
///
/// Formula:
/// proximity = (matched_prefix_length / max(|a|, |b|)) * 100
///
/// where matched_prefix_length is the number of leading characters a and b have in common.

/// Length gates for the proximity score
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityParams {
    pub min_length: usize, // Minimum length of the queried word (typical: 2)
    pub max_length: usize, // Minimum candidate length and maximum length gap (typical: 4)
}

impl Default for ProximityParams {
    fn default() -> Self {
        ProximityParams {
            min_length: 2,
            max_length: 4,
        }
    }
}

/// Compute the prefix proximity of `a` to `b`, in [0, 100]
///
/// The gates are asymmetric: `a` is checked against `min_length`, `b` against
/// `max_length`. Swapping the arguments can change the result.
///
/// # Arguments
/// * `a` - The queried word form
/// * `b` - The dictionary word it is compared with
/// * `params` - Length gates
pub fn prefix_proximity(a: &str, b: &str, params: &ProximityParams) -> f32 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len < params.min_length || b_len < params.max_length {
        return 0.0;
    }
    if a_len.abs_diff(b_len) > params.max_length {
        return 0.0;
    }

    let longest = a_len.max(b_len) as f32;
    let mut proximity = 0.0;
    for (matched, _) in a.chars().zip(b.chars()).take_while(|(x, y)| x == y).enumerate() {
        proximity = ((matched + 1) as f32 / longest) * 100.0;
    }

    proximity
}
