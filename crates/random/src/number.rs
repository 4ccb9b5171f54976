use rand::Rng;

/// Uniform integer in `[min, max]`. Reversed bounds are accepted.
pub fn int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    if min == max {
        return min;
    }
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo..=hi)
}

/// Uniform float in `[min, max)`. Reversed bounds are accepted; an empty
/// range collapses to `min`.
pub fn float<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if !(hi - lo).is_normal() {
        return lo;
    }
    rng.gen_range(lo..hi)
}
