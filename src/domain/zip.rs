//! Positional zip helpers implementing the "shorter wins" contract for
//! pairing reagents/products with client-supplied amounts, and temperatures
//! with pressures within an `Accelerate`.
//!
//! A `LengthMismatch` error was considered and rejected in favor of silent
//! truncation, which is the faithful reading of the source behavior.

/// Zip two slices, truncating to the shorter, and apply `f` to each pair.
pub fn positional_zip<'a, A, B, T>(
    a: &'a [A],
    b: &'a [B],
    f: impl Fn(&'a A, &'a B) -> T,
) -> Vec<T> {
    a.iter().zip(b.iter()).map(|(x, y)| f(x, y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_to_shorter() {
        let a = vec![1, 2, 3];
        let b = vec!["x", "y"];
        let zipped = positional_zip(&a, &b, |n, s| format!("{n}{s}"));
        assert_eq!(zipped, vec!["1x".to_string(), "2y".to_string()]);
    }

    #[test]
    fn empty_either_side_yields_empty() {
        let a: Vec<i32> = vec![];
        let b = vec![1, 2];
        assert!(positional_zip(&a, &b, |x, y| x + y).is_empty());
    }
}
