//! Weighted random selection over candidate moves

use crate::core::Move;

/// A candidate move with its selection weight, scoped to a single
/// sampling step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedOption {
    pub mv: Move,
    pub weight: f64,
}

/// Inverse-CDF sampling: scale `draw` (uniform in `[0,1)`) by the total
/// weight and return the first option whose cumulative weight reaches it.
///
/// Identical input order, weights, and draw always yield the same choice.
/// A zero total weight, or a cumulative walk that never reaches the
/// scaled draw through rounding, falls back to the first option.
/// `options` must be non-empty.
pub fn sample(options: &[WeightedOption], draw: f64) -> &WeightedOption {
    let total: f64 = options.iter().map(|opt| opt.weight).sum();
    let target = draw * total;

    let mut cumulative = 0.0;
    for opt in options {
        cumulative += opt.weight;
        if target <= cumulative {
            return opt;
        }
    }

    &options[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand::rngs::StdRng;
    use test_case::test_case;

    fn options(weights: &[f64]) -> Vec<WeightedOption> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &weight)| WeightedOption {
                mv: Move::new(0, i as i32),
                weight,
            })
            .collect()
    }

    #[test_case(0.05, 0; "low draw hits first option")]
    #[test_case(0.3, 1; "boundary draw stays on second option")]
    #[test_case(0.55, 2; "mid draw hits third option")]
    #[test_case(0.99, 3; "high draw hits last option")]
    fn test_sample_walks_cumulative_weights(draw: f64, expected: i32) {
        let opts = options(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(sample(&opts, draw).mv, Move::new(0, expected));
    }

    #[test]
    fn test_zero_weights_fall_back_to_first() {
        let opts = options(&[0.0, 0.0, 0.0]);
        assert_eq!(sample(&opts, 0.7).mv, Move::new(0, 0));
    }

    #[test]
    fn test_sample_is_reproducible() {
        let opts = options(&[0.5, 1.5, 2.0]);
        let first = *sample(&opts, 0.42);
        for _ in 0..10 {
            assert_eq!(*sample(&opts, 0.42), first);
        }
    }

    #[test]
    fn test_sample_converges_to_weight_ratios() {
        let opts = options(&[1.0, 2.0, 3.0, 4.0]);
        let total: f64 = 10.0;
        let draws = 100_000;

        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [0u32; 4];
        for _ in 0..draws {
            let chosen = sample(&opts, rng.random::<f64>());
            counts[chosen.mv.dc as usize] += 1;
        }

        for (i, opt) in opts.iter().enumerate() {
            let observed = counts[i] as f64 / draws as f64;
            let expected = opt.weight / total;
            assert!(
                (observed - expected).abs() < 0.01,
                "option {} frequency {} expected {}",
                i,
                observed,
                expected
            );
        }
    }
}
