//! Harmonic weight table.
//!
//! A small precomputed table of uniform random coefficients, one row per
//! swell base frequency. The swell layer uses the coefficients to bias its
//! harmonic partial amplitudes; the enhancement stage reuses the same table
//! for global tone coloring. The table is built once per render and is
//! immutable afterwards; there is nothing learned or trained about it.

use rand::Rng;

/// Coefficients per swell frequency. Three entries feed the three harmonic
/// partials; extras are reserved for the enhancement stage.
pub const WEIGHTS_PER_FREQUENCY: usize = 4;

/// Symmetric draw range for each coefficient.
const WEIGHT_RANGE: f32 = 1.0;

/// Immutable table of harmonic influence weights.
#[derive(Debug, Clone)]
pub struct HarmonicWeightTable {
    rows: Vec<Vec<f32>>,
}

impl HarmonicWeightTable {
    /// Build a table with one row of coefficients per swell frequency,
    /// each drawn uniformly from `[-1, 1]`.
    pub fn build<R: Rng>(num_frequencies: usize, rng: &mut R) -> Self {
        let rows = (0..num_frequencies)
            .map(|_| {
                (0..WEIGHTS_PER_FREQUENCY)
                    .map(|_| rng.gen_range(-WEIGHT_RANGE..=WEIGHT_RANGE))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Number of frequency rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Coefficients for one swell frequency; `None` past the last row.
    pub fn weights(&self, frequency_index: usize) -> Option<&[f32]> {
        self.rows.get(frequency_index).map(|r| r.as_slice())
    }

    /// Grand mean over all coefficients (enhancement stage input).
    pub fn mean_weight(&self) -> f32 {
        let total: usize = self.rows.iter().map(|r| r.len()).sum();
        if total == 0 {
            return 0.0;
        }
        self.rows.iter().flatten().sum::<f32>() / total as f32
    }

    /// Mean of each row's second coefficient (enhancement stage input).
    pub fn mean_secondary_weight(&self) -> f32 {
        let seconds: Vec<f32> = self.rows.iter().filter_map(|r| r.get(1).copied()).collect();
        if seconds.is_empty() {
            return 0.0;
        }
        seconds.iter().sum::<f32>() / seconds.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_build_dimensions() {
        let mut rng = Pcg32::seed_from_u64(11);
        let table = HarmonicWeightTable::build(5, &mut rng);
        assert_eq!(table.num_rows(), 5);
        for i in 0..5 {
            assert_eq!(table.weights(i).unwrap().len(), WEIGHTS_PER_FREQUENCY);
        }
        assert!(table.weights(5).is_none());
    }

    #[test]
    fn test_weights_in_range() {
        let mut rng = Pcg32::seed_from_u64(11);
        let table = HarmonicWeightTable::build(5, &mut rng);
        for i in 0..5 {
            for &w in table.weights(i).unwrap() {
                assert!((-1.0..=1.0).contains(&w));
            }
        }
    }

    #[test]
    fn test_aggregates_bounded() {
        let mut rng = Pcg32::seed_from_u64(99);
        let table = HarmonicWeightTable::build(5, &mut rng);
        assert!(table.mean_weight().abs() <= 1.0);
        assert!(table.mean_secondary_weight().abs() <= 1.0);
    }

    #[test]
    fn test_empty_table_aggregates() {
        let mut rng = Pcg32::seed_from_u64(0);
        let table = HarmonicWeightTable::build(0, &mut rng);
        assert_eq!(table.mean_weight(), 0.0);
        assert_eq!(table.mean_secondary_weight(), 0.0);
    }
}
