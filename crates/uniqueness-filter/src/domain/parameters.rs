//! Filter sizing and false positive estimates
//!
//! Formulas:
//! - FPR = (1 - e^(-kn/m))^k
//! - m = -n*ln(fpr) / (ln(2)^2)  -- optimal bits
//! - k = (m/n) * ln(2)           -- optimal hash functions

use std::f64::consts::LN_2;

/// Upper bound on derived hash counts
pub const MAX_DERIVED_HASH_COUNT: usize = 32;

/// Filter parameters
#[derive(Clone, Debug, PartialEq)]
pub struct BloomFilterParams {
    /// Number of bits in the filter
    pub size_bits: usize,
    /// Number of hash functions
    pub hash_count: usize,
    /// Expected false positive rate with these parameters
    pub expected_fpr: f64,
}

/// Calculate optimal filter parameters for an expected number of passwords
///
/// # Arguments
/// * `num_elements` - Expected number of distinct values to insert (n)
/// * `target_fpr` - Target false positive rate
pub fn calculate_optimal_parameters(num_elements: usize, target_fpr: f64) -> BloomFilterParams {
    if num_elements == 0 {
        return BloomFilterParams {
            size_bits: 1,
            hash_count: 1,
            expected_fpr: 1.0,
        };
    }

    let m = minimum_bits(num_elements, target_fpr).max(1);
    let k = optimal_k(m, num_elements).clamp(1, MAX_DERIVED_HASH_COUNT);
    let expected_fpr = calculate_fpr(m, num_elements, k);

    BloomFilterParams {
        size_bits: m,
        hash_count: k,
        expected_fpr,
    }
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}

/// Calculate optimal k for given m and n
pub fn optimal_k(m: usize, n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    ((m as f64 / n as f64) * LN_2).round() as usize
}

/// Calculate minimum m for given n and target FPR
pub fn minimum_bits(n: usize, target_fpr: f64) -> usize {
    let ln2_squared = LN_2 * LN_2;
    (-(n as f64) * target_fpr.ln() / ln2_squared).ceil() as usize
}
