//! Student-t tail probabilities for coefficient inference.
//!
//! ## Purpose
//!
//! This module provides a trait-based bridge from generic `Float` scalars to
//! the concrete `statrs` special-function backend, exposing the one
//! distribution quantity the regression layer needs: the two-sided tail
//! probability of Student's t distribution.
//!
//! ## Design notes
//!
//! * Uses the regularized incomplete beta identity
//!   `P(|T_df| >= |t|) = I_x(df/2, 1/2)` with `x = df / (df + t^2)`,
//!   avoiding any quadrature or series code of our own.
//! * Generic `FloatStats` types (f32 and f64) delegate to the f64 backend.

use num_traits::Float;

// ============================================================================
// FloatStats Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the statrs backend.
pub trait FloatStats: Float {
    /// Two-sided tail probability `P(|T_df| >= |t|)` of Student's t
    /// distribution with `df` degrees of freedom.
    ///
    /// Returns 0 for infinite `t`, NaN for NaN input or `df <= 0`.
    fn tail_two_sided(t: Self, df: Self) -> Self;
}

impl FloatStats for f64 {
    #[inline]
    fn tail_two_sided(t: f64, df: f64) -> f64 {
        statrs_backend::student_tail_two_sided_f64(t, df)
    }
}

impl FloatStats for f32 {
    #[inline]
    fn tail_two_sided(t: f32, df: f32) -> f32 {
        statrs_backend::student_tail_two_sided_f64(t as f64, df as f64) as f32
    }
}

// ============================================================================
// Statrs Backend Implementation
// ============================================================================

/// Statrs-based special function evaluation.
pub mod statrs_backend {
    use statrs::function::beta::beta_reg;

    /// Two-sided Student-t tail probability using f64 precision.
    pub fn student_tail_two_sided_f64(t: f64, df: f64) -> f64 {
        if t.is_nan() || df.is_nan() || df <= 0.0 {
            return f64::NAN;
        }
        if t.is_infinite() {
            return 0.0;
        }
        if t == 0.0 {
            return 1.0;
        }

        // x lies in (0, 1) here, inside beta_reg's domain.
        let x = df / (df + t * t);
        beta_reg(0.5 * df, 0.5, x)
    }
}
