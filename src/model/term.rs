//! Candidate regression terms.
//!
//! ## Purpose
//!
//! This module defines `Term`, a product of input columns raised to
//! exponents with optional time lags (for example `x^2 * y[t-1]`), together
//! with its per-subset column cache, its canonical identity, and the
//! statistics it would contribute if added to the owning model.
//!
//! ## Design notes
//!
//! * **Immutable parts**: a term's parts never change after construction;
//!   the only mutable state is the per-subset column cache, filled at most
//!   once per subset and dropped wholesale by `clear_cache`.
//! * **Explicit materialization status**: construction eagerly attempts the
//!   default-subset column. A failure does not abort construction and is
//!   not discarded; it is recorded in a `Materialization` status the caller
//!   can inspect before trusting the term.
//! * **Typed statistics sentinel**: `stats` converts every underlying
//!   failure into a `StatsFailure` value carrying the parts snapshot, the
//!   subset, and the source error, so a batch candidate-evaluation loop
//!   continues past unusable terms without mistaking them for results.
//!
//! ## Key concepts
//!
//! * **Part**: one `(column, exponent, lag)` triple.
//! * **Intercept term**: the degenerate single part `(0, 0)`, whose column
//!   is all ones independent of the data.
//! * **Lag alignment**: lag-shifted columns leave their leading rows
//!   unusable; design and response matrices are row-sliced from
//!   `max(model.highest_lag(), term.lag())` so every column covers the same
//!   usable range.
//!
//! ## Invariants
//!
//! * A term owns at least one part; every part carries an explicit lag.
//! * Cache state per subset moves Uncomputed → Cached on first `col`, back
//!   to Uncomputed only via `clear_cache`.
//!
//! ## Non-goals
//!
//! * Term search and selection strategy.
//! * Managing the owning model's lifetime: every operation borrows a
//!   `ModelView` for its own duration only.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::cell::OnceCell;

use num_traits::Float;

use crate::math::matrix::Matrix;
use crate::math::student::FloatStats;
use crate::model::digest::{digest_parts, TermDigest};
use crate::model::view::ModelView;
use crate::primitives::errors::PolytermError;
use crate::primitives::subset::Subset;
use crate::regression::lstsq;

// ============================================================================
// TermPart
// ============================================================================

/// One `(column, exponent, lag)` factor of a term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermPart<T> {
    /// Index of the input column in the model's data table.
    pub column: usize,

    /// Exponent the column is raised to.
    pub exponent: T,

    /// Rows the column is shifted backward in time before use.
    pub lag: usize,
}

impl<T: Float> TermPart<T> {
    /// An unlagged part.
    #[inline]
    pub fn new(column: usize, exponent: T) -> Self {
        Self {
            column,
            exponent,
            lag: 0,
        }
    }

    /// A lagged part.
    #[inline]
    pub fn lagged(column: usize, exponent: T, lag: usize) -> Self {
        Self {
            column,
            exponent,
            lag,
        }
    }

    /// Parse a raw numeric triple `[column, exponent]` or
    /// `[column, exponent, lag]`.
    ///
    /// Fails with `PartArity` for any other length and `PartIndex` when the
    /// column or lag is not a non-negative integer. A missing lag defaults
    /// to 0.
    pub fn from_slice(raw: &[T]) -> Result<Self, PolytermError> {
        if raw.len() < 2 || raw.len() > 3 {
            return Err(PolytermError::PartArity { len: raw.len() });
        }

        let column = non_negative_index(raw[0])?;
        let lag = if raw.len() == 3 {
            non_negative_index(raw[2])?
        } else {
            0
        };

        Ok(Self {
            column,
            exponent: raw[1],
            lag,
        })
    }
}

fn non_negative_index<T: Float>(value: T) -> Result<usize, PolytermError> {
    let as_f64 = value.to_f64().unwrap_or(f64::NAN);
    if !as_f64.is_finite() || as_f64 < 0.0 || as_f64.fract() != 0.0 {
        return Err(PolytermError::PartIndex { value: as_f64 });
    }
    Ok(as_f64 as usize)
}

// ============================================================================
// Materialization Status
// ============================================================================

/// Outcome of the eager column materialization attempted at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Materialization {
    /// The default-subset column materialized.
    Ready,

    /// Materialization failed; the error is preserved for inspection. The
    /// term still participates in identity comparisons, and a later `col`
    /// call will retry.
    Failed(PolytermError),
}

impl Materialization {
    /// Whether the eager materialization succeeded.
    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, Materialization::Ready)
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// The scalar statistics of a term hypothetically added to the model: the
/// appended column's coefficient, t-statistic, and p-value, plus the fit's
/// residual mean squared error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermStats<T> {
    /// Coefficient of the term's column in the augmented fit.
    pub coeff: T,

    /// t-statistic of that coefficient.
    pub t: T,

    /// Two-sided p-value of that coefficient.
    pub pt: T,

    /// Residual mean squared error of the augmented fit.
    pub mse: T,
}

/// A failed statistics evaluation, carrying everything a search loop needs
/// to report or skip the candidate: the term's parts, the subset, and the
/// underlying error.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsFailure<T> {
    /// Snapshot of the term's parts.
    pub parts: Vec<TermPart<T>>,

    /// The subset the evaluation ran against.
    pub subset: Subset,

    /// The underlying kernel or solver error.
    pub source: PolytermError,
}

impl<T: Float + fmt::Display> fmt::Display for StatsFailure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "evaluation of ")?;
        write_parts(f, &self.parts)?;
        write!(f, " on {} failed: {}", self.subset, self.source)
    }
}

impl<T: Float + fmt::Debug + fmt::Display> std::error::Error for StatsFailure<T> {}

// ============================================================================
// Term
// ============================================================================

/// A product of input columns raised to exponents with optional lags.
///
/// Equality and hashing use the canonical digest: part order is irrelevant,
/// every `(column, exponent, lag)` value is significant.
///
/// The per-subset cache fills without synchronization (`Term` is not
/// `Sync`); embedding terms in a concurrent system requires an external
/// lock per term.
#[derive(Debug, Clone)]
pub struct Term<T> {
    parts: Vec<TermPart<T>>,
    digest: TermDigest,
    materialization: Materialization,
    cache: [OnceCell<Matrix<T>>; Subset::COUNT],
}

impl<T: Float> Term<T> {
    /// Create a term from a parts list.
    ///
    /// Fails with `EmptyTerm` for an empty list. Construction eagerly
    /// attempts to materialize the default-subset column; a failure there
    /// does not abort construction and is retrievable via
    /// [`materialization`](Self::materialization).
    pub fn new<M: ModelView<T>>(
        model: &M,
        parts: Vec<TermPart<T>>,
    ) -> Result<Self, PolytermError> {
        if parts.is_empty() {
            return Err(PolytermError::EmptyTerm);
        }

        let digest = digest_parts(&parts);
        let mut term = Self {
            parts,
            digest,
            materialization: Materialization::Ready,
            cache: core::array::from_fn(|_| OnceCell::new()),
        };

        let eager = term.col(model, Subset::default()).err();
        if let Some(err) = eager {
            term.materialization = Materialization::Failed(err);
        }
        Ok(term)
    }

    /// Create a term from raw numeric triples via
    /// [`TermPart::from_slice`].
    pub fn from_raw<M: ModelView<T>>(model: &M, raw: &[&[T]]) -> Result<Self, PolytermError> {
        let parts = raw
            .iter()
            .map(|part| TermPart::from_slice(part))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(model, parts)
    }

    /// Outcome of the eager construction-time materialization.
    #[inline]
    pub fn materialization(&self) -> &Materialization {
        &self.materialization
    }

    /// Whether the eager materialization succeeded.
    #[inline]
    pub fn is_usable(&self) -> bool {
        self.materialization.is_ready()
    }

    /// Whether this is the intercept term: exactly one part with column 0
    /// and exponent 0.
    #[inline]
    pub fn is_intercept(&self) -> bool {
        self.parts.len() == 1 && self.parts[0].column == 0 && self.parts[0].exponent == T::zero()
    }

    /// Maximum lag across parts.
    #[inline]
    pub fn lag(&self) -> usize {
        self.parts.iter().map(|part| part.lag).max().unwrap_or(0)
    }

    /// Borrowed view of the parts.
    #[inline]
    pub fn parts(&self) -> &[TermPart<T>] {
        &self.parts
    }

    /// Defensive copy of the parts, suitable for reconstruction elsewhere.
    #[inline]
    pub fn to_parts(&self) -> Vec<TermPart<T>> {
        self.parts.clone()
    }

    /// The canonical content digest.
    #[inline]
    pub fn digest(&self) -> &TermDigest {
        &self.digest
    }

    /// Whether this term's identity matches a candidate parts list, in any
    /// order, without building a term.
    pub fn matches_parts(&self, parts: &[TermPart<T>]) -> bool {
        self.digest == digest_parts(parts)
    }

    /// The term's data column for `subset`, cached after the first call.
    ///
    /// The column is the elementwise product over parts of the part's data
    /// column raised to its exponent and shifted by its lag, starting from
    /// a column of ones. The leading `lag()` rows hold shifted-in zeros and
    /// are unusable until aligned away by [`design`](Self::design) /
    /// [`response`](Self::response).
    pub fn col<M: ModelView<T>>(
        &self,
        model: &M,
        subset: Subset,
    ) -> Result<&Matrix<T>, PolytermError> {
        let slot = &self.cache[subset.index()];
        if let Some(cached) = slot.get() {
            return Ok(cached);
        }

        let built = self.build_col(model, subset)?;
        Ok(slot.get_or_init(|| built))
    }

    fn build_col<M: ModelView<T>>(
        &self,
        model: &M,
        subset: Subset,
    ) -> Result<Matrix<T>, PolytermError> {
        let data = model.data(subset);
        let mut product = Matrix::filled(data.rows(), 1, T::one());

        for part in &self.parts {
            let column = data.col(part.column)?;

            // A negative exponent over a column whose range spans or
            // touches zero would divide by zero somewhere in the column.
            if part.exponent < T::zero() && column.max() * column.min() <= T::zero() {
                return Err(PolytermError::DivideByZero {
                    column: part.column,
                });
            }

            product = product.dot_multiply(&column.dot_pow(part.exponent).shift(part.lag))?;
        }

        Ok(product)
    }

    /// Drop every subset's cached column, forcing recomputation on next
    /// access. Call when the model's underlying data changes.
    pub fn clear_cache(&mut self) {
        for slot in &mut self.cache {
            slot.take();
        }
    }

    /// The model's design matrix augmented with this term's column and
    /// row-sliced from `max(model.highest_lag(), self.lag())`, so every
    /// column covers the same usable row range.
    pub fn design<M: ModelView<T>>(
        &self,
        model: &M,
        subset: Subset,
    ) -> Result<Matrix<T>, PolytermError> {
        let lag = self.alignment_lag(model);
        let col = self.col(model, subset)?;
        Ok(model.design(subset).hstack(col)?.rows_from(lag))
    }

    /// The model's response column under the same row alignment as
    /// [`design`](Self::design).
    pub fn response<M: ModelView<T>>(&self, model: &M, subset: Subset) -> Matrix<T> {
        model.response(subset).rows_from(self.alignment_lag(model))
    }

    #[inline]
    fn alignment_lag<M: ModelView<T>>(&self, model: &M) -> usize {
        self.lag().max(model.highest_lag())
    }
}

impl<T: FloatStats> Term<T> {
    /// Statistics of this term hypothetically added to the model: refit the
    /// augmented system and extract the appended column's coefficient,
    /// t-statistic, and p-value.
    ///
    /// Never panics and never propagates a bare kernel error: any failure
    /// (unusable column, collinear design, too few rows) is returned as a
    /// typed `StatsFailure` so a candidate-evaluation loop continues past
    /// this term.
    pub fn stats<M: ModelView<T>>(
        &self,
        model: &M,
        subset: Subset,
    ) -> Result<TermStats<T>, StatsFailure<T>> {
        self.try_stats(model, subset).map_err(|source| StatsFailure {
            parts: self.parts.clone(),
            subset,
            source,
        })
    }

    fn try_stats<M: ModelView<T>>(
        &self,
        model: &M,
        subset: Subset,
    ) -> Result<TermStats<T>, PolytermError> {
        let x = self.design(model, subset)?;
        let y = self.response(model, subset);
        let fit = lstsq(&x, &y)?;

        let last = fit.weights.rows() - 1;
        Ok(TermStats {
            coeff: fit.weights.get(last, 0),
            t: fit.t.get(last, 0),
            pt: fit.pt.get(last, 0),
            mse: fit.mse,
        })
    }
}

// ============================================================================
// Identity
// ============================================================================

impl<T: Float> PartialEq for Term<T> {
    /// Canonical-digest equality: order-independent over parts,
    /// exact-value-sensitive per part.
    fn eq(&self, other: &Self) -> bool {
        self.digest == other.digest
    }
}

impl<T: Float> Eq for Term<T> {}

impl<T: Float> Hash for Term<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digest.hash(state);
    }
}

// ============================================================================
// Display
// ============================================================================

impl<T: Float + fmt::Display> fmt::Display for Term<T> {
    /// Render as a product of factors, e.g. `x1^2 * x2[-1]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_parts(f, &self.parts)
    }
}

fn write_parts<T: Float + fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    parts: &[TermPart<T>],
) -> fmt::Result {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            write!(f, " * ")?;
        }
        write!(f, "x{}", part.column)?;
        if part.exponent != T::one() {
            write!(f, "^{}", part.exponent)?;
        }
        if part.lag > 0 {
            write!(f, "[-{}]", part.lag)?;
        }
    }
    Ok(())
}
