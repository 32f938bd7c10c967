//! Compound-interest calculation.
//!
//! ## Purpose
//!
//! This module computes the closed-form compound-interest formula
//! `final = principal * (1 + (rate/100)/m)^(m*years)` and packages the
//! outcome as an immutable result record.
//!
//! ## Design notes
//!
//! * **Generics**: Calculations are generic over `Float` types.
//! * **Rounding**: Final amount and interest earned are rounded to 2
//!   decimal places in the result; intermediate math is unrounded.
//! * **Validated**: Non-finite or negative principal/rate and a zero
//!   compounding frequency are rejected up front. The term is a `u32`, so
//!   negative terms are unrepresentable.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: Either call [`compound_interest`] directly or
//!   build a [`CompoundInterest`] fluently and finish with `.compute()`.
//!   The builder supplies the conventional default of monthly compounding.
//!
//! ## Invariants
//!
//! * After a successful call, every field of the result is non-negative.
//! * `interest_earned` equals `final_amount - principal` up to rounding.
//!
//! ## Non-goals
//!
//! * This module does not model amortization schedules or payment streams.
//! * This module does not handle currency formatting beyond two decimals.

// External dependencies
use num_traits::Float;
use std::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::errors::AlgoKitError;

// ============================================================================
// Result Structure
// ============================================================================

/// Outcome of a compound-interest calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestBreakdown<T> {
    /// Initial invested capital.
    pub principal: T,

    /// Capital after the full term, rounded to 2 decimal places.
    pub final_amount: T,

    /// Interest earned over the term, rounded to 2 decimal places.
    pub interest_earned: T,

    /// Annual interest rate, in percent, as supplied.
    pub annual_rate: T,

    /// Term of the investment in whole years.
    pub years: u32,
}

impl<T: Float + Display> Display for InterestBreakdown<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Compound Interest:")?;
        writeln!(f, "  Principal:     {:.2}", self.principal)?;
        writeln!(f, "  Annual rate:   {}%", self.annual_rate)?;
        writeln!(f, "  Term:          {} years", self.years)?;
        writeln!(f, "  Final amount:  {:.2}", self.final_amount)?;
        write!(f, "  Interest:      {:.2}", self.interest_earned)
    }
}

// ============================================================================
// Calculation
// ============================================================================

/// Round a value to 2 decimal places.
fn round2<T: Float>(value: T) -> T {
    let cents = T::from(100.0).unwrap();
    (value * cents).round() / cents
}

/// Compute compound interest over a whole-year term.
///
/// `annual_rate` is a percentage (5 means 5%); `compounds_per_year` is the
/// number of capitalization events per year (12 for monthly).
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// let outcome = compound_interest(1000.0, 5.0, 10, 12)?;
/// assert_eq!(outcome.final_amount, 1647.01);
/// assert_eq!(outcome.interest_earned, 647.01);
/// # Result::<(), AlgoKitError>::Ok(())
/// ```
pub fn compound_interest<T: Float>(
    principal: T,
    annual_rate: T,
    years: u32,
    compounds_per_year: u32,
) -> Result<InterestBreakdown<T>, AlgoKitError> {
    // Check 1: Principal finite and non-negative
    if !principal.is_finite() || principal < T::zero() {
        return Err(AlgoKitError::InvalidPrincipal(
            principal.to_f64().unwrap_or(f64::NAN),
        ));
    }

    // Check 2: Rate finite and non-negative
    if !annual_rate.is_finite() || annual_rate < T::zero() {
        return Err(AlgoKitError::InvalidRate(
            annual_rate.to_f64().unwrap_or(f64::NAN),
        ));
    }

    // Check 3: At least one capitalization per year
    if compounds_per_year == 0 {
        return Err(AlgoKitError::InvalidCompounding(compounds_per_year));
    }

    let hundred = T::from(100.0).unwrap();
    let periods_per_year = T::from(compounds_per_year).unwrap();
    let total_periods = T::from(compounds_per_year as u64 * years as u64).unwrap();

    let rate_per_period = (annual_rate / hundred) / periods_per_year;
    let final_amount = principal * (T::one() + rate_per_period).powf(total_periods);
    let interest_earned = final_amount - principal;

    Ok(InterestBreakdown {
        principal,
        final_amount: round2(final_amount),
        interest_earned: round2(interest_earned),
        annual_rate,
        years,
    })
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a compound-interest calculation.
///
/// Defaults to monthly compounding (12 periods per year).
///
/// # Examples
///
/// ```
/// use algokit::prelude::*;
///
/// let outcome = CompoundInterest::new()
///     .principal(1000.0)
///     .annual_rate(5.0)
///     .years(10)
///     .compute()?;
///
/// assert_eq!(outcome.final_amount, 1647.01);
/// # Result::<(), AlgoKitError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct CompoundInterest<T> {
    /// Initial invested capital.
    principal: T,

    /// Annual interest rate, in percent.
    annual_rate: T,

    /// Term of the investment in whole years.
    years: u32,

    /// Capitalization events per year.
    compounds_per_year: u32,
}

impl<T: Float> Default for CompoundInterest<T> {
    fn default() -> Self {
        Self {
            principal: T::zero(),
            annual_rate: T::zero(),
            years: 0,
            compounds_per_year: 12,
        }
    }
}

impl<T: Float> CompoundInterest<T> {
    /// Create a builder with a zero principal, zero rate, zero term, and
    /// monthly compounding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial capital.
    pub fn principal(mut self, principal: T) -> Self {
        self.principal = principal;
        self
    }

    /// Set the annual rate, in percent.
    pub fn annual_rate(mut self, annual_rate: T) -> Self {
        self.annual_rate = annual_rate;
        self
    }

    /// Set the term in whole years.
    pub fn years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    /// Set the number of capitalization events per year.
    pub fn compounds_per_year(mut self, compounds_per_year: u32) -> Self {
        self.compounds_per_year = compounds_per_year;
        self
    }

    /// Validate the configuration and compute the breakdown.
    pub fn compute(self) -> Result<InterestBreakdown<T>, AlgoKitError> {
        compound_interest(
            self.principal,
            self.annual_rate,
            self.years,
            self.compounds_per_year,
        )
    }
}
