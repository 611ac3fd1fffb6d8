//! Growth rate resolution
//!
//! Коэффициент роста выбирается одним из трёх режимов:
//! The growth factor is picked by one of three modes:
//!   TargetMax(t) — вычислить из желаемого последнего кванта / back-solve from the last quantum
//!   Fixed(r)     — задан явно / given explicitly
//!   Default      — 1.15 (плавная кривая / smooth curve)
//!
//! TargetMax ВСЕГДА важнее Fixed.
//! TargetMax ALWAYS overrides Fixed.

use core::fmt;

use crate::{QuantaError, Result};

/// Коэффициент по умолчанию библиотеки (+15% на уровень).
/// Library default factor (+15% per level), used by `RateMode::Default`.
pub const DEFAULT_GROWTH_RATE: f64 = 1.15;

/// Коэффициент, который передаёт точка входа (+10% на уровень).
/// Factor the command-line entry point passes unless told otherwise.
/// Never applied implicitly by the library.
pub const ENTRY_POINT_GROWTH_RATE: f64 = 1.1;

/// Режим выбора коэффициента / Rate selection mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateMode {
    /// Fixed multiplicative factor per level.
    Fixed(f64),
    /// Desired quantum at the last level.
    TargetMax(f64),
    /// `DEFAULT_GROWTH_RATE`.
    Default,
}

impl RateMode {
    /// Build a mode from two optional knobs. `target_max` wins over
    /// `growth_rate`; neither given means `Default`.
    pub fn from_options(growth_rate: Option<f64>, target_max: Option<f64>) -> Self {
        match (growth_rate, target_max) {
            (_, Some(target)) => RateMode::TargetMax(target),
            (Some(rate), None) => RateMode::Fixed(rate),
            (None, None) => RateMode::Default,
        }
    }

    /// Resolve to a concrete factor for `levels` levels starting at `start_quantum`.
    ///
    /// `start_quantum` is assumed already validated as positive and finite.
    pub fn resolve(self, levels: usize, start_quantum: f64) -> Result<ResolvedRate> {
        let value = match self {
            RateMode::TargetMax(target) => {
                if levels < 2 {
                    return Err(QuantaError::invalid(
                        "levels",
                        format!("target-max mode needs at least 2 levels, got {levels}"),
                    ));
                }
                if !(target > 0.0) || !target.is_finite() {
                    return Err(QuantaError::invalid(
                        "target_max",
                        format!("must be a positive finite number, got {target}"),
                    ));
                }
                let exponent = 1.0 / (levels - 1) as f64;
                (target / start_quantum).powf(exponent)
            }
            RateMode::Fixed(rate) => rate,
            RateMode::Default => DEFAULT_GROWTH_RATE,
        };

        // NaN не проходит сравнение / NaN fails the comparison
        if !(value > 0.0) || !value.is_finite() {
            return Err(QuantaError::invalid(
                "growth_rate",
                format!("resolved rate must be positive and finite, got {value}"),
            ));
        }

        let resolved = ResolvedRate { mode: self, value };
        resolved.announce();
        Ok(resolved)
    }
}

/// Коэффициент, реально используемый при развёртке.
/// The factor actually used for expansion, with the mode it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRate {
    pub mode:  RateMode,
    pub value: f64,
}

impl ResolvedRate {
    /// Per-level increase in percent, e.g. 10.0 for a factor of 1.1.
    pub fn percent_increase(&self) -> f64 {
        (self.value - 1.0) * 100.0
    }

    fn announce(&self) {
        match self.mode {
            RateMode::TargetMax(target) => log::info!(
                "Calculated growth rate to hit {}ms: {:.4} (approx {:.1}%)",
                target,
                self.value,
                self.percent_increase()
            ),
            RateMode::Default => log::info!("Using default growth rate: {:.2}", self.value),
            RateMode::Fixed(_) => log::debug!("Using fixed growth rate: {}", self.value),
        }
    }
}

impl fmt::Display for ResolvedRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.mode {
            RateMode::TargetMax(_) => "target-max",
            RateMode::Fixed(_) => "fixed",
            RateMode::Default => "default",
        };
        write!(f, "{:.4} ({mode})", self.value)
    }
}
