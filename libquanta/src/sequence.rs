//! Quantum Sequence Generator
//!
//! Уровень i получает квант start * rate^i, округлённый до целого.
//! Level i gets the quantum start * rate^i, rounded to an integer.
//!
//! Округление / Rounding: f64::round — половина от нуля (для положительных
//! значений это half-up: 11.5 → 12, 12.5 → 13).
//! Python `round()` в gen_time_quanta.py округляет к чётному: 12.5 → 12.
//! The Python `round()` of gen_time_quanta.py rounds ties to even, so tables
//! differ from it on exact `.5` values with an odd integer part (12.5 → 12 there).

use crate::rate::{RateMode, ResolvedRate};
use crate::{QuantaError, Result};

/// Верхняя граница числа уровней / Upper bound on the level count.
/// Checked before anything is allocated.
pub const MAX_LEVELS: usize = 1024;

/// Параметры генерации / Generation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    pub levels:        usize,
    pub start_quantum: f64,
    pub mode:          RateMode,
}

impl GenerationParameters {
    pub const fn new(levels: usize, start_quantum: f64, mode: RateMode) -> Self {
        Self { levels, start_quantum, mode }
    }

    /// Проверить всё до вычислений / Check everything before computing.
    fn validate(&self) -> Result<()> {
        if self.levels < 1 {
            return Err(QuantaError::invalid(
                "levels",
                format!("must be at least 1, got {}", self.levels),
            ));
        }
        if self.levels > MAX_LEVELS {
            return Err(QuantaError::invalid(
                "levels",
                format!("must be at most {MAX_LEVELS}, got {}", self.levels),
            ));
        }
        if !(self.start_quantum > 0.0) || !self.start_quantum.is_finite() {
            return Err(QuantaError::invalid(
                "start_quantum",
                format!("must be a positive finite number, got {}", self.start_quantum),
            ));
        }
        Ok(())
    }
}

/// Готовая таблица квантов / Finished quantum table
#[derive(Debug, Clone, PartialEq)]
pub struct QuantumSequence {
    values:        Vec<u64>,
    start_quantum: f64,
    rate:          ResolvedRate,
}

impl QuantumSequence {
    pub fn values(&self) -> &[u64] { &self.values }
    pub fn rate(&self) -> ResolvedRate { self.rate }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn last(&self) -> Option<u64> { self.values.last().copied() }
    pub fn into_vec(self) -> Vec<u64> { self.values }

    /// Unrounded per-level values, recomputed from the start quantum and rate.
    pub fn raw_values(&self) -> Vec<f64> {
        (0..self.values.len())
            .map(|level| raw_quantum(self.start_quantum, self.rate.value, level))
            .collect()
    }
}

fn raw_quantum(start: f64, rate: f64, level: usize) -> f64 {
    start * rate.powf(level as f64)
}

/// Сгенерировать таблицу / Generate the table.
pub fn generate(params: GenerationParameters) -> Result<QuantumSequence> {
    params.validate()?;
    let rate = params.mode.resolve(params.levels, params.start_quantum)?;

    let mut values = Vec::with_capacity(params.levels);
    for level in 0..params.levels {
        let raw = raw_quantum(params.start_quantum, rate.value, level).round();
        // u64::MAX as f64 округляется вверх до 2^64 / rounds up to 2^64
        if !raw.is_finite() || raw >= u64::MAX as f64 {
            return Err(QuantaError::invalid(
                "growth_rate",
                format!("quantum at level {level} overflows ({raw})"),
            ));
        }
        values.push(raw as u64);
    }

    log::trace!("generated {} levels: {:?}", values.len(), values);
    Ok(QuantumSequence { values, start_quantum: params.start_quantum, rate })
}

/// Shorthand for `generate(GenerationParameters::new(..))`.
pub fn generate_with(levels: usize, start_quantum: f64, mode: RateMode) -> Result<QuantumSequence> {
    generate(GenerationParameters::new(levels, start_quantum, mode))
}
