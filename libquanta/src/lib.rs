//! libquanta — таблица квантов времени для MLFQ планировщика
//!
//! Вычисляет возрастающую последовательность квантов по уровням приоритета
//! и выводит её как `constexpr` массив для вставки в код планировщика.
//! Computes a growing per-level quantum sequence and renders it as a
//! `constexpr` array for embedding into scheduler sources.
//!
//! Использование / Usage:
//!   use libquanta::{generate_with, render, RateMode};
//!   let seq = generate_with(16, 10.0, RateMode::Fixed(1.1))?;
//!   print!("{}", render(seq.values(), 8));

pub mod rate;
pub mod render;
pub mod sequence;

pub use rate::{RateMode, ResolvedRate, DEFAULT_GROWTH_RATE, ENTRY_POINT_GROWTH_RATE};
pub use render::{render, render_with, TableStyle, DEFAULT_ROW_WIDTH};
pub use sequence::{generate, generate_with, GenerationParameters, QuantumSequence, MAX_LEVELS};

use thiserror::Error;

/// Ошибки генерации / Generation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantaError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl QuantaError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name, reason: reason.into() }
    }
}

pub type Result<T> = core::result::Result<T, QuantaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_display() {
        let err = QuantaError::invalid("levels", "must be at least 1, got 0");
        let s = err.to_string();
        assert!(s.contains("`levels`"));
        assert!(s.contains("at least 1"));
    }
}
