use thiserror::Error;

/// Accuracy evaluation errors.
///
/// ┌ Malformed actual/predicted series (empty, unequal, non-finite)
/// └ Undefined MAPE (zero actual value)
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("empty input: no actual/predicted pairs provided")]
    EmptyInput,

    #[error("unequal length: actual has {actual_len} elements, predicted has {predicted_len}")]
    UnequalLength { actual_len: usize, predicted_len: usize },

    #[error("non-finite actual value at index {idx}")]
    NonFiniteActual { idx: usize },

    #[error("non-finite predicted value at index {idx}")]
    NonFinitePredicted { idx: usize },

    #[error("mape undefined: actual value at index {idx} is zero")]
    UndefinedMape { idx: usize },
}
