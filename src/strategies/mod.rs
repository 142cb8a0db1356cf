//! Screening rules and the evaluator that applies them to latest values.

pub mod convergence;
pub mod evaluator;
pub mod presets;
pub mod profile;

pub use convergence::moving_averages_converge;
pub use evaluator::{ConditionOutcome, ConditionResult, Evaluation, ScreeningEvaluator};
pub use profile::{ProfileError, ScreeningProfile};
