pub mod evaluation;
pub mod evaluator;

pub use evaluation::Evaluation;
pub use evaluator::{Dataset, Evaluator, StaticEvaluator, TestInputs};
