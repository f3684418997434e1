//! Application services for access-control decisions.

#![forbid(unsafe_code)]

mod access_evaluator;

pub use access_evaluator::AccessEvaluator;
