//! Quandary evaluation handlers.

mod evaluate_quandary;

pub use evaluate_quandary::{
    EvaluateError, EvaluateQuandaryCommand, EvaluateQuandaryHandler,
};
