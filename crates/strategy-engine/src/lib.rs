pub mod classifier;
pub mod rules;


pub use classifier::{classify, EngineMode, StrategyEngine};
pub use rules::{rule_cascade, Rule};
