//! Evaluation limits

/// Bounds on work a single rule may cause at evaluation time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalLimits {
    /// Longest string `+` or `*` may produce, in characters, and longest
    /// list `+` may produce
    pub max_string_length: usize,
    /// Largest exponent magnitude accepted by `**`
    pub max_power: f64,
}

impl Default for EvalLimits {
    fn default() -> Self {
        Self {
            max_string_length: 100_000,
            max_power: 4_000_000.0,
        }
    }
}
