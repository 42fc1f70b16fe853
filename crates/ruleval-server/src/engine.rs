//! Rule engine initialization
//!
//! Converts the server configuration into an SDK engine.

use crate::config::ServerConfig;
use anyhow::Result;
use ruleval_sdk::{RuleEngine, RuleEngineBuilder};
use tracing::info;

/// Initialize the rule engine from the `engine` section of the config
pub fn init_engine(config: &ServerConfig) -> Result<RuleEngine> {
    let engine = RuleEngineBuilder::new()
        .with_config(config.engine.clone())
        .build()?;

    info!(
        max_rule_length = config.engine.max_rule_length,
        max_depth = config.engine.max_depth,
        max_string_length = config.engine.max_string_length,
        max_power = config.engine.max_power,
        "Rule engine initialized"
    );
    Ok(engine)
}
