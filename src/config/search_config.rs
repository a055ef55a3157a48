// src/config/search_config.rs

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::checks::{IrreducibleMethod, PrimitiveMethod};

/// Search configuration for the demo driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Field base p of GF(p)
    pub base: u64,

    /// Degree of the candidate polynomials
    pub degree: usize,

    /// Number of accepted polynomials to collect
    pub count: usize,

    /// Worker threads; None means one per core
    pub threads: Option<usize>,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Irreducibility test to run per candidate
    pub irreducible_method: IrreducibleMethod,

    /// Primitivity test to run per candidate
    pub primitive_method: PrimitiveMethod,

    /// Discard in-flight results at stop instead of draining them
    pub strict: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            base: 2,
            degree: 5,
            count: 3,
            threads: None,
            log_level: "info".to_string(),
            irreducible_method: IrreducibleMethod::Berlekamp,
            primitive_method: PrimitiveMethod::Nil,
            strict: true,
        }
    }
}

impl SearchConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("base", 2)?
            .set_default("degree", 5)?
            .set_default("count", 3)?
            .set_default("log_level", "info")?
            .set_default("irreducible_method", "berlekamp")?
            .set_default("primitive_method", "nil")?
            .set_default("strict", true)?;

        if Path::new("polyhunter.toml").exists() {
            builder = builder.add_source(File::with_name("polyhunter.toml"));
        }

        builder = builder.add_source(
            Environment::with_prefix("POLYHUNTER")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
