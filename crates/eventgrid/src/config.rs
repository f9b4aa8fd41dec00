//! Configuration types for eventgrid checks.
//!
//! This module provides configuration structures that control which rules run
//! and how their findings are judged. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`RulesConfig`] - Switches for the positioning, flow-type and slice rules.
//! - [`ReportConfig`] - Controls whether warnings fail a check.
//!
//! # Example
//!
//! ```
//! # use eventgrid::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.rules().positioning());
//! assert!(!config.report().deny_warnings());
//! ```

use serde::Deserialize;

use eventgrid_parser::ValidateConfig;

/// Top-level application configuration combining rule and report settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Rule switches.
    #[serde(default)]
    rules: RulesConfig,

    /// Report settings.
    #[serde(default)]
    report: ReportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified rule and report settings.
    pub fn new(rules: RulesConfig, report: ReportConfig) -> Self {
        Self { rules, report }
    }

    /// Returns the rule configuration.
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Returns the report configuration.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }

    /// Returns a copy with `deny_warnings` forced on or off.
    pub fn with_deny_warnings(mut self, deny_warnings: bool) -> Self {
        self.report.deny_warnings = deny_warnings;
        self
    }
}

fn enabled() -> bool {
    true
}

/// Which semantic rules run after parsing. Every rule is on by default.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RulesConfig {
    #[serde(default = "enabled")]
    positioning: bool,

    #[serde(default = "enabled")]
    flow_types: bool,

    #[serde(default = "enabled")]
    slices: bool,
}

impl RulesConfig {
    pub fn new(positioning: bool, flow_types: bool, slices: bool) -> Self {
        Self {
            positioning,
            flow_types,
            slices,
        }
    }

    pub fn positioning(&self) -> bool {
        self.positioning
    }

    pub fn flow_types(&self) -> bool {
        self.flow_types
    }

    pub fn slices(&self) -> bool {
        self.slices
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

impl From<&RulesConfig> for ValidateConfig {
    fn from(rules: &RulesConfig) -> Self {
        ValidateConfig::new(rules.positioning, rules.flow_types, rules.slices)
    }
}

/// How findings are judged.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ReportConfig {
    /// Treat rule warnings as failures.
    #[serde(default)]
    deny_warnings: bool,
}

impl ReportConfig {
    pub fn new(deny_warnings: bool) -> Self {
        Self { deny_warnings }
    }

    pub fn deny_warnings(&self) -> bool {
        self.deny_warnings
    }
}
