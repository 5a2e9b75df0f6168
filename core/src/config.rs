use crate::{
    error::EngineResult,
    shrinkage::ShrinkagePolicy,
    target::ServiceLevelTarget,
    types::AgentCount,
};
use serde::{Deserialize, Serialize};

/// A named SLA such as "80/20".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlaScenario {
    pub name:           String,
    pub target_pct:     f64,
    pub target_seconds: f64,
}

impl SlaScenario {
    pub fn new(name: impl Into<String>, target_pct: f64, target_seconds: f64) -> Self {
        Self { name: name.into(), target_pct, target_seconds }
    }

    pub fn target(&self) -> EngineResult<ServiceLevelTarget> {
        ServiceLevelTarget::from_percent(self.target_pct, self.target_seconds)
    }
}

/// Industry-standard comparison set.
pub fn standard_sla_scenarios() -> Vec<SlaScenario> {
    vec![
        SlaScenario::new("80/20", 80.0, 20.0),
        SlaScenario::new("80/30", 80.0, 30.0),
        SlaScenario::new("90/20", 90.0, 20.0),
        SlaScenario::new("90/30", 90.0, 30.0),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Overrides the ⌈10·A + 100⌉ agent search ceiling.
    pub max_agents:            Option<AgentCount>,
    pub max_shrinkage_pct:     f64,
    pub default_shrinkage_pct: f64,
    pub sla_scenarios:         Vec<SlaScenario>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_agents:            None,
            max_shrinkage_pct:     1.0,
            default_shrinkage_pct: 0.30,
            sla_scenarios:         standard_sla_scenarios(),
        }
    }
}

impl CalculatorConfig {
    /// Load from a JSON file. Absent fields keep their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config = Self::from_json(&content)
            .map_err(|e| anyhow::anyhow!("Invalid calculator config {path}: {e}"))?;
        log::debug!(
            "loaded calculator config from {path}: {} SLA scenarios",
            config.sla_scenarios.len()
        );
        Ok(config)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn shrinkage_policy(&self) -> EngineResult<ShrinkagePolicy> {
        ShrinkagePolicy::new(self.max_shrinkage_pct)
    }

    pub fn validate(&self) -> EngineResult<()> {
        let policy = self.shrinkage_policy()?;
        policy.validate(self.default_shrinkage_pct)?;
        for scenario in &self.sla_scenarios {
            scenario.target()?;
        }
        Ok(())
    }
}
