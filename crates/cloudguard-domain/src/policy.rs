use cloudguard_types::Partition;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Failing,
    Warning,
}

/// Opaque per-rule configuration, forwarded to the rule verbatim.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleSettings(JsonValue);

impl RuleSettings {
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    pub fn as_json(&self) -> &JsonValue {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }
}

/// Static partition enumeration, keyed by cache resource kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartitionMap(BTreeMap<String, Vec<Partition>>);

impl PartitionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: impl Into<String>, partitions: Vec<Partition>) {
        self.0.insert(kind.into(), partitions);
    }

    /// Partitions configured for `kind`; empty when the kind is not configured.
    pub fn for_kind(&self, kind: &str) -> &[Partition] {
        self.0.get(kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Vec<Partition>)> for PartitionMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Partition>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Clone, Debug)]
pub struct RulePolicy {
    pub enabled: bool,
    pub settings: RuleSettings,
}

impl RulePolicy {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            settings: RuleSettings::default(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            settings: RuleSettings::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScanConfig {
    pub fail_on: FailOn,
    pub partitions: PartitionMap,
    pub rules: BTreeMap<String, RulePolicy>,
}

impl ScanConfig {
    pub fn rule_policy(&self, rule_id: &str) -> Option<&RulePolicy> {
        self.rules.get(rule_id).filter(|p| p.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unconfigured_kind_has_no_partitions() {
        let mut map = PartitionMap::new();
        map.insert("clusters.kubernetes", vec![Partition::from("us-east1")]);
        assert_eq!(map.for_kind("clusters.kubernetes").len(), 1);
        assert!(map.for_kind("instances.compute").is_empty());
    }

    #[test]
    fn disabled_rules_have_no_policy() {
        let mut rules = BTreeMap::new();
        rules.insert("a".to_string(), RulePolicy::enabled());
        rules.insert("b".to_string(), RulePolicy::disabled());
        let cfg = ScanConfig {
            fail_on: FailOn::Failing,
            partitions: PartitionMap::new(),
            rules,
        };
        assert!(cfg.rule_policy("a").is_some());
        assert!(cfg.rule_policy("b").is_none());
        assert!(cfg.rule_policy("c").is_none());
    }

    #[test]
    fn settings_are_opaque_json() {
        let settings = RuleSettings::new(json!({"threshold": 3}));
        assert_eq!(settings.get("threshold"), Some(&json!(3)));
        assert_eq!(RuleSettings::default().as_json(), &JsonValue::Null);
    }
}
