//! Game-type-specific rule configs and the rule entries they carry.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// How a rule is rendered/applied. A rule may carry more than one tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum RuleType {
    /// General game setting (e.g. total hand count).
    GameConfig,
    /// Per-player penalty points.
    PlayerPenaltyScore,
    /// Finish/no-open scores that affect several players at once.
    FinishScore,
}

/// One configurable rule. `paired_key` links rules that are entered together
/// (a finish score and its matching no-open penalty).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuleConfig {
    pub key: String,
    pub label: String,
    pub types: BTreeSet<RuleType>,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paired_key: Option<String>,
}

impl RuleConfig {
    pub fn new(key: &str, label: &str, types: &[RuleType], value: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            types: types.iter().copied().collect(),
            value: value.to_string(),
            description: None,
            paired_key: None,
        }
    }

    pub fn with_paired_key(mut self, paired_key: &str) -> Self {
        self.paired_key = Some(paired_key.to_string());
        self
    }
}

/// Free-form Okey config: any rule set the table agrees on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OkeyConfig {
    pub is_partnered: bool,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl Default for OkeyConfig {
    fn default() -> Self {
        Self {
            is_partnered: true,
            rules: Vec::new(),
        }
    }
}

/// 101 Okey config. The rule list is fixed at construction: seven entries
/// covering the penalty and the three finish/no-open pairs. Only rule values
/// may change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct YuzBirOkeyConfig {
    pub is_partnered: bool,
    pub rules: Vec<RuleConfig>,
}

impl YuzBirOkeyConfig {
    pub fn new(is_partnered: bool) -> Self {
        Self {
            is_partnered,
            rules: default_yuz_bir_rules(),
        }
    }

    /// Update one rule's value. Returns false when no rule has this key.
    pub fn set_rule_value(&mut self, key: &str, value: &str) -> bool {
        match self.rules.iter_mut().find(|r| r.key == key) {
            Some(rule) => {
                rule.value = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn rule(&self, key: &str) -> Option<&RuleConfig> {
        self.rules.iter().find(|r| r.key == key)
    }
}

impl Default for YuzBirOkeyConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

fn default_yuz_bir_rules() -> Vec<RuleConfig> {
    vec![
        RuleConfig::new(
            "penalty",
            "Ceza",
            &[RuleType::PlayerPenaltyScore],
            "101",
        ),
        RuleConfig::new(
            "normalFinish",
            "Normal Bitiş",
            &[RuleType::FinishScore],
            "-101",
        )
        .with_paired_key("noOpenPenalty"),
        RuleConfig::new(
            "noOpenPenalty",
            "Açmama Cezası",
            &[RuleType::FinishScore],
            "202",
        )
        .with_paired_key("normalFinish"),
        RuleConfig::new(
            "handFinish",
            "Elden Bitiş",
            &[RuleType::FinishScore],
            "-202",
        )
        .with_paired_key("handNoOpenPenalty"),
        RuleConfig::new(
            "handNoOpenPenalty",
            "Elden Açmama Cezası",
            &[RuleType::FinishScore],
            "404",
        )
        .with_paired_key("handFinish"),
        RuleConfig::new(
            "handOkeyFinish",
            "Elden Okeyli Bitiş",
            &[RuleType::FinishScore],
            "-404",
        )
        .with_paired_key("handOkeyNoOpenPenalty"),
        RuleConfig::new(
            "handOkeyNoOpenPenalty",
            "Elden Okeyli Açmama Cezası",
            &[RuleType::FinishScore],
            "808",
        )
        .with_paired_key("handOkeyFinish"),
    ]
}

/// Config attached to a game. The wire format carries the bare inner object;
/// which variant to parse is decided by the sibling `gameType` discriminator,
/// so deserialization lives in the serializer, not here.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum GameConfig {
    Okey(OkeyConfig),
    YuzBir(YuzBirOkeyConfig),
}

impl GameConfig {
    pub fn is_partnered(&self) -> bool {
        match self {
            GameConfig::Okey(c) => c.is_partnered,
            GameConfig::YuzBir(c) => c.is_partnered,
        }
    }

    pub fn rules(&self) -> &[RuleConfig] {
        match self {
            GameConfig::Okey(c) => &c.rules,
            GameConfig::YuzBir(c) => &c.rules,
        }
    }
}
