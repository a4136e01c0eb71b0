use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Unique identifier for cards
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Encode,
    Decode,
    TypeInfo,
)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Encode, Decode, TypeInfo,
)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Legendary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
        }
    }

    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rarity| rarity.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// DECLARATIVE BEHAVIORS
// ==========================================
// Carried on cards as data only; the combat engine does not execute them.

/// When a behavior would fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    OnPlay,
    OnAttack,
    OnDefend,
    OnDeath,
    OnTurnStart,
    OnTurnEnd,
    OnDamageReceived,
    OnKill,
    OnSummon,
    OnFriendlyPlay,
    OnEnemyPlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(rename_all = "snake_case")]
pub enum ConditionType {
    CardType,
    Keyword,
    StatBelow,
    StatAbove,
    HealthBelow,
    RandomChance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(rename_all = "snake_case")]
pub enum EffectType {
    DealDamage,
    Heal,
    GrantImmunity,
    DrawCard,
    AddKeyword,
    RemoveKeyword,
    ModifyStats,
    Summon,
    ReturnToHand,
    Destroy,
    Transform,
    Copy,
    Steal,
    Redirect,
    Swap,
    Discount,
    BuffAdjacent,
    DebuffEnemy,
}

/// Free-form parameter attached to a condition or effect
///
/// Numbers are integers; fractional values are not representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Text(String),
    List(Vec<ParamValue>),
    Map(BTreeMap<String, ParamValue>),
}

pub type Params = BTreeMap<String, ParamValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
pub struct Condition {
    #[serde(rename = "type")]
    pub kind: ConditionType,
    #[serde(default)]
    pub params: Params,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
pub struct Trigger {
    #[serde(rename = "type")]
    pub kind: TriggerType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
pub struct Effect {
    #[serde(rename = "type")]
    pub kind: EffectType,
    #[serde(default)]
    pub params: Params,
}

/// A declarative card behavior: a trigger paired with an effect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(rename_all = "camelCase")]
pub struct Behavior {
    pub id: String,
    pub trigger: Trigger,
    pub effect: Effect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stackable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stacks: Option<u32>,
}

// ==========================================
// CARDS AND TEAMS
// ==========================================

/// A card definition. Only `attack` and `defense` take part in combat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub attack: i32,
    pub defense: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    pub types: Vec<String>,
    pub rarity: Rarity,
    pub keywords: Vec<String>,
    pub behaviors: Vec<Behavior>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub art: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,
}

impl Card {
    /// A bare common card with a single type, no keywords and no behaviors
    pub fn new(id: &str, name: &str, attack: i32, defense: i32) -> Self {
        Self {
            id: CardId::from(id),
            name: name.to_string(),
            description: None,
            attack,
            defense,
            image: None,
            source_file: None,
            types: vec!["unknown".to_string()],
            rarity: Rarity::Common,
            keywords: vec![],
            behaviors: vec![],
            art: None,
            set: None,
        }
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn with_behaviors(mut self, behaviors: Vec<Behavior>) -> Self {
        self.behaviors = behaviors;
        self
    }
}

/// Board slot that can hold a card or be empty
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Encode, Decode, TypeInfo)]
pub struct CardSlot {
    pub card: Option<Card>,
}

impl CardSlot {
    pub fn empty() -> Self {
        Self { card: None }
    }

    pub fn with_card(card: Card) -> Self {
        Self { card: Some(card) }
    }
}

/// An ordered row of slots. Lane lengths are free to differ.
pub type Lane = Vec<CardSlot>;

/// A team is an ordered list of lanes; the board shape is not fixed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Encode, Decode, TypeInfo)]
pub struct Team {
    pub lanes: Vec<Lane>,
}

impl Team {
    pub fn new(lanes: Vec<Lane>) -> Self {
        Self { lanes }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a team from lanes of optional cards
    pub fn from_cards(lanes: Vec<Vec<Option<Card>>>) -> Self {
        Self {
            lanes: lanes
                .into_iter()
                .map(|lane| lane.into_iter().map(|card| CardSlot { card }).collect())
                .collect(),
        }
    }

    /// Cards in lane-then-slot order, skipping empty slots
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.lanes
            .iter()
            .flat_map(|lane| lane.iter().filter_map(|slot| slot.card.as_ref()))
    }
}

/// Which side of the battle a unit fights for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Encode, Decode, TypeInfo,
)]
pub enum TeamSide {
    #[serde(rename = "teamA")]
    TeamA,
    #[serde(rename = "teamB")]
    TeamB,
}

impl TeamSide {
    pub fn opponent(self) -> Self {
        match self {
            TeamSide::TeamA => TeamSide::TeamB,
            TeamSide::TeamB => TeamSide::TeamA,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamSide::TeamA => "teamA",
            TeamSide::TeamB => "teamB",
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
