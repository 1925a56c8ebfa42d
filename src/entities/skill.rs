use crate::entities::entity::NpcInfo;
use crate::entities::player::RaceGenderClass;
use std::hash::{Hash, Hasher};

/// Whether a skill is part of a chain. Catalog data often does not say either
/// way, so the unknown case is explicit rather than a missing boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainState {
    #[default]
    Unknown,
    Chained,
    NotChained,
}

impl ChainState {
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            None => ChainState::Unknown,
            Some(true) => ChainState::Chained,
            Some(false) => ChainState::NotChained,
        }
    }
}

/// Immutable description of one logical skill.
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: i32,
    pub name: String,
    pub short_name: Option<String>,
    pub chain: ChainState,
    pub detail: String,
    pub icon: Option<String>,
    /// Set for damage/heal-over-time effects resolved from the periodic
    /// catalog rather than a class skill list.
    pub periodic: bool,
    /// NPC the skill is attributed to when a pet acted on its owner's behalf.
    pub pet: Option<NpcInfo>,
}

impl Skill {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            short_name: None,
            chain: ChainState::Unknown,
            detail: String::new(),
            icon: None,
            periodic: false,
            pet: None,
        }
    }
}

/// A skill bound to the class identity it was resolved for. Class-specific
/// variants share numeric ids, so equality is (id, identity tuple) only.
#[derive(Debug, Clone)]
pub struct UserSkill {
    pub skill: Skill,
    pub rgc: RaceGenderClass,
}

impl UserSkill {
    pub fn new(id: i32, rgc: RaceGenderClass, name: impl Into<String>) -> Self {
        Self {
            skill: Skill::new(id, name),
            rgc,
        }
    }

    /// Placeholder used when an owning user exists but no catalog knows the id.
    pub fn unknown(id: i32, rgc: RaceGenderClass) -> Self {
        Self::new(id, rgc, "Unknown")
    }

    pub fn id(&self) -> i32 {
        self.skill.id
    }

    pub fn name(&self) -> &str {
        &self.skill.name
    }
}

impl PartialEq for UserSkill {
    fn eq(&self, other: &Self) -> bool {
        self.skill.id == other.skill.id && self.rgc == other.rgc
    }
}

impl Eq for UserSkill {}

impl Hash for UserSkill {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.skill.id.hash(state);
        self.rgc.hash(state);
    }
}
