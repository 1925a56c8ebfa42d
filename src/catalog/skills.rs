use crate::catalog::CatalogError;
use crate::entities::player::{Gender, PlayerClass, Race, RaceGenderClass};
use crate::entities::skill::{ChainState, Skill, UserSkill};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// One row of the player-skill data file.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillEntry {
    pub id: i32,
    #[serde(default)]
    pub race: Race,
    #[serde(default)]
    pub gender: Gender,
    pub class: PlayerClass,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub chained: Option<bool>,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub icon: Option<String>,
    /// Pet whose actions map to this entry, for owner-attributed pet skills.
    #[serde(default)]
    pub pet_name: Option<String>,
}

impl SkillEntry {
    fn matches(&self, rgc: &RaceGenderClass) -> bool {
        (self.race == Race::Common || self.race == rgc.race)
            && (self.gender == Gender::Common || self.gender == rgc.gender)
    }

    fn is_exact(&self, rgc: &RaceGenderClass) -> bool {
        self.race == rgc.race && self.gender == rgc.gender
    }

    fn to_user_skill(&self, rgc: RaceGenderClass) -> UserSkill {
        UserSkill {
            skill: Skill {
                id: self.id,
                name: self.name.clone(),
                short_name: self.short_name.clone(),
                chain: ChainState::from_flag(self.chained),
                detail: self.detail.clone(),
                icon: self.icon.clone(),
                periodic: false,
                pet: None,
            },
            rgc,
        }
    }
}

/// Player-class skill catalog. Rows are keyed by (class, id); race and
/// gender refine the match, with `Common` rows acting as wildcards.
#[derive(Debug, Default)]
pub struct SkillCatalog {
    by_key: HashMap<(PlayerClass, i32), Vec<SkillEntry>>,
    by_pet: HashMap<(String, PlayerClass), SkillEntry>,
}

impl SkillCatalog {
    pub fn from_entries(entries: Vec<SkillEntry>) -> Self {
        let mut catalog = Self::default();
        for entry in entries {
            if let Some(pet_name) = &entry.pet_name {
                catalog
                    .by_pet
                    .insert((pet_name.clone(), entry.class), entry.clone());
            }
            catalog
                .by_key
                .entry((entry.class, entry.id))
                .or_default()
                .push(entry);
        }
        catalog
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        Ok(Self::from_entries(super::read_yaml(path)?))
    }

    /// Resolve a skill id for a class identity. Exact race/gender rows win
    /// over `Common` wildcard rows; the returned skill is bound to the
    /// querying identity, not the row's.
    pub fn get(&self, rgc: &RaceGenderClass, id: i32) -> Option<UserSkill> {
        let candidates = self.by_key.get(&(rgc.class, id))?;
        candidates
            .iter()
            .find(|entry| entry.is_exact(rgc))
            .or_else(|| candidates.iter().find(|entry| entry.matches(rgc)))
            .map(|entry| entry.to_user_skill(*rgc))
    }

    /// Row registered for a pet name under the owner's class, if any. Used
    /// to borrow an icon for pet-attributed skills.
    pub fn get_by_pet_name(&self, pet_name: &str, rgc: &RaceGenderClass) -> Option<&SkillEntry> {
        self.by_pet.get(&(pet_name.to_string(), rgc.class))
    }

    pub fn len(&self) -> usize {
        self.by_key.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i32, class: PlayerClass, name: &str) -> SkillEntry {
        SkillEntry {
            id,
            race: Race::Common,
            gender: Gender::Common,
            class,
            name: name.to_string(),
            short_name: None,
            chained: None,
            detail: String::new(),
            icon: None,
            pet_name: None,
        }
    }

    #[test]
    fn wildcard_row_matches_any_race_and_gender() {
        let catalog = SkillCatalog::from_entries(vec![entry(
            1001,
            PlayerClass::Slayer,
            "Lethal Strike",
        )]);
        let rgc = RaceGenderClass::new(Race::Castanic, Gender::Female, PlayerClass::Slayer);
        let skill = catalog.get(&rgc, 1001).unwrap();
        assert_eq!(skill.name(), "Lethal Strike");
        assert_eq!(skill.rgc, rgc);
    }

    #[test]
    fn exact_row_wins_over_wildcard() {
        let mut wildcard = entry(2001, PlayerClass::Archer, "Arrow");
        wildcard.detail = "generic".to_string();
        let mut exact = entry(2001, PlayerClass::Archer, "Arrow Volley");
        exact.race = Race::Elin;
        exact.gender = Gender::Female;
        let catalog = SkillCatalog::from_entries(vec![wildcard, exact]);

        let elin = RaceGenderClass::new(Race::Elin, Gender::Female, PlayerClass::Archer);
        assert_eq!(catalog.get(&elin, 2001).unwrap().name(), "Arrow Volley");

        let aman = RaceGenderClass::new(Race::Aman, Gender::Male, PlayerClass::Archer);
        assert_eq!(catalog.get(&aman, 2001).unwrap().name(), "Arrow");
    }

    #[test]
    fn class_is_part_of_the_key() {
        let catalog = SkillCatalog::from_entries(vec![entry(
            1001,
            PlayerClass::Slayer,
            "Lethal Strike",
        )]);
        let priest = RaceGenderClass::of_class(PlayerClass::Priest);
        assert!(catalog.get(&priest, 1001).is_none());
    }

    #[test]
    fn pet_rows_are_found_by_name_and_owner_class() {
        let mut row = entry(3001, PlayerClass::Mystic, "Thrall Slash");
        row.pet_name = Some("Thrall of Vengeance".to_string());
        row.icon = Some("icon_thrall".to_string());
        let catalog = SkillCatalog::from_entries(vec![row]);

        let mystic = RaceGenderClass::of_class(PlayerClass::Mystic);
        let found = catalog.get_by_pet_name("Thrall of Vengeance", &mystic).unwrap();
        assert_eq!(found.icon.as_deref(), Some("icon_thrall"));
        assert!(catalog
            .get_by_pet_name("Thrall of Vengeance", &RaceGenderClass::of_class(PlayerClass::Priest))
            .is_none());
    }
}
