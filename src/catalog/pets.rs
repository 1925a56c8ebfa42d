use crate::catalog::CatalogError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct PetSkillEntry {
    pub pet_name: String,
    pub skill_id: i32,
    pub detail: String,
}

/// Detail text for skills used by named pets, keyed by (pet name, skill id).
#[derive(Debug, Default)]
pub struct PetSkillCatalog {
    details: HashMap<(String, i32), String>,
}

impl PetSkillCatalog {
    pub fn from_entries(entries: Vec<PetSkillEntry>) -> Self {
        let mut catalog = Self::default();
        for entry in entries {
            catalog
                .details
                .insert((entry.pet_name, entry.skill_id), entry.detail);
        }
        catalog
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        Ok(Self::from_entries(super::read_yaml(path)?))
    }

    pub fn get(&self, pet_name: &str, skill_id: i32) -> Option<&str> {
        self.details
            .get(&(pet_name.to_string(), skill_id))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}
