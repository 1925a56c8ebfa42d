use crate::catalog::CatalogError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// One damage/heal-over-time effect definition.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodicEffect {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Default)]
pub struct PeriodicEffectCatalog {
    effects: HashMap<i32, PeriodicEffect>,
}

impl PeriodicEffectCatalog {
    pub fn from_entries(entries: Vec<PeriodicEffect>) -> Self {
        let mut catalog = Self::default();
        for entry in entries {
            catalog.effects.insert(entry.id, entry);
        }
        catalog
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        Ok(Self::from_entries(super::read_yaml(path)?))
    }

    pub fn get(&self, id: i32) -> Option<&PeriodicEffect> {
        self.effects.get(&id)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
