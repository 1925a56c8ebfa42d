pub mod periodic;
pub mod pets;
pub mod skills;

use std::path::PathBuf;
use thiserror::Error;

pub use periodic::{PeriodicEffect, PeriodicEffectCatalog};
pub use pets::PetSkillCatalog;
pub use skills::{SkillCatalog, SkillEntry};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// All skill-identity sources for one session, loaded once at version start
/// and read-only during event construction.
#[derive(Debug, Default)]
pub struct Catalogs {
    pub skills: SkillCatalog,
    pub pet_skills: PetSkillCatalog,
    pub periodic: PeriodicEffectCatalog,
}

fn read_yaml<T: serde::de::DeserializeOwned>(
    path: &std::path::Path,
) -> Result<T, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
