use std::path::{Path, PathBuf};

/// Where to find the version-specific data files. The opcode map and the
/// skill catalogs live under one data root, one set per protocol version.
#[derive(Debug)]
pub struct AppConfig {
    pub root: PathBuf,
    pub protocol_version: u32,
}

impl AppConfig {
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        if args.len() < 2 {
            return Err("usage: tera-combat <data-root> [protocol-version]".to_string());
        }
        let root = Path::new(&args[1]).to_path_buf();
        let protocol_version = if args.len() > 2 {
            args[2]
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("invalid protocol version '{}'", args[2]))?
        } else {
            match std::env::var("TERA_PROTOCOL_VERSION") {
                Ok(value) => value
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| format!("invalid TERA_PROTOCOL_VERSION '{}'", value))?,
                Err(_) => return Err("protocol version not specified".to_string()),
            }
        };
        Ok(Self {
            root,
            protocol_version,
        })
    }

    /// Primary opcode map path; `OpCodeTable::from_file` applies the
    /// alternate naming convention if this one is absent.
    pub fn opcode_map_path(&self) -> PathBuf {
        self.root
            .join("opcodes")
            .join(format!("{}.txt", self.protocol_version))
    }

    /// System-message map path, same fallback behavior.
    pub fn sysmsg_map_path(&self) -> PathBuf {
        self.root
            .join("opcodes")
            .join(format!("smt_{}.txt", self.protocol_version))
    }

    pub fn skill_catalog_path(&self) -> PathBuf {
        self.root.join("catalogs").join("skills.yaml")
    }

    pub fn pet_skill_catalog_path(&self) -> PathBuf {
        self.root.join("catalogs").join("pet_skills.yaml")
    }

    pub fn periodic_catalog_path(&self) -> PathBuf {
        self.root.join("catalogs").join("periodic.yaml")
    }
}
