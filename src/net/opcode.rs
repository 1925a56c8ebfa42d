use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum OpCodeError {
    #[error("opcode map not found: tried {primary} and {fallback}")]
    NotFound { primary: PathBuf, fallback: PathBuf },
    #[error("opcode map {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("opcode map {path}, line {line}: {reason}")]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

/// Bidirectional mapping between numeric opcodes and message-type names.
/// The mapping is protocol-version dependent, so one table is built per
/// captured session rather than held globally.
#[derive(Debug, Clone, Default)]
pub struct OpCodeTable {
    names: HashMap<u16, String>,
    codes: HashMap<String, u16>,
}

impl OpCodeTable {
    /// Duplicate codes or names are last-write-wins.
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u16, String)>,
    {
        let mut table = Self::default();
        for (code, name) in pairs {
            table.names.insert(code, name.clone());
            table.codes.insert(name, code);
        }
        table
    }

    /// Known name, or the code as 4-digit uppercase hex. Never fails;
    /// unmapped codes are routine during protocol drift.
    pub fn name_of(&self, code: u16) -> String {
        match self.names.get(&code) {
            Some(name) => name.clone(),
            None => format!("{:04X}", code),
        }
    }

    /// Known code, or 0. A missing name is reported but must not fail the
    /// caller: decoders probe for message types newer than the map.
    pub fn code_of(&self, name: &str) -> u16 {
        match self.codes.get(name) {
            Some(&code) => code,
            None => {
                debug!(name, "opcode name not in map");
                0
            }
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Load a `NAME CODE` / `NAME = CODE` map file. If `path` does not exist
    /// the distribution's alternate naming convention is tried before giving
    /// up; a map that exists under neither name makes the whole decode
    /// pipeline unusable and aborts initialization.
    pub fn from_file(path: &Path) -> Result<Self, OpCodeError> {
        let chosen = if path.exists() {
            path.to_path_buf()
        } else {
            let fallback = fallback_path(path);
            if !fallback.exists() {
                return Err(OpCodeError::NotFound {
                    primary: path.to_path_buf(),
                    fallback,
                });
            }
            fallback
        };

        let contents = std::fs::read_to_string(&chosen).map_err(|source| OpCodeError::Io {
            path: chosen.clone(),
            source,
        })?;

        let mut pairs = Vec::new();
        for (index, raw_line) in contents.lines().enumerate() {
            let line = raw_line.replace('=', " ");
            let mut parts = line.split_whitespace();
            let (Some(name), Some(code)) = (parts.next(), parts.next()) else {
                if line.trim().is_empty() {
                    continue;
                }
                return Err(OpCodeError::Parse {
                    path: chosen,
                    line: index + 1,
                    reason: format!("expected 'NAME CODE', got '{}'", raw_line.trim()),
                });
            };
            let code: u16 = code.parse().map_err(|_| OpCodeError::Parse {
                path: chosen.clone(),
                line: index + 1,
                reason: format!("bad opcode '{}'", code),
            })?;
            pairs.push((code, name.to_string()));
        }
        Ok(Self::new(pairs))
    }
}

/// Alternate file-naming convention: system-message maps move from
/// `smt_<ver>.txt` to `sysmsg.<ver>.map`, everything else from `<ver>.txt`
/// to `protocol.<ver>.map` in the same directory.
fn fallback_path(path: &Path) -> PathBuf {
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let renamed = if file.contains("smt_") {
        file.replace("smt_", "sysmsg.").replace(".txt", ".map")
    } else {
        format!("protocol.{}", file.replace(".txt", ".map"))
    };
    dir.join(renamed)
}
