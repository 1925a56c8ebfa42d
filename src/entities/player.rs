use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Race {
    #[default]
    Common,
    Human,
    HighElf,
    Aman,
    Castanic,
    Popori,
    Baraka,
    Elin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Common,
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayerClass {
    #[default]
    Common,
    Warrior,
    Lancer,
    Slayer,
    Berserker,
    Sorcerer,
    Archer,
    Priest,
    Mystic,
    Reaper,
    Gunner,
    Brawler,
    Ninja,
    Valkyrie,
}

/// Class identity tuple. Skill ids are only unique within one of these;
/// `Common` race/gender act as wildcards in catalog lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RaceGenderClass {
    pub race: Race,
    pub gender: Gender,
    pub class: PlayerClass,
}

impl RaceGenderClass {
    pub fn new(race: Race, gender: Gender, class: PlayerClass) -> Self {
        Self { race, gender, class }
    }

    pub fn of_class(class: PlayerClass) -> Self {
        Self {
            race: Race::Common,
            gender: Gender::Common,
            class,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub server_id: u32,
    pub player_id: u32,
    pub name: String,
    pub rgc: RaceGenderClass,
}

/// Roster of tracked players, keyed by (server id, player id). Populated
/// upstream from login/party messages; this core only reads it.
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    players: HashMap<(u32, u32), Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, player: Player) {
        self.players
            .insert((player.server_id, player.player_id), player);
    }

    pub fn get(&self, server_id: u32, player_id: u32) -> Option<&Player> {
        self.players.get(&(server_id, player_id))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
