pub mod catalog;
pub mod combat;
pub mod config;
pub mod entities;
pub mod net;

pub use catalog::{CatalogError, Catalogs, PeriodicEffectCatalog, PetSkillCatalog, SkillCatalog};
pub use combat::direction::HitDirection;
pub use combat::event::{CombatEvent, CombatEventSource};
pub use combat::geometry::{Angle, Vec3f};
pub use config::AppConfig;
pub use entities::entity::{
    ActorRoles, Entity, EntityId, EntityKind, EntityRegistry, NpcInfo, Ticks, UserIdentity,
};
pub use entities::player::{Gender, Player, PlayerClass, PlayerRegistry, Race, RaceGenderClass};
pub use entities::skill::{ChainState, Skill, UserSkill};
pub use net::messages::{Message, MessageDirection, PlayerLocationMessage, SkillResultMessage};
pub use net::opcode::{OpCodeError, OpCodeTable};
pub use net::packet::{PacketReader, PacketWriter};
