use crate::combat::geometry::{Angle, Vec3f};
use crate::entities::player::RaceGenderClass;
use crate::net::messages::PlayerLocationMessage;
use std::collections::HashMap;
use std::fmt;

/// Timestamps and durations in 100 ns ticks.
pub type Ticks = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserIdentity {
    pub server_id: u32,
    pub player_id: u32,
    pub name: String,
    pub rgc: RaceGenderClass,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NpcInfo {
    pub name: String,
    /// Owning entity when this NPC is a summon or pet.
    pub owner: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    User(UserIdentity),
    Npc(NpcInfo),
    /// Synthetic stand-in for an id the registry has never seen.
    Placeholder,
}

/// Live-tracked world object. The motion fields describe the current motion
/// segment: the entity is somewhere on the line `position -> finish`, moving
/// at `speed` units/s since `start_time`. A pending heading change is carried
/// in `end_time`/`end_angle` until the deadline passes.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Vec3f,
    pub heading: Angle,
    pub finish: Vec3f,
    pub speed: f32,
    pub start_time: Ticks,
    pub end_time: Ticks,
    pub end_angle: Angle,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind) -> Self {
        Self {
            id,
            kind,
            position: Vec3f::zero(),
            heading: Angle::default(),
            finish: Vec3f::zero(),
            speed: 0.0,
            start_time: 0,
            end_time: 0,
            end_angle: Angle::default(),
        }
    }

    pub fn user_identity(&self) -> Option<&UserIdentity> {
        match &self.kind {
            EntityKind::User(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn npc_info(&self) -> Option<&NpcInfo> {
        match &self.kind {
            EntityKind::Npc(info) => Some(info),
            _ => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, EntityKind::Placeholder)
    }

    pub fn name(&self) -> String {
        match &self.kind {
            EntityKind::User(identity) => identity.name.clone(),
            EntityKind::Npc(info) => info.name.clone(),
            EntityKind::Placeholder => format!("Unknown {}", self.id),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.id)
    }
}

/// The roles an acting entity can play for attribution. A player yields only
/// `owning_user`; a pet yields both its owner and its own NPC facade; a wild
/// NPC or environmental source yields neither.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActorRoles {
    pub owning_user: Option<UserIdentity>,
    pub npc_facade: Option<NpcInfo>,
}

/// All entities seen this session. Lookups for event construction never fail:
/// unknown ids get a clearly-marked placeholder so a malformed message still
/// yields a best-effort event.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: HashMap<EntityId, Entity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity: Entity) {
        self.entities.insert(entity.id, entity);
    }

    pub fn track_user(&mut self, id: EntityId, identity: UserIdentity) {
        self.insert(Entity::new(id, EntityKind::User(identity)));
    }

    pub fn track_npc(&mut self, id: EntityId, info: NpcInfo) {
        self.insert(Entity::new(id, EntityKind::Npc(info)));
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_or_placeholder(&mut self, id: EntityId) -> &mut Entity {
        self.entities
            .entry(id)
            .or_insert_with(|| Entity::new(id, EntityKind::Placeholder))
    }

    /// Decompose an actor into its attribution roles. Requires the registry
    /// because a pet's owner is stored by id.
    pub fn roles(&self, entity: &Entity) -> ActorRoles {
        match &entity.kind {
            EntityKind::User(identity) => ActorRoles {
                owning_user: Some(identity.clone()),
                npc_facade: None,
            },
            EntityKind::Npc(info) => {
                let owner = info
                    .owner
                    .and_then(|owner_id| self.get(owner_id))
                    .and_then(|owner| owner.user_identity());
                match owner {
                    Some(identity) => ActorRoles {
                        owning_user: Some(identity.clone()),
                        npc_facade: Some(info.clone()),
                    },
                    None => ActorRoles::default(),
                }
            }
            EntityKind::Placeholder => ActorRoles::default(),
        }
    }

    /// Reset an entity's motion segment from a location message.
    pub fn apply_location(&mut self, id: EntityId, msg: &PlayerLocationMessage, time: Ticks) {
        let entity = self.get_or_placeholder(id);
        entity.position = msg.start;
        entity.heading = msg.heading;
        entity.finish = msg.finish;
        entity.speed = f32::from(msg.speed);
        entity.start_time = time;
    }

    /// Record a pending heading change, applied once its deadline elapses.
    pub fn schedule_heading(&mut self, id: EntityId, end_angle: Angle, end_time: Ticks) {
        let entity = self.get_or_placeholder(id);
        entity.end_angle = end_angle;
        entity.end_time = end_time;
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
