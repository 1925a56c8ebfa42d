use crate::catalog::Catalogs;
use crate::combat::direction::{self, HitDirection};
use crate::combat::motion;
use crate::combat::resolve;
use crate::entities::entity::{Entity, EntityId, EntityRegistry, Ticks};
use crate::entities::player::{Player, PlayerClass, PlayerRegistry};
use crate::entities::skill::{ChainState, UserSkill};
use crate::net::messages::SkillResultMessage;
use std::fmt;

/// The two things a combat event can be reconstructed from.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEventSource {
    /// A decoded skill-impact message.
    DirectImpact(SkillResultMessage),
    /// One tick of a periodic effect; amounts and kind arrive pre-extracted.
    PeriodicTick {
        time: Ticks,
        amount: i32,
        is_critical: bool,
        is_hp: bool,
        is_heal: bool,
        effect_id: i32,
        source: EntityId,
        target: EntityId,
    },
}

/// One reconstructed damage/heal/mana event, immutable once built.
///
/// Building an event advances the referenced entities' motion state to the
/// event timestamp; that registry write is the only side effect and is done
/// here, before resolution, so the hit direction uses the extrapolated
/// geometry.
#[derive(Debug, Clone)]
pub struct CombatEvent {
    pub time: Ticks,
    pub amount: i32,
    pub is_critical: bool,
    pub is_hp: bool,
    pub is_heal: bool,
    pub skill_id: i32,
    /// Periodic tick rather than a direct skill impact.
    pub abnormality: bool,
    /// `None` only when the source has no owning user to attribute to.
    pub skill: Option<UserSkill>,
    pub source: Entity,
    pub target: Entity,
    pub source_player: Option<Player>,
    pub target_player: Option<Player>,
    pub hit_direction: HitDirection,
}

impl CombatEvent {
    pub fn build(
        source: CombatEventSource,
        entities: &mut EntityRegistry,
        players: &PlayerRegistry,
        catalogs: &Catalogs,
    ) -> CombatEvent {
        match source {
            CombatEventSource::DirectImpact(msg) => {
                Self::from_impact(&msg, entities, players, catalogs)
            }
            CombatEventSource::PeriodicTick {
                time,
                amount,
                is_critical,
                is_hp,
                is_heal,
                effect_id,
                source,
                target,
            } => Self::from_periodic(
                time, amount, is_critical, is_hp, is_heal, effect_id, source, target, entities,
                players, catalogs,
            ),
        }
    }

    fn from_impact(
        msg: &SkillResultMessage,
        entities: &mut EntityRegistry,
        players: &PlayerRegistry,
        catalogs: &Catalogs,
    ) -> CombatEvent {
        let source = {
            let entity = entities.get_or_placeholder(msg.source);
            motion::advance(entity, msg.time);
            entity.clone()
        };
        let target = {
            let entity = entities.get_or_placeholder(msg.target);
            motion::advance(entity, msg.time);
            entity.clone()
        };

        // Damage dealt by owned entities is attributed to the owner; damage
        // received by owned entities is not.
        let roles = entities.roles(&source);
        let skill = resolve::resolve_skill(&roles, msg.skill_id, catalogs);
        let source_player = roles
            .owning_user
            .as_ref()
            .and_then(|user| players.get(user.server_id, user.player_id))
            .cloned();
        let target_player = target
            .user_identity()
            .and_then(|user| players.get(user.server_id, user.player_id))
            .cloned();
        let hit_direction = direction::classify(source.position, target.position, target.heading);

        CombatEvent {
            time: msg.time,
            amount: msg.amount,
            is_critical: msg.is_critical,
            is_hp: msg.is_hp,
            is_heal: msg.is_heal,
            skill_id: msg.skill_id,
            abnormality: false,
            skill,
            source,
            target,
            source_player,
            target_player,
            hit_direction,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn from_periodic(
        time: Ticks,
        amount: i32,
        is_critical: bool,
        is_hp: bool,
        is_heal: bool,
        effect_id: i32,
        source_id: EntityId,
        target_id: EntityId,
        entities: &mut EntityRegistry,
        players: &PlayerRegistry,
        catalogs: &Catalogs,
    ) -> CombatEvent {
        let source = entities.get_or_placeholder(source_id).clone();
        let target = entities.get_or_placeholder(target_id).clone();

        let roles = entities.roles(&source);
        let source_player = roles
            .owning_user
            .as_ref()
            .and_then(|user| players.get(user.server_id, user.player_id))
            .cloned();
        let source_class = source_player
            .as_ref()
            .map(|player| player.rgc.class)
            .unwrap_or(PlayerClass::Common);
        let skill = Some(resolve::resolve_periodic(effect_id, source_class, catalogs));
        let target_player = target
            .user_identity()
            .and_then(|user| players.get(user.server_id, user.player_id))
            .cloned();

        CombatEvent {
            time,
            amount,
            is_critical,
            is_hp,
            is_heal,
            skill_id: effect_id,
            abnormality: true,
            skill,
            source,
            target,
            source_player,
            target_player,
            hit_direction: HitDirection::Dot,
        }
    }

    pub fn damage(&self) -> i32 {
        if self.is_heal || !self.is_hp {
            0
        } else {
            self.amount
        }
    }

    pub fn heal(&self) -> i32 {
        if self.is_hp && self.is_heal {
            self.amount
        } else {
            0
        }
    }

    pub fn mana(&self) -> i32 {
        if self.is_hp {
            0
        } else {
            self.amount
        }
    }

    pub fn is_chained(&self) -> ChainState {
        self.skill
            .as_ref()
            .map(|skill| skill.skill.chain)
            .unwrap_or(ChainState::Unknown)
    }

    pub fn skill_name(&self) -> String {
        match &self.skill {
            Some(skill) => skill.name().to_string(),
            None => self.skill_id.to_string(),
        }
    }

    pub fn skill_short_name(&self) -> String {
        match &self.skill {
            Some(skill) => skill
                .skill
                .short_name
                .clone()
                .unwrap_or_else(|| skill.name().to_string()),
            None => self.skill_id.to_string(),
        }
    }

    /// Name annotated with chain status and parenthetical detail, e.g.
    /// `Lethal Strike [C] (Bite)`.
    pub fn skill_name_detailed(&self) -> String {
        let chain_tag = match self.is_chained() {
            ChainState::Chained => "[C]",
            _ => "",
        };
        let detail = self
            .skill
            .as_ref()
            .map(|skill| skill.skill.detail.as_str())
            .unwrap_or("");
        let detail = if detail.is_empty() {
            String::new()
        } else {
            format!("({})", detail)
        };
        format!("{} {} {}", self.skill_name(), chain_tag, detail)
            .replace("  ", " ")
            .trim()
            .to_string()
    }

    /// An event is worth recording if it is a periodic tick inside a known
    /// fight, or genuine positive damage. Self-inflicted damage (e.g.
    /// self-destruct abilities) is excluded from attribution statistics.
    pub fn is_valid(&self, first_attack: Option<Ticks>) -> bool {
        let positive_damage = !self.is_heal && self.amount > 0;
        (first_attack.is_some() || positive_damage)
            && !(self.source.id == self.target.id && positive_damage)
    }
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) [{}]", self.skill_name(), self.skill_id, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PeriodicEffect, PeriodicEffectCatalog, SkillCatalog, SkillEntry};
    use crate::combat::geometry::{Angle, Vec3f};
    use crate::entities::entity::UserIdentity;
    use crate::entities::player::{Gender, Race, RaceGenderClass};

    fn catalogs() -> Catalogs {
        Catalogs {
            skills: SkillCatalog::from_entries(vec![SkillEntry {
                id: 1001,
                race: Race::Common,
                gender: Gender::Common,
                class: PlayerClass::Slayer,
                name: "Lethal Strike".to_string(),
                short_name: Some("Lethal".to_string()),
                chained: Some(true),
                detail: "3rd hit".to_string(),
                icon: None,
                pet_name: None,
            }]),
            pet_skills: Default::default(),
            periodic: PeriodicEffectCatalog::from_entries(vec![PeriodicEffect {
                id: 5,
                name: "Poison".to_string(),
                icon: None,
            }]),
        }
    }

    fn slayer_identity() -> UserIdentity {
        UserIdentity {
            server_id: 1,
            player_id: 7,
            name: "Yurian".to_string(),
            rgc: RaceGenderClass::of_class(PlayerClass::Slayer),
        }
    }

    fn world() -> (EntityRegistry, PlayerRegistry) {
        let mut entities = EntityRegistry::new();
        entities.track_user(EntityId(1), slayer_identity());
        {
            let attacker = entities.get_or_placeholder(EntityId(1));
            attacker.position = Vec3f::new(10.0, 0.0, 0.0);
        }
        entities.track_npc(
            EntityId(2),
            crate::entities::entity::NpcInfo {
                name: "Basilisk".to_string(),
                owner: None,
            },
        );
        {
            let victim = entities.get_or_placeholder(EntityId(2));
            victim.heading = Angle::from_degrees(0.0); // facing +x, away from the attacker
        }

        let mut players = PlayerRegistry::new();
        players.insert(Player {
            server_id: 1,
            player_id: 7,
            name: "Yurian".to_string(),
            rgc: RaceGenderClass::of_class(PlayerClass::Slayer),
        });
        (entities, players)
    }

    fn impact(amount: i32, is_hp: bool, is_heal: bool) -> SkillResultMessage {
        SkillResultMessage {
            time: 1_000_000,
            source: EntityId(1),
            target: EntityId(2),
            amount,
            skill_id: 1001,
            is_critical: false,
            is_hp,
            is_heal,
        }
    }

    #[test]
    fn direct_impact_resolves_skill_players_and_direction() {
        let (mut entities, players) = world();
        let event = CombatEvent::build(
            CombatEventSource::DirectImpact(impact(4200, true, false)),
            &mut entities,
            &players,
            &catalogs(),
        );
        assert_eq!(event.skill_name(), "Lethal Strike");
        assert_eq!(event.skill_short_name(), "Lethal");
        assert_eq!(event.source_player.as_ref().unwrap().name, "Yurian");
        assert!(event.target_player.is_none());
        // Attacker sits on the victim's +x axis, which the victim faces.
        assert_eq!(event.hit_direction, HitDirection::Front);
        assert!(!event.abnormality);
        assert_eq!(event.damage(), 4200);
    }

    #[test]
    fn amounts_are_mutually_exclusive() {
        let (mut entities, players) = world();
        let catalogs = catalogs();
        for (is_hp, is_heal) in [(true, false), (true, true), (false, false), (false, true)] {
            let event = CombatEvent::build(
                CombatEventSource::DirectImpact(impact(500, is_hp, is_heal)),
                &mut entities,
                &players,
                &catalogs,
            );
            let nonzero = [event.damage(), event.heal(), event.mana()]
                .iter()
                .filter(|&&amount| amount != 0)
                .count();
            assert_eq!(nonzero, 1, "is_hp={is_hp} is_heal={is_heal}");
        }
    }

    #[test]
    fn unknown_source_gets_placeholder_entity_and_unknown_skill() {
        let mut entities = EntityRegistry::new();
        let mut players = PlayerRegistry::new();
        players.insert(Player {
            server_id: 1,
            player_id: 7,
            name: "Yurian".to_string(),
            rgc: RaceGenderClass::of_class(PlayerClass::Slayer),
        });
        entities.track_user(EntityId(1), slayer_identity());

        let msg = SkillResultMessage {
            time: 0,
            source: EntityId(0xDEAD_BEEF),
            target: EntityId(1),
            amount: 100,
            skill_id: 1001,
            is_critical: false,
            is_hp: true,
            is_heal: false,
        };
        let event = CombatEvent::build(
            CombatEventSource::DirectImpact(msg),
            &mut entities,
            &players,
            &catalogs(),
        );
        assert!(event.source.is_placeholder());
        // Unattributed source: the numeric id stands in for the skill name.
        assert_eq!(event.skill_name(), "1001");
        assert!(event.skill.is_none());
        assert_eq!(event.target_player.as_ref().unwrap().name, "Yurian");
    }

    #[test]
    fn unknown_skill_id_from_a_player_resolves_to_unknown() {
        let (mut entities, players) = world();
        let mut msg = impact(100, true, false);
        msg.skill_id = 9999;
        let event = CombatEvent::build(
            CombatEventSource::DirectImpact(msg),
            &mut entities,
            &players,
            &catalogs(),
        );
        assert_eq!(event.skill_name(), "Unknown");
    }

    #[test]
    fn periodic_tick_is_dot_and_abnormality() {
        let (mut entities, players) = world();
        let event = CombatEvent::build(
            CombatEventSource::PeriodicTick {
                time: 50,
                amount: 120,
                is_critical: false,
                is_hp: true,
                is_heal: false,
                effect_id: 5,
                source: EntityId(2), // non-player source
                target: EntityId(1),
            },
            &mut entities,
            &players,
            &catalogs(),
        );
        assert_eq!(event.hit_direction, HitDirection::Dot);
        assert!(event.abnormality);
        assert_eq!(event.skill_name(), "Poison");
        let skill = event.skill.as_ref().unwrap();
        assert!(skill.skill.periodic);
        assert_eq!(skill.rgc.class, PlayerClass::Common);
    }

    #[test]
    fn self_inflicted_damage_is_invalid() {
        let (mut entities, players) = world();
        let mut msg = impact(1000, true, false);
        msg.target = msg.source;
        let event = CombatEvent::build(
            CombatEventSource::DirectImpact(msg),
            &mut entities,
            &players,
            &catalogs(),
        );
        assert!(!event.is_valid(None));
        assert!(!event.is_valid(Some(0)));
    }

    #[test]
    fn heals_are_valid_only_inside_a_known_fight() {
        let (mut entities, players) = world();
        let event = CombatEvent::build(
            CombatEventSource::DirectImpact(impact(800, true, true)),
            &mut entities,
            &players,
            &catalogs(),
        );
        assert!(!event.is_valid(None));
        assert!(event.is_valid(Some(0)));
    }

    #[test]
    fn building_advances_motion_to_the_event_time() {
        let (mut entities, players) = world();
        {
            let attacker = entities.get_or_placeholder(EntityId(1));
            attacker.position = Vec3f::zero();
            attacker.finish = Vec3f::new(100.0, 0.0, 0.0);
            attacker.speed = 10.0;
            attacker.start_time = 0;
        }
        let mut msg = impact(1, true, false);
        msg.time = 2 * crate::combat::motion::TICKS_PER_SECOND;
        let event = CombatEvent::build(
            CombatEventSource::DirectImpact(msg),
            &mut entities,
            &players,
            &catalogs(),
        );
        assert!((event.source.position.x - 20.0).abs() < 0.001);
        // The advance is written back to the registry, not just the snapshot.
        assert!((entities.get(EntityId(1)).unwrap().position.x - 20.0).abs() < 0.001);
    }

    #[test]
    fn detailed_name_formats_chain_and_detail() {
        let (mut entities, players) = world();
        let event = CombatEvent::build(
            CombatEventSource::DirectImpact(impact(100, true, false)),
            &mut entities,
            &players,
            &catalogs(),
        );
        assert_eq!(event.skill_name_detailed(), "Lethal Strike [C] (3rd hit)");
        assert_eq!(event.to_string(), "Lethal Strike(1001) [100]");
    }
}
