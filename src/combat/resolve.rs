use crate::catalog::Catalogs;
use crate::entities::entity::ActorRoles;
use crate::entities::player::{PlayerClass, RaceGenderClass};
use crate::entities::skill::{Skill, UserSkill};
use tracing::{debug, warn};

/// Resolve the logical skill behind a raw skill id, attributed to the acting
/// player. Fallback order: player catalog, pet synthesis, "Unknown"
/// placeholder. `None` only when the actor has no owning user at all (a wild
/// NPC or environmental source); every attributed path yields a concrete
/// skill.
pub fn resolve_skill(roles: &ActorRoles, skill_id: i32, catalogs: &Catalogs) -> Option<UserSkill> {
    let user = roles.owning_user.as_ref()?;

    if let Some(skill) = catalogs.skills.get(&user.rgc, skill_id) {
        return Some(skill);
    }

    if let Some(npc) = roles.npc_facade.as_ref() {
        // A pet acted for its owner: name the skill after the pet, keep the
        // owner's class identity for grouping.
        let detail = catalogs
            .pet_skills
            .get(&npc.name, skill_id)
            .unwrap_or_default()
            .to_string();
        let icon = catalogs
            .skills
            .get_by_pet_name(&npc.name, &user.rgc)
            .and_then(|entry| entry.icon.clone());
        return Some(UserSkill {
            skill: Skill {
                icon,
                detail,
                pet: Some(npc.clone()),
                ..Skill::new(skill_id, npc.name.clone())
            },
            rgc: user.rgc,
        });
    }

    debug!(skill_id, class = ?user.rgc.class, "skill id not in catalog, using placeholder");
    Some(UserSkill::unknown(skill_id, user.rgc))
}

/// Resolve a periodic (DOT/HOT) effect id. The effect carries the source
/// player's class for grouping, or `Common` when the source is not a tracked
/// player. A missing catalog entry still yields a usable skill.
pub fn resolve_periodic(
    effect_id: i32,
    source_class: PlayerClass,
    catalogs: &Catalogs,
) -> UserSkill {
    let rgc = RaceGenderClass::of_class(source_class);
    let (name, icon) = match catalogs.periodic.get(effect_id) {
        Some(effect) => (effect.name.clone(), effect.icon.clone()),
        None => {
            warn!(effect_id, "periodic effect id not in catalog");
            ("Unknown".to_string(), None)
        }
    };
    UserSkill {
        skill: Skill {
            icon,
            detail: "DOT".to_string(),
            periodic: true,
            ..Skill::new(effect_id, name)
        },
        rgc,
    }
}
