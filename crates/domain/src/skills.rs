//! Skills (pericias): the starter set and rating calculation.

use crate::entities::{ActorData, ActorRecord, ItemData, ItemRecord, SkillData};
use crate::value_objects::{Abilities, Ability};

/// A basic skill every new character starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarterSkill {
    pub name: &'static str,
    pub base_value: i32,
    pub ability: Option<Ability>,
    pub description: &'static str,
}

pub const STARTER_SKILLS: [StarterSkill; 7] = [
    StarterSkill {
        name: "Alerta",
        base_value: 2,
        ability: Some(Ability::Wis),
        description: "Permite detectar emboscadas y ataques por sorpresa antes de que sea demasiado tarde.",
    },
    StarterSkill {
        name: "Arquitectura",
        base_value: 1,
        ability: None,
        description: "Permite recibir datos sobre construcciones, detectar bajadas imperceptibles, muros de material distinto, etc.",
    },
    StarterSkill {
        name: "Escalada",
        base_value: 1,
        ability: Some(Ability::Con),
        description: "Permite trepar por superficies difíciles o mantenerse agarrado en momentos complicados.",
    },
    StarterSkill {
        name: "Detectar",
        base_value: 1,
        ability: None,
        description: "Permite encontrar elementos relevantes que pueden haberse pasado por alto.",
    },
    StarterSkill {
        name: "Forzar Puertas",
        base_value: 1,
        ability: Some(Ability::Str),
        description: "Permite desatascar puertas o incluso echarlas abajo.",
    },
    StarterSkill {
        name: "Idiomas",
        base_value: 0,
        ability: Some(Ability::Int),
        description: "Indica la capacidad del personaje para comprender idiomas relacionados con el suyo y aprenderlos en general. Un especialista puede leer y comprender cualquier texto escrito con una tirada con éxito de esta pericia, a partir del nivel 4.",
    },
    StarterSkill {
        name: "Sigilo",
        base_value: 2,
        ability: Some(Ability::Dex),
        description: "Permite pillar a enemigos por sorpresa, esconderse, pasar frente a un monstruo dormido y, en general, mantener tu presencia oculta a los demás.",
    },
];

impl StarterSkill {
    pub fn to_item(&self) -> ItemRecord {
        ItemRecord::new(
            self.name,
            ItemData::Pericia(SkillData {
                description: self.description.to_string(),
                advanced: false,
                base_value: self.base_value,
                ability: self.ability,
                rating: 0,
                rating_calculated: false,
            }),
        )
    }
}

/// Fresh item records for the starter skills, in sheet order.
pub fn starter_skills() -> Vec<ItemRecord> {
    STARTER_SKILLS.iter().map(StarterSkill::to_item).collect()
}

/// Base value plus the governing ability's bonus, never below zero.
pub fn skill_rating(skill: &SkillData, abilities: &Abilities) -> i32 {
    let bonus = skill
        .ability
        .map(|ability| abilities.get(ability).bonus)
        .unwrap_or(0);
    skill.base_value.saturating_add(bonus).max(0)
}

/// Rate every skill on a character and mark its skills as calculated.
///
/// Uses the ability bonuses currently on the record, so run the derivation
/// pipeline first. Returns the number of skills rated; non-characters are
/// left alone.
pub fn calculate_skill_ratings(actor: &mut ActorRecord) -> usize {
    let ActorData::Character(character) = &mut actor.data else {
        return 0;
    };
    let mut rated = 0;
    for item in &mut actor.items {
        if let ItemData::Pericia(skill) = &mut item.data {
            skill.rating = skill_rating(skill, &character.abilities);
            rated += 1;
        }
    }
    character.skills_calculated = true;
    rated
}

/// Rate advanced skills that have not been rated yet, once each.
pub fn calculate_pending_advanced_ratings(actor: &mut ActorRecord) -> usize {
    let ActorData::Character(character) = &actor.data else {
        return 0;
    };
    let mut rated = 0;
    for item in &mut actor.items {
        if let ItemData::Pericia(skill) = &mut item.data {
            if skill.advanced && !skill.rating_calculated {
                skill.rating = skill_rating(skill, &character.abilities);
                skill.rating_calculated = true;
                rated += 1;
            }
        }
    }
    rated
}
