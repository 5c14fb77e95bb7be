//! Edge model: which objects an object directly unlocks.
//!
//! Pure functions from a content object to the ids it makes reachable.
//! The traversal in `core::sweep` never inspects object fields itself; all
//! per-kind knowledge lives here. Absent per-level data yields no edge,
//! never an error.

use crate::core::ability::{AbilityKind, LevelValues, MorphDomains};
use crate::core::catalog::{Ability, Catalog, ContentObject, ObjectId, Unit};

/// All objects directly unlocked by `id`.
///
/// Ids that resolve to nothing (dangling references) have no children.
pub fn children_of(catalog: &Catalog, id: ObjectId) -> Vec<ObjectId> {
    match catalog.resolve(id) {
        Some(ContentObject::Unit(unit)) => unit_children(unit),
        // Researching an upgrade unlocks nothing by itself; the unit that
        // researches it already models the edge.
        Some(ContentObject::Upgrade(_)) => Vec::new(),
        Some(ContentObject::Ability(ability)) => ability_children(ability),
        None => Vec::new(),
    }
}

/// Everything a unit exposes through its techtree and ability lists.
pub fn unit_children(unit: &Unit) -> Vec<ObjectId> {
    let mut children = Vec::new();
    children.extend_from_slice(&unit.trained);
    if let Some(built) = &unit.structures_built {
        children.extend_from_slice(built);
    }
    children.extend_from_slice(&unit.upgrades_to);
    children.extend_from_slice(&unit.researches);
    if let Some(sold) = &unit.units_sold {
        children.extend_from_slice(sold);
    }
    children.extend_from_slice(&unit.unit_abilities);
    children.extend_from_slice(&unit.hero_abilities);
    children
}

/// Unit types an ability instantiates, across every level it has.
///
/// The match is exhaustive on purpose: a new `AbilityKind` variant will not
/// compile until it gets a rule here.
pub fn ability_children(ability: &Ability) -> Vec<ObjectId> {
    let levels = ability.levels as usize;
    let mut children: Vec<ObjectId> = ability.skins.clone();

    match &ability.kind {
        AbilityKind::WaterElemental { summoned }
        | AbilityKind::SeaElemental { summoned }
        | AbilityKind::LavaSpawn { summoned }
        | AbilityKind::SummonBear { summoned }
        | AbilityKind::SummonQuilbeast { summoned }
        | AbilityKind::SummonWarEagle { summoned }
        | AbilityKind::FeralSpirit { summoned }
        | AbilityKind::Inferno { summoned }
        | AbilityKind::PocketFactory { summoned }
        | AbilityKind::SpawnTentacle { summoned }
        | AbilityKind::LocustSwarm { summoned }
        | AbilityKind::CarrionScarabs { summoned }
        | AbilityKind::SpiritOfVengeance { summoned } => {
            push_levels(&mut children, summoned, levels);
        }
        AbilityKind::SerpentWard { ward }
        | AbilityKind::HealingWard { ward }
        | AbilityKind::SentryWard { ward }
        | AbilityKind::StasisTrap { ward } => {
            push_levels(&mut children, ward, levels);
        }
        AbilityKind::PlagueWard { ward, spawned } => {
            push_levels(&mut children, ward, levels);
            push_levels(&mut children, spawned, levels);
        }
        AbilityKind::Polymorph { domains } | AbilityKind::Hex { domains } => {
            push_domains(&mut children, domains, levels);
        }
        AbilityKind::Burrow { alternate_form }
        | AbilityKind::StoneForm { alternate_form }
        | AbilityKind::AvengerForm { alternate_form }
        | AbilityKind::CallToArms { alternate_form }
        | AbilityKind::BackToWork { alternate_form }
        | AbilityKind::EtherealForm { alternate_form }
        | AbilityKind::CorporealForm { alternate_form }
        | AbilityKind::BearForm { alternate_form }
        | AbilityKind::CrowForm { alternate_form }
        | AbilityKind::Metamorphosis { alternate_form }
        | AbilityKind::RoboGoblin { alternate_form } => {
            push_levels(&mut children, alternate_form, levels);
        }
        AbilityKind::RaiseDead { first, second } => {
            push_levels(&mut children, first, levels);
            push_levels(&mut children, second, levels);
        }
        AbilityKind::Exhume { corpse } | AbilityKind::Graveyard { corpse } => {
            push_levels(&mut children, corpse, levels);
        }
        AbilityKind::Generic => {}
    }

    children
}

fn push_levels(out: &mut Vec<ObjectId>, values: &LevelValues, levels: usize) {
    for value in values.iter().take(levels) {
        if let Some(id) = value {
            out.push(*id);
        }
    }
}

fn push_domains(out: &mut Vec<ObjectId>, domains: &MorphDomains, levels: usize) {
    push_levels(out, &domains.air, levels);
    push_levels(out, &domains.amphibious, levels);
    push_levels(out, &domains.ground, levels);
    push_levels(out, &domains.water, levels);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Upgrade;
    use pretty_assertions::assert_eq;

    fn id(code: &str) -> ObjectId {
        ObjectId::from_fourcc(code).unwrap()
    }

    #[test]
    fn test_unit_children_all_fields() {
        let unit = Unit {
            id: id("hbar"),
            name: "Barracks".to_string(),
            editor_suffix: None,
            trained: vec![id("hfoo"), id("hrif")],
            structures_built: None,
            upgrades_to: vec![id("hbaU")],
            researches: vec![id("Rhde")],
            units_sold: Some(vec![id("hdhw")]),
            unit_abilities: vec![id("Abds")],
            hero_abilities: vec![],
        };

        assert_eq!(
            unit_children(&unit),
            vec![
                id("hfoo"),
                id("hrif"),
                id("hbaU"),
                id("Rhde"),
                id("hdhw"),
                id("Abds")
            ]
        );
    }

    #[test]
    fn test_unit_children_unset_optional_fields() {
        let unit = Unit::new(id("hfoo"), "Footman");
        assert!(unit_children(&unit).is_empty());
    }

    #[test]
    fn test_upgrade_is_terminal() {
        let catalog = Catalog::new(
            vec![],
            vec![Upgrade::new(id("Rhme"), "Iron Forged Swords")],
            vec![],
        );
        assert!(children_of(&catalog, id("Rhme")).is_empty());
    }

    #[test]
    fn test_dangling_id_has_no_children() {
        let catalog = Catalog::default();
        assert!(children_of(&catalog, id("xxxx")).is_empty());
    }

    #[test]
    fn test_summon_skips_absent_levels() {
        // Level 1 summons hwat, level 2 has no value set
        let ability = Ability::new(
            id("AHwe"),
            "Water Elemental",
            2,
            AbilityKind::WaterElemental {
                summoned: vec![Some(id("hwat")), None],
            },
        );

        assert_eq!(ability_children(&ability), vec![id("hwat")]);
    }

    #[test]
    fn test_summon_ignores_levels_past_count() {
        // Data has three entries but the ability only has one level
        let ability = Ability::new(
            id("AUin"),
            "Inferno",
            1,
            AbilityKind::Inferno {
                summoned: vec![Some(id("ninf")), Some(id("ninf")), Some(id("ninf"))],
            },
        );

        assert_eq!(ability_children(&ability), vec![id("ninf")]);
    }

    #[test]
    fn test_morph_collects_all_domains() {
        let ability = Ability::new(
            id("AHbn"),
            "Polymorph",
            1,
            AbilityKind::Polymorph {
                domains: MorphDomains {
                    air: vec![Some(id("nshf"))],
                    amphibious: vec![None],
                    ground: vec![Some(id("nshe"))],
                    water: vec![Some(id("nshw"))],
                },
            },
        );

        assert_eq!(
            ability_children(&ability),
            vec![id("nshf"), id("nshe"), id("nshw")]
        );
    }

    #[test]
    fn test_raise_dead_both_unit_types() {
        let ability = Ability::new(
            id("AUan"),
            "Raise Dead",
            1,
            AbilityKind::RaiseDead {
                first: vec![Some(id("uske"))],
                second: vec![Some(id("uskm"))],
            },
        );

        assert_eq!(ability_children(&ability), vec![id("uske"), id("uskm")]);
    }

    #[test]
    fn test_generic_exposes_only_skins() {
        let mut ability = Ability::new(id("Abds"), "Defend", 1, AbilityKind::Generic);
        assert!(ability_children(&ability).is_empty());

        ability.skins = vec![id("hfoA")];
        assert_eq!(ability_children(&ability), vec![id("hfoA")]);
    }

    #[test]
    fn test_carrion_scarabs_dispatches_like_its_sibling() {
        let scarabs = Ability::new(
            id("AUcb"),
            "Carrion Scarabs",
            3,
            AbilityKind::CarrionScarabs {
                summoned: vec![Some(id("ucrm")), Some(id("ucrm")), Some(id("ucrm"))],
            },
        );
        let locusts = Ability::new(
            id("AUls"),
            "Locust Swarm",
            3,
            AbilityKind::LocustSwarm {
                summoned: vec![Some(id("uloc")), Some(id("uloc")), Some(id("uloc"))],
            },
        );

        assert_eq!(ability_children(&scarabs).len(), 3);
        assert_eq!(ability_children(&locusts).len(), 3);
    }
}
