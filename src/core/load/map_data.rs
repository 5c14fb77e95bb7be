//! Map data loading.
//!
//! Reads the JSON form of a map's object data (the same shape the map
//! build pipeline round-trips W3X data through) into the typed catalog.
//! Ids are fourcc strings in the file; entries with malformed ids are
//! collected as warnings and skipped rather than aborting the load.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::ability::{AbilityKind, LevelValues, MorphDomains};
use crate::core::catalog::{Ability, Catalog, ObjectId, Unit, Upgrade};

/// A non-fatal problem found while loading map data.
#[derive(Debug, Clone)]
pub struct LoadWarning {
    pub file_path: String,
    pub message: String,
}

/// Everything the analysis needs from the map data file.
#[derive(Debug)]
pub struct LoadedMapData {
    pub catalog: Catalog,
    /// Type ids of units physically placed on the map.
    pub placed_unit_types: Vec<ObjectId>,
    pub warnings: Vec<LoadWarning>,
}

// ============================================================
// DTOs
// ============================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapDataFile {
    #[serde(default)]
    placed_units: Vec<PlacedUnitDto>,
    object_data: ObjectDataDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlacedUnitDto {
    type_id: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ObjectDataDto {
    #[serde(default)]
    units: Vec<UnitDto>,
    #[serde(default)]
    upgrades: Vec<UpgradeDto>,
    #[serde(default)]
    abilities: Vec<AbilityDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnitDto {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    editor_suffix: Option<String>,
    #[serde(default)]
    trained: Vec<String>,
    /// `None` means the field was never modified in the editor.
    #[serde(default)]
    structures_built: Option<Vec<String>>,
    #[serde(default)]
    upgrades_to: Vec<String>,
    #[serde(default)]
    researches: Vec<String>,
    #[serde(default)]
    units_sold: Option<Vec<String>>,
    #[serde(default)]
    unit_abilities: Vec<String>,
    #[serde(default)]
    hero_abilities: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpgradeDto {
    id: String,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AbilityDto {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default = "default_levels")]
    levels: u32,
    /// Structural variant name, e.g. "water-elemental". Unknown names
    /// degrade to the generic variant.
    #[serde(default)]
    kind: String,
    #[serde(default)]
    skins: Vec<String>,
    #[serde(default)]
    summoned: Vec<Option<String>>,
    #[serde(default)]
    ward: Vec<Option<String>>,
    #[serde(default)]
    spawned: Vec<Option<String>>,
    #[serde(default)]
    alternate_form: Vec<Option<String>>,
    #[serde(default)]
    first: Vec<Option<String>>,
    #[serde(default)]
    second: Vec<Option<String>>,
    #[serde(default)]
    corpse: Vec<Option<String>>,
    #[serde(default)]
    air: Vec<Option<String>>,
    #[serde(default)]
    amphibious: Vec<Option<String>>,
    #[serde(default)]
    ground: Vec<Option<String>>,
    #[serde(default)]
    water: Vec<Option<String>>,
}

fn default_levels() -> u32 {
    1
}

// ============================================================
// Loading
// ============================================================

/// Load and convert the map data file at `path`.
pub fn load_map_data(path: &Path) -> Result<LoadedMapData> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read map data file: {:?}", path))?;

    let file: MapDataFile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse map data file: {:?}", path))?;

    Ok(convert(file, &path.to_string_lossy()))
}

fn convert(file: MapDataFile, file_path: &str) -> LoadedMapData {
    let mut ids = IdParser::new(file_path);

    let units = file
        .object_data
        .units
        .into_iter()
        .filter_map(|dto| convert_unit(dto, &mut ids))
        .collect();
    let upgrades = file
        .object_data
        .upgrades
        .into_iter()
        .filter_map(|dto| {
            let id = ids.required(&dto.id, "upgrade")?;
            Some(Upgrade::new(id, dto.name))
        })
        .collect();
    let abilities = file
        .object_data
        .abilities
        .into_iter()
        .filter_map(|dto| convert_ability(dto, &mut ids))
        .collect();

    let placed_unit_types = file
        .placed_units
        .iter()
        .filter_map(|placed| ids.required(&placed.type_id, "placed unit"))
        .collect();

    LoadedMapData {
        catalog: Catalog::new(units, upgrades, abilities),
        placed_unit_types,
        warnings: ids.warnings,
    }
}

fn convert_unit(dto: UnitDto, ids: &mut IdParser) -> Option<Unit> {
    let id = ids.required(&dto.id, "unit")?;
    Some(Unit {
        id,
        name: dto.name,
        editor_suffix: dto.editor_suffix,
        trained: ids.list(&dto.trained),
        structures_built: dto.structures_built.as_deref().map(|l| ids.list(l)),
        upgrades_to: ids.list(&dto.upgrades_to),
        researches: ids.list(&dto.researches),
        units_sold: dto.units_sold.as_deref().map(|l| ids.list(l)),
        unit_abilities: ids.list(&dto.unit_abilities),
        hero_abilities: ids.list(&dto.hero_abilities),
    })
}

fn convert_ability(dto: AbilityDto, ids: &mut IdParser) -> Option<Ability> {
    let id = ids.required(&dto.id, "ability")?;
    let mut ability = Ability::new(id, dto.name.clone(), dto.levels, AbilityKind::Generic);
    ability.skins = ids.list(&dto.skins);
    ability.kind = ability_kind(&dto, ids);
    Some(ability)
}

/// Map the DTO's kind string onto the closed variant set.
///
/// Per-level arrays irrelevant to the named kind are ignored; a kind name
/// nobody recognizes yields `Generic` so new object-data variants never
/// break the load.
fn ability_kind(dto: &AbilityDto, ids: &mut IdParser) -> AbilityKind {
    let summoned = levels(&dto.summoned, ids);
    let ward = levels(&dto.ward, ids);
    let alternate_form = levels(&dto.alternate_form, ids);
    let corpse = levels(&dto.corpse, ids);
    let domains = MorphDomains {
        air: levels(&dto.air, ids),
        amphibious: levels(&dto.amphibious, ids),
        ground: levels(&dto.ground, ids),
        water: levels(&dto.water, ids),
    };

    match dto.kind.as_str() {
        "water-elemental" => AbilityKind::WaterElemental { summoned },
        "sea-elemental" => AbilityKind::SeaElemental { summoned },
        "lava-spawn" => AbilityKind::LavaSpawn { summoned },
        "summon-bear" => AbilityKind::SummonBear { summoned },
        "summon-quilbeast" => AbilityKind::SummonQuilbeast { summoned },
        "summon-war-eagle" => AbilityKind::SummonWarEagle { summoned },
        "feral-spirit" => AbilityKind::FeralSpirit { summoned },
        "inferno" => AbilityKind::Inferno { summoned },
        "pocket-factory" => AbilityKind::PocketFactory { summoned },
        "spawn-tentacle" => AbilityKind::SpawnTentacle { summoned },
        "locust-swarm" => AbilityKind::LocustSwarm { summoned },
        "carrion-scarabs" => AbilityKind::CarrionScarabs { summoned },
        "spirit-of-vengeance" => AbilityKind::SpiritOfVengeance { summoned },
        "serpent-ward" => AbilityKind::SerpentWard { ward },
        "healing-ward" => AbilityKind::HealingWard { ward },
        "sentry-ward" => AbilityKind::SentryWard { ward },
        "stasis-trap" => AbilityKind::StasisTrap { ward },
        "plague-ward" => AbilityKind::PlagueWard {
            ward,
            spawned: levels(&dto.spawned, ids),
        },
        "polymorph" => AbilityKind::Polymorph { domains },
        "hex" => AbilityKind::Hex { domains },
        "burrow" => AbilityKind::Burrow { alternate_form },
        "stone-form" => AbilityKind::StoneForm { alternate_form },
        "avenger-form" => AbilityKind::AvengerForm { alternate_form },
        "call-to-arms" => AbilityKind::CallToArms { alternate_form },
        "back-to-work" => AbilityKind::BackToWork { alternate_form },
        "ethereal-form" => AbilityKind::EtherealForm { alternate_form },
        "corporeal-form" => AbilityKind::CorporealForm { alternate_form },
        "bear-form" => AbilityKind::BearForm { alternate_form },
        "crow-form" => AbilityKind::CrowForm { alternate_form },
        "metamorphosis" => AbilityKind::Metamorphosis { alternate_form },
        "robo-goblin" => AbilityKind::RoboGoblin { alternate_form },
        "raise-dead" => AbilityKind::RaiseDead {
            first: levels(&dto.first, ids),
            second: levels(&dto.second, ids),
        },
        "exhume" => AbilityKind::Exhume { corpse },
        "graveyard" => AbilityKind::Graveyard { corpse },
        _ => AbilityKind::Generic,
    }
}

fn levels(values: &[Option<String>], ids: &mut IdParser) -> LevelValues {
    values
        .iter()
        .map(|value| value.as_deref().and_then(|code| ids.optional(code)))
        .collect()
}

/// Parses fourcc strings, accumulating warnings for malformed ones.
struct IdParser {
    file_path: String,
    warnings: Vec<LoadWarning>,
}

impl IdParser {
    fn new(file_path: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            warnings: Vec::new(),
        }
    }

    /// Id that names a definition; a bad one drops the whole entry.
    fn required(&mut self, code: &str, what: &str) -> Option<ObjectId> {
        let id = ObjectId::from_fourcc(code);
        if id.is_none() {
            self.warn(format!("Skipping {} with malformed id \"{}\"", what, code));
        }
        id
    }

    /// Id inside a reference list; a bad one drops only that reference.
    fn optional(&mut self, code: &str) -> Option<ObjectId> {
        let id = ObjectId::from_fourcc(code);
        if id.is_none() {
            self.warn(format!("Ignoring malformed object reference \"{}\"", code));
        }
        id
    }

    fn list(&mut self, codes: &[String]) -> Vec<ObjectId> {
        codes.iter().filter_map(|c| self.optional(c)).collect()
    }

    fn warn(&mut self, message: String) {
        self.warnings.push(LoadWarning {
            file_path: self.file_path.clone(),
            message,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::ContentObject;
    use pretty_assertions::assert_eq;

    fn id(code: &str) -> ObjectId {
        ObjectId::from_fourcc(code).unwrap()
    }

    fn load(json: &str) -> LoadedMapData {
        let file: MapDataFile = serde_json::from_str(json).unwrap();
        convert(file, "map.json")
    }

    #[test]
    fn test_load_minimal_map() {
        let data = load(
            r#"{
                "placedUnits": [{ "typeId": "hfoo" }],
                "objectData": {
                    "units": [{ "id": "hfoo", "name": "Footman" }],
                    "upgrades": [{ "id": "Rhme", "name": "Iron Forged Swords" }],
                    "abilities": []
                }
            }"#,
        );

        assert_eq!(data.placed_unit_types, vec![id("hfoo")]);
        assert_eq!(data.catalog.len(), 2);
        assert!(data.warnings.is_empty());
    }

    #[test]
    fn test_unit_techtree_fields() {
        let data = load(
            r#"{
                "objectData": {
                    "units": [{
                        "id": "hbar",
                        "name": "Barracks",
                        "trained": ["hfoo"],
                        "unitsSold": [],
                        "researches": ["Rhme"]
                    }]
                }
            }"#,
        );

        let unit = data.catalog.unit(id("hbar")).unwrap();
        assert_eq!(unit.trained, vec![id("hfoo")]);
        assert_eq!(unit.researches, vec![id("Rhme")]);
        // Present-but-empty differs from never modified
        assert_eq!(unit.units_sold, Some(vec![]));
        assert_eq!(unit.structures_built, None);
    }

    #[test]
    fn test_ability_kind_with_absent_levels() {
        let data = load(
            r#"{
                "objectData": {
                    "abilities": [{
                        "id": "AHwe",
                        "name": "Water Elemental",
                        "levels": 3,
                        "kind": "water-elemental",
                        "summoned": ["hwat", null, "hwt3"]
                    }]
                }
            }"#,
        );

        let ability = data.catalog.ability(id("AHwe")).unwrap();
        assert_eq!(
            ability.kind,
            AbilityKind::WaterElemental {
                summoned: vec![Some(id("hwat")), None, Some(id("hwt3"))]
            }
        );
    }

    #[test]
    fn test_unknown_ability_kind_degrades_to_generic() {
        let data = load(
            r#"{
                "objectData": {
                    "abilities": [{
                        "id": "Axyz",
                        "name": "Future Variant",
                        "kind": "chronoshift"
                    }]
                }
            }"#,
        );

        let ability = data.catalog.ability(id("Axyz")).unwrap();
        assert_eq!(ability.kind, AbilityKind::Generic);
        assert!(data.warnings.is_empty());
    }

    #[test]
    fn test_malformed_ids_warn_and_skip() {
        let data = load(
            r#"{
                "placedUnits": [{ "typeId": "toolong" }],
                "objectData": {
                    "units": [
                        { "id": "hfoo", "trained": ["bad"] },
                        { "id": "xy" }
                    ]
                }
            }"#,
        );

        // The malformed unit and the malformed reference are dropped
        assert_eq!(data.catalog.len(), 1);
        assert!(data.placed_unit_types.is_empty());
        assert!(data.catalog.unit(id("hfoo")).unwrap().trained.is_empty());
        assert_eq!(data.warnings.len(), 3);
    }

    #[test]
    fn test_morph_domains() {
        let data = load(
            r#"{
                "objectData": {
                    "abilities": [{
                        "id": "AHbn",
                        "kind": "polymorph",
                        "air": ["nshf"],
                        "ground": ["nshe"]
                    }]
                }
            }"#,
        );

        let Some(ContentObject::Ability(ability)) = data.catalog.resolve(id("AHbn")) else {
            panic!("expected ability");
        };
        let AbilityKind::Polymorph { domains } = &ability.kind else {
            panic!("expected polymorph");
        };
        assert_eq!(domains.air, vec![Some(id("nshf"))]);
        assert_eq!(domains.ground, vec![Some(id("nshe"))]);
        assert!(domains.water.is_empty());
    }
}
