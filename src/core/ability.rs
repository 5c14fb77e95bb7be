//! Ability variant model.
//!
//! Every ability in the object data belongs to one structural variant,
//! distinguished by which per-level data fields it carries. The variant
//! decides what the ability instantiates: a summon brings a unit type into
//! play, a morph swaps the caster's unit type, a ward places a ward unit,
//! and so on. The edge model in `core::edges` dispatches on this enum with
//! an exhaustive match, so adding a variant here forces the compiler to
//! surface every place that must handle it.

use crate::core::catalog::ObjectId;

/// Per-level optional object references.
///
/// Index 0 is level 1. A `None` entry (or an index past the end) means the
/// field is unset at that level and contributes no edge.
pub type LevelValues = Vec<Option<ObjectId>>;

/// Per-level morph targets split by movement domain.
///
/// Polymorph-style abilities pick the target unit type by the victim's
/// movement domain, so all four lists are possible unlocks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MorphDomains {
    pub air: LevelValues,
    pub amphibious: LevelValues,
    pub ground: LevelValues,
    pub water: LevelValues,
}

/// The closed set of ability variants the edge model understands.
///
/// Variants sharing a payload shape use the same field names so the edge
/// model can group them with or-patterns. Kind strings not listed here are
/// loaded as `Generic`, which has no unit-type children beyond skins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbilityKind {
    // Summons: instantiate `summoned` at the cast level.
    WaterElemental { summoned: LevelValues },
    SeaElemental { summoned: LevelValues },
    LavaSpawn { summoned: LevelValues },
    SummonBear { summoned: LevelValues },
    SummonQuilbeast { summoned: LevelValues },
    SummonWarEagle { summoned: LevelValues },
    FeralSpirit { summoned: LevelValues },
    Inferno { summoned: LevelValues },
    PocketFactory { summoned: LevelValues },
    SpawnTentacle { summoned: LevelValues },
    LocustSwarm { summoned: LevelValues },
    CarrionScarabs { summoned: LevelValues },
    SpiritOfVengeance { summoned: LevelValues },

    // Wards: place the `ward` unit on the ground.
    SerpentWard { ward: LevelValues },
    HealingWard { ward: LevelValues },
    SentryWard { ward: LevelValues },
    StasisTrap { ward: LevelValues },
    // Plague wards additionally spawn a second unit type on expiry.
    PlagueWard { ward: LevelValues, spawned: LevelValues },

    // Morphs: target unit type per movement domain.
    Polymorph { domains: MorphDomains },
    Hex { domains: MorphDomains },

    // Alternate forms: the unit the caster turns into.
    Burrow { alternate_form: LevelValues },
    StoneForm { alternate_form: LevelValues },
    AvengerForm { alternate_form: LevelValues },
    CallToArms { alternate_form: LevelValues },
    BackToWork { alternate_form: LevelValues },
    EtherealForm { alternate_form: LevelValues },
    CorporealForm { alternate_form: LevelValues },
    BearForm { alternate_form: LevelValues },
    CrowForm { alternate_form: LevelValues },
    Metamorphosis { alternate_form: LevelValues },
    RoboGoblin { alternate_form: LevelValues },

    // Corpse family: units raised from or left behind as corpses.
    RaiseDead { first: LevelValues, second: LevelValues },
    Exhume { corpse: LevelValues },
    Graveyard { corpse: LevelValues },

    /// Any ability without unit-type data. Unknown kinds degrade to this,
    /// so new object-data variants never break the traversal.
    Generic,
}

impl AbilityKind {
    /// Short variant family name for diagnostics.
    pub fn family(&self) -> &'static str {
        match self {
            AbilityKind::WaterElemental { .. }
            | AbilityKind::SeaElemental { .. }
            | AbilityKind::LavaSpawn { .. }
            | AbilityKind::SummonBear { .. }
            | AbilityKind::SummonQuilbeast { .. }
            | AbilityKind::SummonWarEagle { .. }
            | AbilityKind::FeralSpirit { .. }
            | AbilityKind::Inferno { .. }
            | AbilityKind::PocketFactory { .. }
            | AbilityKind::SpawnTentacle { .. }
            | AbilityKind::LocustSwarm { .. }
            | AbilityKind::CarrionScarabs { .. }
            | AbilityKind::SpiritOfVengeance { .. } => "summon",
            AbilityKind::SerpentWard { .. }
            | AbilityKind::HealingWard { .. }
            | AbilityKind::SentryWard { .. }
            | AbilityKind::StasisTrap { .. }
            | AbilityKind::PlagueWard { .. } => "ward",
            AbilityKind::Polymorph { .. } | AbilityKind::Hex { .. } => "morph",
            AbilityKind::Burrow { .. }
            | AbilityKind::StoneForm { .. }
            | AbilityKind::AvengerForm { .. }
            | AbilityKind::CallToArms { .. }
            | AbilityKind::BackToWork { .. }
            | AbilityKind::EtherealForm { .. }
            | AbilityKind::CorporealForm { .. }
            | AbilityKind::BearForm { .. }
            | AbilityKind::CrowForm { .. }
            | AbilityKind::Metamorphosis { .. }
            | AbilityKind::RoboGoblin { .. } => "alternate-form",
            AbilityKind::RaiseDead { .. }
            | AbilityKind::Exhume { .. }
            | AbilityKind::Graveyard { .. } => "corpse",
            AbilityKind::Generic => "generic",
        }
    }
}
