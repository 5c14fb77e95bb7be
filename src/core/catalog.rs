use std::{collections::HashMap, fmt};

use crate::core::ability::AbilityKind;
use crate::utils::{fourcc_to_id, id_to_fourcc};

/// Stable identity key of a content object.
///
/// Warcraft III identifies every object-data entry by four ASCII bytes
/// packed into a `u32` (the "fourcc"). Ids are unique within the map's
/// object data and stable across editor sessions, which is what makes them
/// usable as graph node keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// Parse a readable code like `hfoo` into an id.
    pub fn from_fourcc(code: &str) -> Option<Self> {
        fourcc_to_id(code).map(Self)
    }

    /// The readable four-character code for this id.
    pub fn fourcc(&self) -> String {
        id_to_fourcc(self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fourcc())
    }
}

/// The three disjoint content object families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ObjectKind {
    Unit,
    Upgrade,
    Ability,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectKind::Unit => write!(f, "unit"),
            ObjectKind::Upgrade => write!(f, "upgrade"),
            ObjectKind::Ability => write!(f, "ability"),
        }
    }
}

/// A unit definition and the techtree fields that unlock other objects.
///
/// Fields that the editor tracks as "modified or not" are `Option`: `None`
/// means the field was never set for this unit and contributes no edges.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Unit {
    pub id: ObjectId,
    pub name: String,
    /// Editor-only suffix shown after the name (e.g. "(Level 2)").
    pub editor_suffix: Option<String>,
    /// Units this unit can train directly.
    pub trained: Vec<ObjectId>,
    /// Structures this unit (a worker) can construct.
    pub structures_built: Option<Vec<ObjectId>>,
    /// Units this unit can upgrade into.
    pub upgrades_to: Vec<ObjectId>,
    /// Upgrades researchable at this unit.
    pub researches: Vec<ObjectId>,
    /// Units sold by this unit (a shop).
    pub units_sold: Option<Vec<ObjectId>>,
    /// Regular abilities carried by the unit.
    pub unit_abilities: Vec<ObjectId>,
    /// Hero abilities learnable by the unit.
    pub hero_abilities: Vec<ObjectId>,
}

impl Unit {
    pub fn new(id: ObjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Human-readable label for diagnostics: name plus editor suffix.
    pub fn label(&self) -> String {
        match &self.editor_suffix {
            Some(suffix) => format!("{} {}", self.name, suffix),
            None => self.name.clone(),
        }
    }
}

/// An upgrade (research) definition. Terminal in the edge model:
/// researching it does not by itself expose further objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upgrade {
    pub id: ObjectId,
    pub name: String,
}

impl Upgrade {
    pub fn new(id: ObjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn label(&self) -> String {
        self.name.clone()
    }
}

/// An ability definition. The structural variant lives in `kind`; the
/// per-level data it carries determines which unit types the ability
/// instantiates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub id: ObjectId,
    pub name: String,
    /// Number of levels the ability has. Per-level data shorter than this
    /// is treated as unset at the missing levels.
    pub levels: u32,
    /// Unit-type skin variants exposed by the ability, regardless of kind.
    pub skins: Vec<ObjectId>,
    pub kind: AbilityKind,
}

impl Ability {
    pub fn new(id: ObjectId, name: impl Into<String>, levels: u32, kind: AbilityKind) -> Self {
        Self {
            id,
            name: name.into(),
            levels,
            skins: Vec::new(),
            kind,
        }
    }

    pub fn label(&self) -> String {
        self.name.clone()
    }
}

/// A resolved content object, borrowed from the catalog.
#[derive(Debug, Clone, Copy)]
pub enum ContentObject<'a> {
    Unit(&'a Unit),
    Upgrade(&'a Upgrade),
    Ability(&'a Ability),
}

impl ContentObject<'_> {
    pub fn kind(&self) -> ObjectKind {
        match self {
            ContentObject::Unit(_) => ObjectKind::Unit,
            ContentObject::Upgrade(_) => ObjectKind::Upgrade,
            ContentObject::Ability(_) => ObjectKind::Ability,
        }
    }

    pub fn id(&self) -> ObjectId {
        match self {
            ContentObject::Unit(u) => u.id,
            ContentObject::Upgrade(u) => u.id,
            ContentObject::Ability(a) => a.id,
        }
    }

    pub fn label(&self) -> String {
        match self {
            ContentObject::Unit(u) => u.label(),
            ContentObject::Upgrade(u) => u.label(),
            ContentObject::Ability(a) => a.label(),
        }
    }
}

/// The full universe of content objects, populated once per analysis run.
///
/// The catalog is immutable after construction; analysis runs only read it,
/// so it can be shared freely across independent runs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    units: HashMap<ObjectId, Unit>,
    upgrades: HashMap<ObjectId, Upgrade>,
    abilities: HashMap<ObjectId, Ability>,
}

impl Catalog {
    pub fn new(units: Vec<Unit>, upgrades: Vec<Upgrade>, abilities: Vec<Ability>) -> Self {
        Self {
            units: units.into_iter().map(|u| (u.id, u)).collect(),
            upgrades: upgrades.into_iter().map(|u| (u.id, u)).collect(),
            abilities: abilities.into_iter().map(|a| (a.id, a)).collect(),
        }
    }

    pub fn unit(&self, id: ObjectId) -> Option<&Unit> {
        self.units.get(&id)
    }

    pub fn upgrade(&self, id: ObjectId) -> Option<&Upgrade> {
        self.upgrades.get(&id)
    }

    pub fn ability(&self, id: ObjectId) -> Option<&Ability> {
        self.abilities.get(&id)
    }

    /// Resolve an id to whichever kind of object it names.
    ///
    /// Dangling references (ids defined nowhere) resolve to `None`; the
    /// traversal treats them as absent edges rather than errors.
    pub fn resolve(&self, id: ObjectId) -> Option<ContentObject<'_>> {
        if let Some(unit) = self.units.get(&id) {
            return Some(ContentObject::Unit(unit));
        }
        if let Some(upgrade) = self.upgrades.get(&id) {
            return Some(ContentObject::Upgrade(upgrade));
        }
        self.abilities.get(&id).map(ContentObject::Ability)
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    pub fn upgrades(&self) -> impl Iterator<Item = &Upgrade> {
        self.upgrades.values()
    }

    pub fn abilities(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.values()
    }

    /// Ids of every object in the catalog, all kinds.
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.units
            .keys()
            .chain(self.upgrades.keys())
            .chain(self.abilities.keys())
            .copied()
    }

    pub fn len(&self) -> usize {
        self.units.len() + self.upgrades.len() + self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
