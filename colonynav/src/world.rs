//! The colony world the menus operate on.
//!
//! A world is a plain TOML file listing the colony's food policies, outfits,
//! colonists and surgery recipes. It stands in for the live simulation a real
//! host would query.
//!
//! ```toml
//! food_policies = ["Lavish", "Simple"]
//! outfits = ["Anything", "Worker"]
//!
//! [[colonists]]
//! name = "Engie"
//! food_policy = "Simple"
//! outfit = "Worker"
//! medical_care = "normal_or_worse"
//! hostility = "flee"
//! parts = ["Left leg", "Right leg"]
//!
//! [[recipes]]
//! name = "Install peg leg"
//! parts = ["Left leg", "Right leg"]
//! ingredients = ["Peg leg"]
//! ```

use std::{fmt, fs, path::Path, time::SystemTime};

use anyhow::Context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Whole-colony state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct World {
    /// Food policies a colonist can be assigned.
    pub food_policies: Vec<String>,
    /// Outfits a colonist can be assigned.
    pub outfits: Vec<String>,
    pub colonists: Vec<Colonist>,
    /// Surgery catalog.
    pub recipes: Vec<Recipe>,
}

/// A single colonist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Colonist {
    pub name: String,
    pub food_policy: String,
    pub outfit: String,
    pub medical_care: MedicalCare,
    pub hostility: HostilityResponse,
    /// Whether the colonist may treat their own injuries.
    pub self_tend: bool,
    /// Body parts that can be operated on.
    pub parts: Vec<String>,
    /// Queued operations, first one is performed first.
    pub operations: Vec<Operation>,
}

/// A queued operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Operation {
    /// Name of the [`Recipe`].
    pub recipe: String,
    /// Target part; `None` for whole-body operations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part: Option<String>,
    #[serde(default)]
    pub suspended: bool,
}

impl Operation {
    /// "Install peg leg (Left leg)".
    pub fn label(&self) -> String {
        match &self.part {
            Some(part) => format!("{} ({part})", self.recipe),
            None => self.recipe.clone(),
        }
    }
}

/// A surgery that can be queued.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Recipe {
    pub name: String,
    /// Parts the recipe can target. Empty means the whole body.
    pub parts: Vec<String>,
    pub ingredients: Vec<String>,
    /// Minimum medicine skill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<u8>,
}

/// What a colonist may be treated with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MedicalCare {
    NoCare,
    NoMeds,
    HerbalOrWorse,
    #[default]
    NormalOrWorse,
    Best,
}

impl MedicalCare {
    pub const ALL: [MedicalCare; 5] = [
        MedicalCare::NoCare,
        MedicalCare::NoMeds,
        MedicalCare::HerbalOrWorse,
        MedicalCare::NormalOrWorse,
        MedicalCare::Best,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MedicalCare::NoCare => "No care",
            MedicalCare::NoMeds => "No medicine",
            MedicalCare::HerbalOrWorse => "Herbal medicine or worse",
            MedicalCare::NormalOrWorse => "Medicine or worse",
            MedicalCare::Best => "Best medicine",
        }
    }
}

/// How a colonist reacts to enemies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HostilityResponse {
    Ignore,
    #[default]
    Attack,
    Flee,
}

impl HostilityResponse {
    pub const ALL: [HostilityResponse; 3] = [
        HostilityResponse::Ignore,
        HostilityResponse::Attack,
        HostilityResponse::Flee,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HostilityResponse::Ignore => "Ignore",
            HostilityResponse::Attack => "Attack",
            HostilityResponse::Flee => "Flee",
        }
    }
}

impl fmt::Display for MedicalCare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for HostilityResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl World {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let world = toml::from_str(content)?;
        Ok(world)
    }

    /// Load a world file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read world {}", path.display()))?;
        let world = Self::from_toml_str(&content)
            .with_context(|| format!("invalid world {}", path.display()))?;
        debug!(
            "loaded {} colonists and {} recipes from {}",
            world.colonists.len(),
            world.recipes.len(),
            path.display()
        );
        Ok(world)
    }

    /// Write the world back to `path`, keeping a timestamped copy of the
    /// previous file next to it.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;

        if path.exists() {
            let bk = format!(
                "bk-{:?}.toml",
                SystemTime::now()
                    .duration_since(SystemTime::UNIX_EPOCH)?
                    .as_secs()
            );
            let backup_path = path.with_extension(bk);
            fs::copy(path, &backup_path)
                .with_context(|| format!("failed to back up {}", path.display()))?;
            info!("previous world kept at {}", backup_path.display());
        }
        fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Index of the colonist called `name`, ignoring case.
    pub fn find_colonist(&self, name: &str) -> Option<usize> {
        self.colonists
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// JSON Schema of the world file.
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(World)).unwrap_or_default()
    }
}

impl Colonist {
    /// Parts `recipe` could still be queued on. A whole-body recipe yields a
    /// single `None` unless it is already queued.
    pub fn eligible_parts(&self, recipe: &Recipe) -> Vec<Option<String>> {
        let queued = |part: Option<&str>| {
            self.operations
                .iter()
                .any(|op| op.recipe == recipe.name && op.part.as_deref() == part)
        };

        if recipe.parts.is_empty() {
            return if queued(None) { Vec::new() } else { vec![None] };
        }
        recipe
            .parts
            .iter()
            .filter(|part| self.parts.contains(*part))
            .filter(|part| !queued(Some(part.as_str())))
            .cloned()
            .map(Some)
            .collect()
    }
}
