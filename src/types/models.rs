use serde::{Deserialize, Serialize};

/// A row of the `pokemon` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pokemon {
    pub id: i64,
    pub identifier: String,
    pub height: i64,
    pub weight: i64,
    pub base_experience: i64,
    pub order: i64,
    pub is_default: bool,
    pub species_id: Option<i64>,
}

/// A row of the `pokemon_species` table.
///
/// The color and shape foreign keys are never rendered directly; see
/// [`SpeciesDetail`] for the display form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonSpecies {
    pub id: i64,
    pub identifier: String,
    pub generation_id: Option<i64>,
    pub evolves_from_species_id: Option<i64>,
    pub evolution_chain_id: Option<i64>,
    #[serde(skip_serializing)]
    pub color_id: Option<i64>,
    #[serde(skip_serializing)]
    pub shape_id: Option<i64>,
    pub habitat_id: Option<i64>,
    pub gender_rate: Option<i64>,
    pub capture_rate: Option<i64>,
    pub base_happiness: Option<i64>,
    pub is_baby: Option<bool>,
    pub hatch_counter: Option<i64>,
    pub has_gender_differences: Option<bool>,
    pub growth_rate_id: Option<i64>,
    pub forms_switchable: Option<bool>,
    pub order: Option<i64>,
    pub conquest_order: Option<i64>,
}

/// A species joined with its color and shape identifiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesDetail {
    #[serde(flatten)]
    pub species: PokemonSpecies,
    pub color: Option<String>,
    pub shape: Option<String>,
}

/// A pokemon with its optional species, as produced by the outer join.
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonWithSpecies {
    pub pokemon: Pokemon,
    pub species: Option<SpeciesDetail>,
}

/// A row of `pokemon_types` joined with the type identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeAssignment {
    pub slot: i64,
    pub type_id: i64,
    pub identifier: String,
}

/// Species columns supplied when a new pokemon brings its own species.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewSpecies {
    #[serde(default)]
    pub generation_id: Option<i64>,
    #[serde(default)]
    pub evolution_chain_id: Option<i64>,
    #[serde(default)]
    pub color_id: Option<i64>,
    #[serde(default)]
    pub shape_id: Option<i64>,
    #[serde(default)]
    pub habitat_id: Option<i64>,
    #[serde(default)]
    pub gender_rate: Option<i64>,
    #[serde(default)]
    pub capture_rate: Option<i64>,
    #[serde(default)]
    pub base_happiness: Option<i64>,
    #[serde(default)]
    pub is_baby: Option<bool>,
    #[serde(default)]
    pub hatch_counter: Option<i64>,
    #[serde(default)]
    pub has_gender_differences: Option<bool>,
    #[serde(default)]
    pub growth_rate_id: Option<i64>,
    #[serde(default)]
    pub forms_switchable: Option<bool>,
    #[serde(default)]
    pub conquest_order: Option<i64>,
}

/// How a new pokemon obtains its species.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeciesLink {
    /// Attach to a species row that already exists.
    Existing(i64),
    /// Insert a fresh species in the same transaction.
    Create(NewSpecies),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPokemon {
    pub identifier: String,
    pub height: i64,
    pub weight: i64,
    pub base_experience: i64,
    pub order: i64,
    pub is_default: bool,
    pub species: SpeciesLink,
    pub type_ids: Vec<i64>,
}
