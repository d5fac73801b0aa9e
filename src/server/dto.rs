use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{NewPokemon, NewSpecies, SpeciesLink};

const MAX_TYPE_SLOTS: usize = 2;

/// Body of `POST /api/pokemons/`.
///
/// Species columns sit at the top level next to the pokemon's own fields and
/// are only read when a new species has to be created.
#[derive(Debug, Deserialize)]
pub struct CreatePokemonRequest {
    pub identifier: String,
    pub height: i64,
    pub weight: i64,
    pub base_experience: i64,
    pub order: i64,
    pub is_default: bool,
    #[serde(default)]
    pub species_id: Option<i64>,
    #[serde(default)]
    pub evolves_from_species_id: Option<i64>,
    #[serde(default)]
    pub type_ids: Vec<i64>,
    #[serde(flatten)]
    pub species: NewSpecies,
}

impl CreatePokemonRequest {
    /// An explicit `species_id` wins, then `evolves_from_species_id`;
    /// otherwise a new species is created from the request.
    pub fn into_new_pokemon(self) -> Result<NewPokemon, String> {
        if self.type_ids.len() > MAX_TYPE_SLOTS {
            return Err(format!(
                "A pokemon can have at most {MAX_TYPE_SLOTS} types"
            ));
        }

        let species = match self.species_id.or(self.evolves_from_species_id) {
            Some(id) => SpeciesLink::Existing(id),
            None => SpeciesLink::Create(self.species),
        };

        Ok(NewPokemon {
            identifier: self.identifier,
            height: self.height,
            weight: self.weight,
            base_experience: self.base_experience,
            order: self.order,
            is_default: self.is_default,
            species,
            type_ids: self.type_ids,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CreatePokemonResponse {
    pub message: &'static str,
    pub pokemon: Map<String, Value>,
}

/// Paged list envelope.
#[derive(Debug, Serialize)]
pub struct PokemonListResponse {
    pub total: i64,
    pub page: u32,
    pub prev_page: Option<String>,
    pub next_page: Option<String>,
    pub per_page: u32,
    pub data: Vec<Map<String, Value>>,
}
