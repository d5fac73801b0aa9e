//! Flattens a pokemon and its species into a single JSON object.

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::{Map, Value};

use crate::types::{Pokemon, SpeciesDetail};

fn to_map<T: Serialize>(value: &T) -> serde_json::Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(serde_json::Error::custom(format!(
            "expected an object, got {other}"
        ))),
    }
}

/// Merges a pokemon with its optional species.
///
/// Species fields are written first and the pokemon's fields are written
/// over them, so `id`, `identifier` and `order` always describe the pokemon.
/// A missing species contributes nothing.
pub fn merge_record(
    pokemon: &Pokemon,
    species: Option<&SpeciesDetail>,
) -> serde_json::Result<Map<String, Value>> {
    let mut merged = match species {
        Some(species) => to_map(species)?,
        None => Map::new(),
    };
    merged.extend(to_map(pokemon)?);
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PokemonSpecies;
    use serde_json::json;

    fn pokemon() -> Pokemon {
        Pokemon {
            id: 10,
            identifier: "ivysaur".to_string(),
            height: 10,
            weight: 130,
            base_experience: 142,
            order: 2,
            is_default: true,
            species_id: Some(2),
        }
    }

    fn species(color: Option<&str>) -> SpeciesDetail {
        SpeciesDetail {
            species: PokemonSpecies {
                id: 2,
                identifier: "ivysaur-species".to_string(),
                generation_id: Some(1),
                evolves_from_species_id: Some(1),
                evolution_chain_id: Some(1),
                color_id: Some(5),
                shape_id: Some(8),
                habitat_id: Some(3),
                gender_rate: Some(1),
                capture_rate: Some(45),
                base_happiness: Some(50),
                is_baby: Some(false),
                hatch_counter: Some(20),
                has_gender_differences: Some(false),
                growth_rate_id: Some(4),
                forms_switchable: Some(false),
                order: Some(99),
                conquest_order: None,
            },
            color: color.map(str::to_string),
            shape: Some("quadruped".to_string()),
        }
    }

    #[test]
    fn test_pokemon_fields_win_collisions() {
        let merged = merge_record(&pokemon(), Some(&species(Some("green")))).unwrap();

        assert_eq!(merged["id"], json!(10));
        assert_eq!(merged["identifier"], json!("ivysaur"));
        assert_eq!(merged["order"], json!(2));
        assert_eq!(merged["capture_rate"], json!(45));
        assert_eq!(merged["color"], json!("green"));
        assert_eq!(merged["shape"], json!("quadruped"));
    }

    #[test]
    fn test_relations_are_flattened() {
        let merged = merge_record(&pokemon(), Some(&species(None))).unwrap();

        assert!(!merged.contains_key("color_id"));
        assert!(!merged.contains_key("shape_id"));
        assert_eq!(merged.get("color"), Some(&Value::Null));
        assert_eq!(merged["evolves_from_species_id"], json!(1));
        assert_eq!(merged.get("conquest_order"), Some(&Value::Null));
    }

    #[test]
    fn test_missing_species_returns_bare_pokemon() {
        let merged = merge_record(&pokemon(), None).unwrap();

        assert_eq!(Value::Object(merged), serde_json::to_value(pokemon()).unwrap());
    }
}
