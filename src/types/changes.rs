use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Columns of `pokemon` a client may change through a partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PokemonField {
    Identifier,
    Height,
    Weight,
    BaseExperience,
    Order,
    IsDefault,
    SpeciesId,
}

impl PokemonField {
    pub const ALL: [PokemonField; 7] = [
        PokemonField::Identifier,
        PokemonField::Height,
        PokemonField::Weight,
        PokemonField::BaseExperience,
        PokemonField::Order,
        PokemonField::IsDefault,
        PokemonField::SpeciesId,
    ];

    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            PokemonField::Identifier => "identifier",
            PokemonField::Height => "height",
            PokemonField::Weight => "weight",
            PokemonField::BaseExperience => "base_experience",
            PokemonField::Order => "order",
            PokemonField::IsDefault => "is_default",
            PokemonField::SpeciesId => "species_id",
        }
    }

    fn parse(self, value: &Value) -> Option<FieldValue> {
        match self {
            PokemonField::Identifier => value.as_str().map(|s| FieldValue::Text(s.to_string())),
            PokemonField::IsDefault => match value {
                Value::Bool(b) => Some(FieldValue::Bool(*b)),
                _ => match value.as_i64()? {
                    0 => Some(FieldValue::Bool(false)),
                    1 => Some(FieldValue::Bool(true)),
                    _ => None,
                },
            },
            _ => value.as_i64().map(FieldValue::Integer),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Bool(bool),
}

/// A validated set of column assignments for one pokemon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PokemonChanges {
    fields: Vec<(PokemonField, FieldValue)>,
}

impl PokemonChanges {
    /// Keeps only whitelisted, non-null keys of a request body.
    ///
    /// Unknown keys (including `id`) and nulls are dropped silently. A
    /// whitelisted key carrying a value of the wrong JSON type is rejected.
    pub fn from_json(body: &Map<String, Value>) -> Result<Self> {
        let mut fields = Vec::new();

        for field in PokemonField::ALL {
            let Some(value) = body.get(field.column()) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            let parsed = field.parse(value).ok_or_else(|| {
                Error::BadRequest(format!("Invalid value for field '{}'", field.column()))
            })?;
            fields.push((field, parsed));
        }

        Ok(Self { fields })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(PokemonField, FieldValue)> {
        self.fields.iter()
    }

    #[must_use]
    pub fn with(mut self, field: PokemonField, value: FieldValue) -> Self {
        self.fields.retain(|(f, _)| *f != field);
        self.fields.push((field, value));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_drops_unknown_and_null_keys() {
        let changes = PokemonChanges::from_json(&body(json!({
            "id": 99,
            "nickname": "sparky",
            "height": null,
            "weight": 60,
        })))
        .unwrap();

        let fields: Vec<_> = changes.iter().cloned().collect();
        assert_eq!(
            fields,
            vec![(PokemonField::Weight, FieldValue::Integer(60))]
        );
    }

    #[test]
    fn test_only_ignored_keys_is_empty() {
        let changes =
            PokemonChanges::from_json(&body(json!({"id": 3, "height": null, "foo": 1}))).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn test_wrong_type_rejected() {
        let result = PokemonChanges::from_json(&body(json!({"is_default": "yes"})));
        assert!(matches!(result, Err(Error::BadRequest(_))));

        let result = PokemonChanges::from_json(&body(json!({"height": 1.5})));
        assert!(matches!(result, Err(Error::BadRequest(_))));
    }

    #[test]
    fn test_is_default_accepts_zero_and_one() {
        let changes = PokemonChanges::from_json(&body(json!({"is_default": 0}))).unwrap();
        let fields: Vec<_> = changes.iter().cloned().collect();
        assert_eq!(fields, vec![(PokemonField::IsDefault, FieldValue::Bool(false))]);

        let changes = PokemonChanges::from_json(&body(json!({"is_default": 1}))).unwrap();
        let fields: Vec<_> = changes.iter().cloned().collect();
        assert_eq!(fields, vec![(PokemonField::IsDefault, FieldValue::Bool(true))]);

        let result = PokemonChanges::from_json(&body(json!({"is_default": 2})));
        assert!(matches!(result, Err(Error::BadRequest(_))));
    }

    #[test]
    fn test_all_whitelisted_fields_accepted() {
        let changes = PokemonChanges::from_json(&body(json!({
            "identifier": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "order": 35,
            "is_default": true,
            "species_id": 25,
        })))
        .unwrap();
        assert_eq!(changes.iter().count(), PokemonField::ALL.len());
    }

    #[test]
    fn test_with_replaces_existing_field() {
        let changes = PokemonChanges::default()
            .with(PokemonField::Height, FieldValue::Integer(1))
            .with(PokemonField::Height, FieldValue::Integer(2));
        let fields: Vec<_> = changes.iter().cloned().collect();
        assert_eq!(fields, vec![(PokemonField::Height, FieldValue::Integer(2))]);
    }
}
