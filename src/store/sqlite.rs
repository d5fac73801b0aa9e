use std::path::Path;
use std::sync::Mutex;

use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};

use super::Store;
use super::schema::SCHEMA;
use super::seed::{COLORS, SHAPES, TYPES};
use crate::error::{Error, Result};
use crate::types::*;

const SELECT_POKEMON_WITH_SPECIES: &str = r#"
    SELECT p.id, p.identifier, p.height, p.weight, p.base_experience, p."order",
           p.is_default, p.species_id,
           s.id, s.identifier, s.generation_id, s.evolves_from_species_id,
           s.evolution_chain_id, s.color_id, s.shape_id, s.habitat_id, s.gender_rate,
           s.capture_rate, s.base_happiness, s.is_baby, s.hatch_counter,
           s.has_gender_differences, s.growth_rate_id, s.forms_switchable, s."order",
           s.conquest_order, c.identifier, sh.identifier
    FROM pokemon p
    LEFT JOIN pokemon_species s ON p.species_id = s.id
    LEFT JOIN pokemon_colors c ON s.color_id = c.id
    LEFT JOIN pokemon_shapes sh ON s.shape_id = sh.id"#;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Self::from_connection(conn)
    }

    /// Opens a private database that lives as long as the store.
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns a guard to the underlying database connection.
    /// This allows consuming applications to execute custom SQL.
    pub fn connection(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn()
    }
}

/// Reads species columns starting at `offset`; the two columns after the
/// species hold the joined color and shape identifiers.
fn species_from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<SpeciesDetail> {
    Ok(SpeciesDetail {
        species: PokemonSpecies {
            id: row.get(offset)?,
            identifier: row.get(offset + 1)?,
            generation_id: row.get(offset + 2)?,
            evolves_from_species_id: row.get(offset + 3)?,
            evolution_chain_id: row.get(offset + 4)?,
            color_id: row.get(offset + 5)?,
            shape_id: row.get(offset + 6)?,
            habitat_id: row.get(offset + 7)?,
            gender_rate: row.get(offset + 8)?,
            capture_rate: row.get(offset + 9)?,
            base_happiness: row.get(offset + 10)?,
            is_baby: row.get(offset + 11)?,
            hatch_counter: row.get(offset + 12)?,
            has_gender_differences: row.get(offset + 13)?,
            growth_rate_id: row.get(offset + 14)?,
            forms_switchable: row.get(offset + 15)?,
            order: row.get(offset + 16)?,
            conquest_order: row.get(offset + 17)?,
        },
        color: row.get(offset + 18)?,
        shape: row.get(offset + 19)?,
    })
}

fn pokemon_with_species_from_row(row: &Row<'_>) -> rusqlite::Result<PokemonWithSpecies> {
    let pokemon = Pokemon {
        id: row.get(0)?,
        identifier: row.get(1)?,
        height: row.get(2)?,
        weight: row.get(3)?,
        base_experience: row.get(4)?,
        order: row.get(5)?,
        is_default: row.get(6)?,
        species_id: row.get(7)?,
    };

    // A dangling or null species_id leaves every joined column null.
    let species = match row.get::<_, Option<i64>>(8)? {
        Some(_) => Some(species_from_row(row, 8)?),
        None => None,
    };

    Ok(PokemonWithSpecies { pokemon, species })
}

fn fetch_pokemon(conn: &Connection, id: i64) -> Result<Option<PokemonWithSpecies>> {
    conn.query_row(
        &format!("{SELECT_POKEMON_WITH_SPECIES} WHERE p.id = ?1"),
        params![id],
        pokemon_with_species_from_row,
    )
    .optional()
    .map_err(Error::from)
}

fn to_sql_value(value: &FieldValue) -> SqlValue {
    match value {
        FieldValue::Text(s) => SqlValue::Text(s.clone()),
        FieldValue::Integer(i) => SqlValue::Integer(*i),
        FieldValue::Bool(b) => SqlValue::Integer(i64::from(*b)),
    }
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    fn seed_lookups(&self) -> Result<()> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        for (i, identifier) in COLORS.iter().enumerate() {
            tx.execute(
                "INSERT OR IGNORE INTO pokemon_colors (id, identifier) VALUES (?1, ?2)",
                params![i as i64 + 1, identifier],
            )?;
        }
        for (i, identifier) in SHAPES.iter().enumerate() {
            tx.execute(
                "INSERT OR IGNORE INTO pokemon_shapes (id, identifier) VALUES (?1, ?2)",
                params![i as i64 + 1, identifier],
            )?;
        }
        for (i, (identifier, generation_id, damage_class_id)) in TYPES.iter().enumerate() {
            tx.execute(
                "INSERT OR IGNORE INTO types (id, identifier, generation_id, damage_class_id)
                 VALUES (?1, ?2, ?3, ?4)",
                params![i as i64 + 1, identifier, generation_id, damage_class_id],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    // Pokemon operations

    fn list_pokemon(&self, request: PageRequest) -> Result<Page<PokemonWithSpecies>> {
        let conn = self.conn();

        let total: i64 = conn.query_row("SELECT COUNT(*) FROM pokemon", [], |row| row.get(0))?;

        let mut stmt = conn.prepare(&format!(
            "{SELECT_POKEMON_WITH_SPECIES} ORDER BY p.id LIMIT ?1 OFFSET ?2"
        ))?;
        let rows = stmt.query_map(
            params![request.limit(), request.offset()],
            pokemon_with_species_from_row,
        )?;
        let items = rows.collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Page {
            total,
            request,
            items,
        })
    }

    fn get_pokemon(&self, id: i64) -> Result<Option<PokemonWithSpecies>> {
        fetch_pokemon(&self.conn(), id)
    }

    fn create_pokemon(&self, pokemon: &NewPokemon) -> Result<PokemonWithSpecies> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let species_id = match &pokemon.species {
            SpeciesLink::Existing(id) => *id,
            SpeciesLink::Create(species) => {
                tx.execute(
                    r#"INSERT INTO pokemon_species (identifier, generation_id, evolves_from_species_id,
                        evolution_chain_id, color_id, shape_id, habitat_id, gender_rate,
                        capture_rate, base_happiness, is_baby, hatch_counter,
                        has_gender_differences, growth_rate_id, forms_switchable, "order",
                        conquest_order)
                     VALUES (?1, ?2, NULL, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)"#,
                    params![
                        pokemon.identifier,
                        species.generation_id,
                        species.evolution_chain_id,
                        species.color_id,
                        species.shape_id,
                        species.habitat_id,
                        species.gender_rate,
                        species.capture_rate,
                        species.base_happiness,
                        species.is_baby,
                        species.hatch_counter,
                        species.has_gender_differences,
                        species.growth_rate_id,
                        species.forms_switchable,
                        pokemon.order,
                        species.conquest_order,
                    ],
                )?;
                tx.last_insert_rowid()
            }
        };

        tx.execute(
            r#"INSERT INTO pokemon (identifier, height, weight, base_experience, "order",
                is_default, species_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"#,
            params![
                pokemon.identifier,
                pokemon.height,
                pokemon.weight,
                pokemon.base_experience,
                pokemon.order,
                pokemon.is_default,
                species_id,
            ],
        )?;
        let pokemon_id = tx.last_insert_rowid();

        for (slot, type_id) in pokemon.type_ids.iter().enumerate() {
            tx.execute(
                "INSERT INTO pokemon_types (pokemon_id, type_id, slot) VALUES (?1, ?2, ?3)",
                params![pokemon_id, type_id, slot as i64 + 1],
            )?;
        }

        let created = fetch_pokemon(&tx, pokemon_id)?.ok_or(Error::NotFound)?;
        tx.commit()?;
        Ok(created)
    }

    fn update_pokemon(&self, id: i64, changes: &PokemonChanges) -> Result<bool> {
        if changes.is_empty() {
            return Err(Error::BadRequest("No data changed".to_string()));
        }

        let assignments: Vec<String> = changes
            .iter()
            .enumerate()
            .map(|(i, (field, _))| format!("\"{}\" = ?{}", field.column(), i + 1))
            .collect();
        let mut values: Vec<SqlValue> = changes.iter().map(|(_, v)| to_sql_value(v)).collect();
        values.push(SqlValue::Integer(id));

        let sql = format!(
            "UPDATE pokemon SET {} WHERE id = ?{}",
            assignments.join(", "),
            values.len()
        );

        let mut conn = self.conn();
        let tx = conn.transaction()?;
        let rows = tx.execute(&sql, params_from_iter(values.iter()))?;
        tx.commit()?;

        Ok(rows > 0)
    }

    fn delete_pokemon(&self, id: i64) -> Result<bool> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;
        let rows = tx.execute("DELETE FROM pokemon WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(rows > 0)
    }

    // Species operations

    fn count_species(&self) -> Result<i64> {
        self.conn()
            .query_row("SELECT COUNT(*) FROM pokemon_species", [], |row| row.get(0))
            .map_err(Error::from)
    }

    // Type assignment operations

    fn list_pokemon_types(&self, pokemon_id: i64) -> Result<Vec<TypeAssignment>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT pt.slot, pt.type_id, t.identifier
             FROM pokemon_types pt
             JOIN types t ON t.id = pt.type_id
             WHERE pt.pokemon_id = ?1
             ORDER BY pt.slot",
        )?;

        let rows = stmt.query_map(params![pokemon_id], |row| {
            Ok(TypeAssignment {
                slot: row.get(0)?,
                type_id: row.get(1)?,
                identifier: row.get(2)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }
}
