mod schema;
mod seed;
mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::*;

/// Store defines the database interface.
///
/// Every mutating operation runs in its own transaction and either commits
/// once or leaves the database untouched.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    /// Inserts the canonical color, shape and type rows if missing.
    fn seed_lookups(&self) -> Result<()>;

    // Pokemon operations
    fn list_pokemon(&self, request: PageRequest) -> Result<Page<PokemonWithSpecies>>;
    fn get_pokemon(&self, id: i64) -> Result<Option<PokemonWithSpecies>>;
    fn create_pokemon(&self, pokemon: &NewPokemon) -> Result<PokemonWithSpecies>;
    /// Returns `false` when no pokemon has the given id.
    fn update_pokemon(&self, id: i64, changes: &PokemonChanges) -> Result<bool>;
    /// Returns `false` when no pokemon has the given id.
    fn delete_pokemon(&self, id: i64) -> Result<bool>;

    // Species operations
    fn count_species(&self) -> Result<i64>;

    // Type assignment operations
    fn list_pokemon_types(&self, pokemon_id: i64) -> Result<Vec<TypeAssignment>>;
}
