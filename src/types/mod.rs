mod changes;
mod models;
mod paging;

pub use changes::{FieldValue, PokemonChanges, PokemonField};
pub use models::*;
pub use paging::{DEFAULT_PAGE, DEFAULT_PER_PAGE, Page, PageRequest};
