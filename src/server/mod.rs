pub mod assemble;
pub mod dto;
pub mod pagination;
mod pokemons;
pub mod response;
mod router;

pub use pokemons::pokemon_router;
pub use router::{AppState, create_router};
