pub const SCHEMA: &str = r#"
-- Lookup tables
CREATE TABLE IF NOT EXISTS pokemon_colors (
    id INTEGER PRIMARY KEY,
    identifier TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS pokemon_shapes (
    id INTEGER PRIMARY KEY,
    identifier TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS types (
    id INTEGER PRIMARY KEY,
    identifier TEXT NOT NULL UNIQUE,
    generation_id INTEGER,
    damage_class_id INTEGER
);

-- Species; evolution chains are expected to be acyclic but are not checked
CREATE TABLE IF NOT EXISTS pokemon_species (
    id INTEGER PRIMARY KEY,
    identifier TEXT NOT NULL,
    generation_id INTEGER,
    evolves_from_species_id INTEGER REFERENCES pokemon_species(id),
    evolution_chain_id INTEGER,
    color_id INTEGER REFERENCES pokemon_colors(id),
    shape_id INTEGER REFERENCES pokemon_shapes(id),
    habitat_id INTEGER,
    gender_rate INTEGER,
    capture_rate INTEGER,
    base_happiness INTEGER,
    is_baby INTEGER,
    hatch_counter INTEGER,
    has_gender_differences INTEGER,
    growth_rate_id INTEGER,
    forms_switchable INTEGER,
    "order" INTEGER,
    conquest_order INTEGER
);

CREATE TABLE IF NOT EXISTS pokemon (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    identifier TEXT NOT NULL,
    height INTEGER NOT NULL,
    weight INTEGER NOT NULL,
    base_experience INTEGER NOT NULL,
    "order" INTEGER NOT NULL,
    is_default INTEGER NOT NULL DEFAULT 1,
    species_id INTEGER REFERENCES pokemon_species(id)
);

-- Type slots are owned by the pokemon
CREATE TABLE IF NOT EXISTS pokemon_types (
    pokemon_id INTEGER NOT NULL REFERENCES pokemon(id) ON DELETE CASCADE,
    type_id INTEGER NOT NULL REFERENCES types(id),
    slot INTEGER NOT NULL,
    PRIMARY KEY (pokemon_id, slot)
);

CREATE INDEX IF NOT EXISTS idx_pokemon_species ON pokemon(species_id);
CREATE INDEX IF NOT EXISTS idx_species_color ON pokemon_species(color_id);
CREATE INDEX IF NOT EXISTS idx_species_shape ON pokemon_species(shape_id);
CREATE INDEX IF NOT EXISTS idx_pokemon_types_type ON pokemon_types(type_id);
"#;
