pub const COLORS: &[&str] = &[
    "black", "blue", "brown", "gray", "green", "pink", "purple", "red", "white", "yellow",
];

pub const SHAPES: &[&str] = &[
    "ball",
    "squiggle",
    "fish",
    "arms",
    "blob",
    "upright",
    "legs",
    "quadruped",
    "wings",
    "tentacles",
    "heads",
    "humanoid",
    "bug-wings",
    "armor",
];

/// (identifier, generation, damage class)
pub const TYPES: &[(&str, i64, Option<i64>)] = &[
    ("normal", 1, Some(2)),
    ("fighting", 1, Some(2)),
    ("flying", 1, Some(2)),
    ("poison", 1, Some(2)),
    ("ground", 1, Some(2)),
    ("rock", 1, Some(2)),
    ("bug", 1, Some(2)),
    ("ghost", 1, Some(2)),
    ("steel", 2, Some(2)),
    ("fire", 1, Some(3)),
    ("water", 1, Some(3)),
    ("grass", 1, Some(3)),
    ("electric", 1, Some(3)),
    ("psychic", 1, Some(3)),
    ("ice", 1, Some(3)),
    ("dragon", 1, Some(3)),
    ("dark", 2, Some(3)),
    ("fairy", 6, None),
];
