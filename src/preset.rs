//! Ready-made boards, as grids readable by [`crate::Game::from_text`] and
//! [`crate::representation::from_text`].

/// Period 2 oscillator.
pub const BLINKER: &str = "
    . . . . .
    . . . . .
    . x x x .
    . . . . .
    . . . . .
";

/// Period 2 oscillator.
pub const TOAD: &str = "
    . . . . . .
    . . . . . .
    . . x x x .
    . x x x . .
    . . . . . .
    . . . . . .
";

/// Period 2 oscillator made of two blocks touching at a corner.
pub const BEACON: &str = "
    . . . . . .
    . x x . . .
    . x . . . .
    . . . . x .
    . . . x x .
    . . . . . .
";

/// Still life.
pub const BLOCK: &str = "
    . . . .
    . x x .
    . x x .
    . . . .
";

/// Travels one cell down and to the right every four generations, until it meets the edge.
pub const GLIDER: &str = "
    . x . . . . . .
    . . x . . . . .
    x x x . . . . .
    . . . . . . . .
    . . . . . . . .
    . . . . . . . .
    . . . . . . . .
    . . . . . . . .
";

/// Two facing cups that grow into a pulsar.
pub const PULSAR_SEED: &str = "
    . . . . . . . . . . . . .
    . . . . . . . . . . . . .
    . . . . . . . . . . . . .
    . . . . . x x x . . . . .
    . . . . . x . x . . . . .
    . . . . . x . x . . . . .
    . . . . . . . . . . . . .
    . . . . . x . x . . . . .
    . . . . . x . x . . . . .
    . . . . . x x x . . . . .
    . . . . . . . . . . . . .
    . . . . . . . . . . . . .
    . . . . . . . . . . . . .
";

/// Every preset, by name.
pub const ALL: [(&str, &str); 6] = [
    ("blinker", BLINKER),
    ("toad", TOAD),
    ("beacon", BEACON),
    ("block", BLOCK),
    ("glider", GLIDER),
    ("pulsar-seed", PULSAR_SEED),
];

/// Look up a preset by name, ignoring case.
pub fn by_name(name: &str) -> Option<&'static str> {
    ALL.iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, grid)| *grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::{LargeGame, SmallGame};
    use test_log::test;

    #[test]
    fn test_presets_parse() {
        for (name, grid) in ALL {
            let game = LargeGame::from_text(grid);
            assert!(game.is_ok(), "preset {name} did not parse: {game:?}");
        }
        assert_eq!(SmallGame::from_text(GLIDER).unwrap().to_string(), "8x8/70402");
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("glider"), Some(GLIDER));
        assert_eq!(by_name("Pulsar-Seed"), Some(PULSAR_SEED));
        assert_eq!(by_name("gosper"), None);
    }
}
