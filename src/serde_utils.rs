#![cfg(feature = "serde")]

use crate::bitfield::BitField;
use crate::game::Game;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::marker::PhantomData;
use std::str::FromStr;

// Custom `Serialize`/`Deserialize` implementation for games (using the `{cols}x{rows}/{hex}`
// representation string)

#[derive(Default)]
pub(crate) struct RepresentationVisitor<B: BitField>(PhantomData<B>);

impl<'de, B: BitField> Visitor<'de> for RepresentationVisitor<B> {
    type Value = Game<B>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string representing a game, eg, '3x3/1e2'")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Game::from_str(value)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(value), &self))
    }
}

impl<B: BitField> Serialize for Game<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

impl<'de, B: BitField> Deserialize<'de> for Game<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(RepresentationVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::{LargeGame, SmallGame};
    use crate::cells::{Cell, Dimensions};
    use bincode::serde::{decode_from_slice, encode_to_vec};
    use std::str::FromStr;
    use test_log::test;

    #[test]
    fn test_round_trip() {
        let cfg = bincode::config::standard();
        let mut g = LargeGame::from_str("13x13/0").expect("failed to create game");
        for coords in [(5, 3), (6, 3), (7, 3), (5, 4), (7, 4)] {
            g = g.toggle(coords);
        }
        let bytes = encode_to_vec(&g, cfg).unwrap();
        let (back, _len): (LargeGame, usize) = decode_from_slice(&bytes, cfg).unwrap();
        assert_eq!(g, back);
        g = g.next();
        let bytes = encode_to_vec(&g, cfg).unwrap();
        let (back, _len): (LargeGame, usize) = decode_from_slice(&bytes, cfg).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn test_serializes_as_representation() {
        let cfg = bincode::config::standard();
        let g = SmallGame::from_str("3x3/1e2").unwrap();
        let as_game = encode_to_vec(&g, cfg).unwrap();
        let as_str = encode_to_vec("3x3/1e2", cfg).unwrap();
        assert_eq!(as_game, as_str);

        let bad = encode_to_vec("3x3/zz", cfg).unwrap();
        assert!(decode_from_slice::<SmallGame, _>(&bad, cfg).is_err());
    }

    #[test]
    fn test_plain_types() {
        let cfg = bincode::config::standard();
        let dims = Dimensions::new(4, 2).unwrap();
        let cell = Cell { x: 3, y: 1, value: true };
        let bytes = encode_to_vec((dims, cell), cfg).unwrap();
        let (back, _len): ((Dimensions, Cell), usize) = decode_from_slice(&bytes, cfg).unwrap();
        assert_eq!(back, (dims, cell));
    }

    #[test]
    fn test_unchecked_dimensions_rejected() {
        let cfg = bincode::config::standard();
        let zero_width = encode_to_vec((0usize, 3usize), cfg).unwrap();
        assert!(decode_from_slice::<Dimensions, _>(&zero_width, cfg).is_err());
        let overflowing = encode_to_vec((usize::MAX, 2usize), cfg).unwrap();
        assert!(decode_from_slice::<Dimensions, _>(&overflowing, cfg).is_err());
        let ok = encode_to_vec((4usize, 2usize), cfg).unwrap();
        let (dims, _len): (Dimensions, usize) = decode_from_slice(&ok, cfg).unwrap();
        assert_eq!(dims, Dimensions::new(4, 2).unwrap());
    }
}
