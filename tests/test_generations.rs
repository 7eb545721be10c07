use lifebits::aliases::{LargeGame, MediumGame, SmallGame};
use lifebits::representation::next;
use lifebits::{BitField, Game};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

fn recorded_generations() -> Vec<Vec<String>> {
    let f: PathBuf = [env!("CARGO_MANIFEST_DIR"), "resources", "test", "generations.txt"]
        .iter()
        .collect();
    let s = fs::read_to_string(f).unwrap();
    s.lines()
        .filter(|line| !line.starts_with('#') && !line.is_empty())
        .map(|line| line.split(',').map(String::from).collect())
        .collect()
}

fn check_typed<B: BitField>(generations: &[String]) {
    let first = Game::<B>::from_str(&generations[0]);
    let Ok(mut game) = first else {
        // Board does not fit in this bit field.
        return;
    };
    for expected in &generations[1..] {
        game = game.next();
        assert_eq!(&game.to_string(), expected);
    }
}

#[test]
fn test_recorded_generations() {
    let recorded = recorded_generations();
    assert!(recorded.len() >= 16);
    for generations in recorded {
        let mut game = generations[0].clone();
        for expected in &generations[1..] {
            game = next(&game);
            assert_eq!(&game, expected, "unexpected generation after {}", generations[0]);
        }
    }
}

#[test]
fn test_recorded_generations_fixed_width() {
    for generations in recorded_generations() {
        check_typed::<u64>(&generations);
        check_typed::<u128>(&generations);
    }
}

#[test]
fn test_recorded_generations_typed_agree() {
    for generations in recorded_generations() {
        let large = LargeGame::from_str(&generations[0]).unwrap();
        if let Ok(small) = SmallGame::from_str(&generations[0]) {
            assert_eq!(small.next().to_string(), large.next().to_string());
        }
        if let Ok(medium) = MediumGame::from_str(&generations[0]) {
            assert_eq!(medium.next().to_string(), large.next().to_string());
        }
    }
}
