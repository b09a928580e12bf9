//! Reference equations and end-to-end generation checks.

use pyramid_core::{
    Deck, GameState, Operator, PcgRng, PuzzleConfig, PuzzleGenerator, Tile, enumerate,
    enumerate_in_range, evaluate, evaluate_raw, generate_game_state,
};

const INVALID: i64 = PuzzleConfig::INVALID_RESULT;

fn parse(faces: [&str; 3]) -> [Tile; 3] {
    let mut tiles = [Tile::at(0, Operator::Add, 0); 3];
    for (position, face) in faces.iter().enumerate() {
        tiles[position] = Tile::parse_at(position, face).expect("valid tile text");
    }
    tiles
}

#[test]
fn three_additions() {
    assert_eq!(evaluate(&parse(["+5", "+3", "+2"])), 10);
}

#[test]
fn subtract_then_add_left_to_right() {
    assert_eq!(evaluate(&parse(["+15", "-9", "+9"])), 15);
}

#[test]
fn inexact_division() {
    let tiles = parse(["+10", "/3", "+2"]);
    assert_eq!(evaluate(&tiles), INVALID);
    assert_eq!(evaluate_raw(&tiles), 5.33);
}

#[test]
fn multiplication_binds_tighter() {
    assert_eq!(evaluate(&parse(["+5", "+3", "*2"])), 11);
}

#[test]
fn chained_inexact_division() {
    assert_eq!(evaluate(&parse(["+20", "/2", "/3"])), INVALID);
}

#[test]
fn four_tile_enumeration() {
    let tiles: Vec<Tile> = ["+5", "+3", "*2", "-1"]
        .iter()
        .enumerate()
        .map(|(position, face)| Tile::parse_at(position, face).unwrap())
        .collect();
    assert_eq!(enumerate(&tiles).len(), 24);
}

#[test]
fn full_deck_enumeration() {
    let deck = PuzzleGenerator::new(PcgRng::new(1)).generate_deck();
    let all = enumerate(deck.tiles());
    assert_eq!(all.len(), 720);

    let in_range = enumerate_in_range(deck.tiles(), PuzzleConfig::TARGET_RESULTS);
    assert!(in_range.len() <= all.len());
    assert!(in_range.iter().all(|equation| equation.is_valid()));
}

#[test]
fn hand_built_deck_round() {
    let faces = [
        "/13", "+7", "*13", "*12", "/4", "-2", "-3", "-4", "+8", "-5",
    ];
    let tiles = faces
        .iter()
        .enumerate()
        .map(|(position, face)| Tile::parse_at(position, face).unwrap());
    let deck = Deck::from_tiles(tiles).expect("deck is legal");
    let state = GameState::for_deck(deck).expect("deck has a target");

    assert_eq!(state.target_number, 14);
    assert_eq!(state.solution_count(), 3);

    // D (12) + I (8) / E (4)
    let outcome = state.check_guess([3, 8, 4]).unwrap();
    assert!(outcome.is_correct());
    assert_eq!(outcome.equation().labels(), ['D', 'I', 'E']);
    assert_eq!(outcome.equation().to_string(), "12 + 8 / 4 = 14");

    // D (12) + B (7) + I (8) overshoots
    assert!(!state.check_guess([3, 1, 8]).unwrap().is_correct());
}

#[test]
fn generation_with_custom_config() {
    let config = PuzzleConfig::new()
        .with_max_generation_attempts(3)
        .with_max_sampling_attempts(10);
    let mut generator = PuzzleGenerator::with_config(config, PcgRng::new(77));

    for _ in 0..10 {
        let state = generator.generate_game_state();
        assert_eq!(state.tiles.len(), PuzzleConfig::DECK_SIZE);
        for equation in &state.valid_equations {
            assert_eq!(equation.result, i64::from(state.target_number));
        }
    }
}

#[test]
fn seeds_reproduce_games() {
    let mut first = PcgRng::new(2718);
    let mut second = PcgRng::new(2718);
    for _ in 0..5 {
        assert_eq!(
            generate_game_state(&mut first),
            generate_game_state(&mut second)
        );
    }
}

#[cfg(feature = "serde")]
#[test]
fn game_state_json_uses_frontend_field_names() {
    let state = generate_game_state(&mut PcgRng::new(5));
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["targetNumber"], state.target_number);
    assert_eq!(json["tiles"].as_array().unwrap().len(), 10);
    assert!(json["tiles"][0]["operator"].is_string());
    assert_eq!(
        json["validEquations"].as_array().unwrap().len(),
        state.valid_equations.len()
    );

    let back: GameState = serde_json::from_value(json).unwrap();
    assert_eq!(back, state);
}

#[cfg(feature = "serde")]
#[test]
fn decoded_decks_must_be_valid() {
    let state = generate_game_state(&mut PcgRng::new(5));
    let json = serde_json::to_value(&state).unwrap();
    let tiles = json["tiles"].as_array().unwrap().clone();

    let short = serde_json::Value::Array(tiles[..2].to_vec());
    assert!(serde_json::from_value::<Deck>(short).is_err());

    let mut duplicated = tiles.clone();
    duplicated[1] = duplicated[0].clone();
    let err = serde_json::from_value::<Deck>(serde_json::Value::Array(duplicated.clone()))
        .unwrap_err();
    assert!(err.to_string().contains("more than once"), "{err}");

    let mut broken_state = json.clone();
    broken_state["tiles"] = serde_json::Value::Array(duplicated);
    assert!(serde_json::from_value::<GameState>(broken_state).is_err());

    let deck: Deck = serde_json::from_value(serde_json::Value::Array(tiles)).unwrap();
    assert_eq!(deck, state.tiles);
}
