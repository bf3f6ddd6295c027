#![no_main]
use kingrace::chess::core::{Move, Square};
use kingrace::chess::game::Game;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary notation is rejected without touching the game.
    if let Some((from, to)) = std::str::from_utf8(data)
        .ok()
        .and_then(|input| input.split_once(' '))
    {
        let mut game = Game::new();
        if !game.make_move(from, to) {
            assert!(game == Game::new());
        }
    }
    // Pairs of bytes are moves played from the initial position.
    let mut game = Game::new();
    for pair in data.chunks_exact(2) {
        let (Ok(from), Ok(to)) = (Square::try_from(pair[0] % 64), Square::try_from(pair[1] % 64))
        else {
            return;
        };
        let legal = game.legal_moves().contains(&Move::new(from, to));
        let before = game.clone();
        assert_eq!(game.make_move(&from.to_string(), &to.to_string()), legal);
        if !legal {
            assert!(game == before);
        }
    }
});
