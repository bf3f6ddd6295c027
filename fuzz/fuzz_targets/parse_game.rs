#![no_main]
use kingrace::chess::game::Game;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(input) => input,
        Err(_) => return,
    };
    if let Ok(game) = Game::try_from(input) {
        let printed = game.to_string();
        assert_eq!(Game::try_from(printed.as_str()).ok(), Some(game));
    }
});
