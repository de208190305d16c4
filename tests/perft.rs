use lib::chess::{Board, Color, Game};
use rayon::prelude::*;
use test_strategy::proptest;

fn perft(game: &Game, depth: u8) -> usize {
    match depth {
        0 => 1,
        1 => game.legal_moves().count(),
        d => game
            .legal_moves()
            .par_bridge()
            .map(|m| {
                let mut next = game.clone();
                next.play(m).unwrap();
                perft(&next, d - 1)
            })
            .sum(),
    }
}

fn game(board: Board, turn: Color) -> Game {
    let mut game = Game::new();
    game.set_board(board);
    game.set_turn(turn);
    game
}

#[cfg(not(tarpaulin))]
#[proptest(cases = 1)]
fn perft_expands_expected_number_of_nodes() {
    // https://www.chessprogramming.org/Perft_Results#Initial_Position
    let start = Game::new();
    assert_eq!(perft(&start, 1), 20);
    assert_eq!(perft(&start, 2), 400);
    assert_eq!(perft(&start, 3), 8902);
    assert_eq!(perft(&start, 4), 197281);

    // https://www.chessprogramming.org/Perft_Results#Position_3
    let pos = game("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8".parse()?, Color::White);
    assert_eq!(perft(&pos, 1), 14);
    assert_eq!(perft(&pos, 2), 191);

    // https://www.chessprogramming.org/Perft_Results#Position_4
    let pos = game("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1".parse()?, Color::White);
    assert_eq!(perft(&pos, 1), 6);
}
