use rover::ai::{MonteCarloPlayer, Player, PlayerOptions, RandomPlayer};
use rover::core::{Board, GridBoard};

fn quick_options() -> PlayerOptions {
    PlayerOptions {
        playouts: 4,
        max_steps: 25,
        ..Default::default()
    }
}

#[test]
fn test_players_agree_on_a_forced_move() {
    // Only one cell is reachable from the corner
    let board = GridBoard::from_fen("3 0,0 0,2,3,4,5,6,7,8").unwrap();
    let forced = board.legal_moves()[0];

    let mut monte_carlo = MonteCarloPlayer::with_seed(quick_options(), 11);
    let mut random = RandomPlayer::with_seed(11);

    assert_eq!(monte_carlo.next_move(&board), Some(forced));
    assert_eq!(random.next_move(&board), Some(forced));
}

#[test]
fn test_monte_carlo_plays_a_full_game() {
    let mut board = GridBoard::new(5);
    let mut player = MonteCarloPlayer::with_seed(quick_options(), 3);

    let mut turns = 0;
    while let Some(mv) = player.next_move(&board) {
        assert!(board.apply_move(mv), "chosen move must be legal");
        turns += 1;
        assert!(turns <= 25, "a 5x5 game cannot outlast the board");
    }

    assert!(board.is_over());
    assert_eq!(board.coverage(), turns + 1);
}

#[test]
fn test_coverage_never_decreases_during_play() {
    let mut board = GridBoard::new(6);
    let mut player = RandomPlayer::with_seed(8);

    let mut last = board.coverage();
    while let Some(mv) = player.next_move(&board) {
        board.apply_move(mv);
        assert!(board.coverage() >= last);
        last = board.coverage();
    }
}
