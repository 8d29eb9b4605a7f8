use tictactoe_core::{BOARD_SIZE, Cell, Difficulty, GamePhase, Snapshot};

/// Draws one frame of the game as text.
pub fn frame(snapshot: &Snapshot) -> String {
    match snapshot.phase {
        GamePhase::NotStarted => splash(snapshot),
        GamePhase::InProgress | GamePhase::Finished => {
            let mut out = board(snapshot);
            if snapshot.phase.is_finished() {
                if snapshot.is_draw() {
                    out.push_str("\nTie\n");
                } else if let Some(player) = snapshot.winner {
                    out.push_str(&format!("\n{} Won\n", player));
                }
                out.push_str("New Game [n] Quit[q]\n");
            } else {
                out.push_str(&format!("\n{} to move\n", snapshot.current_player));
            }
            out
        }
    }
}

fn splash(snapshot: &Snapshot) -> String {
    let config = snapshot.config;
    let mut out = String::from("Welcome to Tic Tac Toe\n\n");
    if config.computer_moves_first() {
        out.push_str("Computer first [p,c]\n");
    } else {
        out.push_str("Human first [p,c]\n");
    }
    match config.difficulty {
        Difficulty::Hard => out.push_str("Hard Level [h,e]\n"),
        Difficulty::Easy => out.push_str("Easy Level [h,e]\n"),
    }
    out.push_str("\nPress the SpaceBar to Play\n");
    out
}

/// Grid with the winning line bracketed.
fn board(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        for col in 0..BOARD_SIZE {
            if col > 0 {
                out.push('|');
            }
            let glyph = match snapshot.cell_at((col, row)) {
                Cell::Empty => ' ',
                cell => cell.symbol(),
            };
            let highlighted = snapshot
                .winner_line
                .is_some_and(|line| line.contains((col, row)));
            let (open, close) = if highlighted { ('[', ']') } else { (' ', ' ') };
            out.push(open);
            out.push(glyph);
            out.push(close);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Command, GameConfig, GameSession, Player};

    #[test]
    fn splash_reflects_configuration() {
        let mut session = GameSession::with_seed(GameConfig::default(), 0);
        let text = frame(&Snapshot::from_session(&session));
        assert!(text.starts_with("Welcome to Tic Tac Toe"));
        assert!(text.contains("Computer first [p,c]"));
        assert!(text.contains("Hard Level [h,e]"));

        session.command(Command::HumanFirst);
        session.command(Command::SetDifficulty(Difficulty::Easy));
        let text = frame(&Snapshot::from_session(&session));
        assert!(text.contains("Human first [p,c]"));
        assert!(text.contains("Easy Level [h,e]"));
        assert!(text.contains("Press the SpaceBar to Play"));
    }

    #[test]
    fn finished_board_brackets_winning_line() {
        let config = GameConfig::new(Player::X, Player::O, Difficulty::Easy);
        let mut session = GameSession::with_seed(config, 0);
        session.command(Command::Start);
        for coords in [(0, 0), (0, 1), (0, 2)] {
            session.apply_move(coords, Player::X);
        }
        session.apply_move((1, 1), Player::O);
        session.check_end_of_game();

        let text = frame(&Snapshot::from_session(&session));

        assert_eq!(
            text,
            "[X]|   |   \n\
             ---+---+---\n\
             [X]| O |   \n\
             ---+---+---\n\
             [X]|   |   \n\
             \n\
             X Won\n\
             New Game [n] Quit[q]\n"
        );
    }

    #[test]
    fn full_board_without_line_shows_tie() {
        let config = GameConfig::new(Player::X, Player::O, Difficulty::Easy);
        let mut session = GameSession::with_seed(config, 0);
        session.command(Command::Start);
        for coords in [(0, 0), (2, 0), (0, 1), (1, 2), (2, 2)] {
            session.apply_move(coords, Player::X);
        }
        for coords in [(1, 0), (1, 1), (2, 1), (0, 2)] {
            session.apply_move(coords, Player::O);
        }
        session.check_end_of_game();

        let text = frame(&Snapshot::from_session(&session));

        assert!(text.ends_with("\nTie\nNew Game [n] Quit[q]\n"));
        assert!(!text.contains('['));
    }

    #[test]
    fn in_progress_board_shows_turn() {
        let config = GameConfig::new(Player::X, Player::O, Difficulty::Easy);
        let mut session = GameSession::with_seed(config, 0);
        session.command(Command::Start);

        let text = frame(&Snapshot::from_session(&session));

        assert!(text.ends_with("\nX to move\n"));
        assert!(!text.contains('['));
    }
}
