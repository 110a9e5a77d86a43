//! Console front end
//!
//! Drives menus, prompts and the turn loop over any `BufRead`/`Write` pair.
//! Humans type 1-based column and row numbers; malformed or out-of-range
//! input is re-prompted and never reaches the game.

use std::io::{BufRead, Write};

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::config::EngineConfig;
use crate::engine::AIEngine;
use crate::error::{GomokuError, Result};
use crate::game::{Game, GameOutcome, Player};

use super::board_view::render_board;

const AI_NAME: &str = "AI";

/// Entry in the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    HumanVsHuman,
    HumanVsAi,
    AiVsAi,
}

/// Text-mode Gomoku application
pub struct ConsoleApp<R, W> {
    input: R,
    output: W,
    engine_config: EngineConfig,
    board_size: usize,
}

impl<R: BufRead, W: Write> ConsoleApp<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            engine_config: EngineConfig::default(),
            board_size: BOARD_SIZE,
        }
    }

    #[must_use]
    pub fn with_engine_config(mut self, config: EngineConfig) -> Self {
        self.engine_config = config;
        self
    }

    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Show the main menu and play the chosen match to the end.
    pub fn run(&mut self) -> Result<GameOutcome> {
        self.render_main_menu()?;
        let choice = match self.prompt_number(1, 3, "Enter your choice between 1 and 3:")? {
            1 => MenuChoice::HumanVsHuman,
            2 => MenuChoice::HumanVsAi,
            _ => MenuChoice::AiVsAi,
        };
        self.run_choice(choice)
    }

    /// Set up players for `choice` and play the match to the end.
    pub fn run_choice(&mut self, choice: MenuChoice) -> Result<GameOutcome> {
        // Validate the size before asking for names
        let board = Board::with_size(self.board_size)?;

        let (first, second) = match choice {
            MenuChoice::HumanVsHuman => {
                let name = self.prompt_text("Enter Player 1 name: ")?;
                let color = self.prompt_color("Choose color for Player 1 [W, B]")?;
                let other = self.prompt_text("Enter Player 2 name: ")?;
                (Player::human(name, color), Player::human(other, color.opponent()))
            }
            MenuChoice::HumanVsAi => {
                let name = self.prompt_text("Enter Player 1 name: ")?;
                let color = self.prompt_color("Choose color for Player 1 [W, B]")?;
                (Player::human(name, color), Player::ai(AI_NAME, color.opponent()))
            }
            MenuChoice::AiVsAi => (
                Player::ai("AI 1", Stone::Black),
                Player::ai("AI 2", Stone::White),
            ),
        };

        let game = Game::new(board, first, second)?;
        self.play(game)
    }

    fn play(&mut self, mut game: Game) -> Result<GameOutcome> {
        let mut engine = AIEngine::with_config(self.engine_config);

        self.splitter('-', 35)?;
        writeln!(self.output, "Game mode {}", game.mode().title())?;
        self.splitter('-', 35)?;
        self.show_board(game.board())?;

        let outcome = loop {
            if let Some(outcome) = game.outcome() {
                break outcome;
            }

            let player = game.current_player();
            let (name, stone) = (player.name.clone(), player.stone);

            if player.is_ai() {
                writeln!(self.output, "{}'s turn ({})", name, stone)?;
                let pos = game.play_ai(&mut engine)?;
                let (column, row) = pos.to_one_based();
                writeln!(self.output, "{} plays column {} and row {}", name, column, row)?;
            } else {
                writeln!(self.output, "Player - {}'s turn ({})", name, stone)?;
                let size = game.board().size();
                let column = self.prompt_number(1, size, &format!("Choose column number (1 - {}) :", size))?;
                let row = self.prompt_number(1, size, &format!("Choose row number (1 - {}) :", size))?;
                let Some(pos) = Pos::from_one_based(column, row) else {
                    continue;
                };

                match game.play(pos) {
                    Ok(_) => {}
                    Err(GomokuError::Occupied { .. }) => {
                        self.splitter('-', 90)?;
                        writeln!(
                            self.output,
                            "The cell at column {} and row {} is already occupied. Please choose a different cell.",
                            column, row
                        )?;
                        self.splitter('-', 90)?;
                        writeln!(self.output, "Press Enter to continue...")?;
                        self.read_line()?;
                    }
                    Err(e) => return Err(e),
                }
            }

            self.show_board(game.board())?;
        };

        self.render_final_message(&game, outcome)?;
        self.output.flush()?;
        Ok(outcome)
    }

    fn render_main_menu(&mut self) -> Result<()> {
        self.splitter('-', 35)?;
        writeln!(self.output, "Welcome to the Gomoku game")?;
        writeln!(self.output, "1. Human VS Human")?;
        writeln!(self.output, "2. Human VS AI")?;
        writeln!(self.output, "3. AI VS AI")?;
        self.splitter('-', 35)
    }

    fn render_final_message(&mut self, game: &Game, outcome: GameOutcome) -> Result<()> {
        self.splitter('-', 35)?;
        match (outcome, game.winner()) {
            (GameOutcome::Win { .. }, Some(winner)) => {
                writeln!(self.output, "Player {} has won!", winner.name)?;
            }
            _ => writeln!(self.output, "The game has ended in a tie. No winner this time!")?,
        }
        self.splitter('-', 35)
    }

    fn show_board(&mut self, board: &Board) -> Result<()> {
        write!(self.output, "{}", render_board(board))?;
        Ok(())
    }

    fn splitter(&mut self, symbol: char, count: usize) -> Result<()> {
        writeln!(self.output, "{}", symbol.to_string().repeat(count))?;
        Ok(())
    }

    /// Next input line with surrounding whitespace removed
    fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GomokuError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn prompt_number(&mut self, min: usize, max: usize, msg: &str) -> Result<usize> {
        loop {
            writeln!(self.output, "{}", msg)?;
            match self.read_line()?.parse::<usize>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(n),
                _ => writeln!(
                    self.output,
                    "Invalid input! Please choose options between {} and {}",
                    min, max
                )?,
            }
        }
    }

    fn prompt_text(&mut self, msg: &str) -> Result<String> {
        loop {
            writeln!(self.output, "{}", msg)?;
            let input = self.read_line()?;
            if !input.is_empty() {
                return Ok(input);
            }
        }
    }

    fn prompt_color(&mut self, msg: &str) -> Result<Stone> {
        loop {
            writeln!(self.output, "{}", msg)?;
            let input = self.read_line()?;
            let mut chars = input.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if let Some(stone) = Stone::from_symbol(c) {
                    return Ok(stone);
                }
            }
            writeln!(self.output, "Invalid input! Please chose options W or B")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run the app on `input`, returning its result and everything it printed.
    fn drive(
        input: &str,
        config: EngineConfig,
        board_size: usize,
        choice: Option<MenuChoice>,
    ) -> (Result<GameOutcome>, String) {
        let mut output = Vec::new();
        let result = {
            let mut app = ConsoleApp::new(input.as_bytes(), &mut output)
                .with_engine_config(config)
                .with_board_size(board_size);
            match choice {
                Some(choice) => app.run_choice(choice),
                None => app.run(),
            }
        };
        (result, String::from_utf8(output).unwrap())
    }

    /// Column/row lines for alternating moves
    fn moves(cells: &[(usize, usize)]) -> String {
        cells.iter().map(|(c, r)| format!("{}\n{}\n", c, r)).collect()
    }

    #[test]
    fn test_human_vs_human_win() {
        let mut input = String::from("1\nAlice\nB\nBob\n");
        input += &moves(&[
            (1, 1),
            (1, 9),
            (2, 1),
            (2, 9),
            (3, 1),
            (3, 9),
            (4, 1),
            (4, 9),
            (5, 1),
        ]);

        let (result, output) = drive(&input, EngineConfig::default(), BOARD_SIZE, None);
        let outcome = result.unwrap();
        assert!(matches!(
            outcome,
            GameOutcome::Win {
                winner: Stone::Black,
                ..
            }
        ));
        assert!(output.contains("Welcome to the Gomoku game"));
        assert!(output.contains("Game mode Human vs Human"));
        assert!(output.contains("Player - Alice's turn (B)"));
        assert!(output.contains("Player - Bob's turn (W)"));
        assert!(output.contains("1 | B B B B B _ _ _ _ "));
        assert!(output.contains("Player Alice has won!"));
    }

    #[test]
    fn test_white_choice_moves_second() {
        let mut input = String::from("1\nAlice\nW\nBob\n");
        input += &moves(&[(5, 5)]);
        let (result, output) = drive(&input, EngineConfig::default(), BOARD_SIZE, None);

        assert!(matches!(result, Err(GomokuError::InputClosed)));
        assert!(output.contains("Player - Bob's turn (B)"));
        assert!(output.contains("Player - Alice's turn (W)"));
    }

    #[test]
    fn test_invalid_input_is_reprompted() {
        let input = "x\n7\n1\n\nAlice\nG\nWB\nw\nBob\n0\n10\n3\n4\n";
        let (result, output) = drive(input, EngineConfig::default(), BOARD_SIZE, None);

        // Input runs out waiting for the next move
        assert!(matches!(result, Err(GomokuError::InputClosed)));
        assert_eq!(
            output.matches("Invalid input! Please choose options between 1 and 3").count(),
            2
        );
        assert_eq!(output.matches("Invalid input! Please chose options W or B").count(), 2);
        assert_eq!(
            output.matches("Invalid input! Please choose options between 1 and 9").count(),
            2
        );
        // Bob is Black and played column 3, row 4
        assert!(output.contains("4 | _ _ B _ _ _ _ _ _ "));
        assert!(output.contains("Player - Alice's turn (W)"));
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut input = String::from("1\nAlice\nB\nBob\n");
        input += &moves(&[(5, 5), (5, 5)]);
        input += "\n";
        input += &moves(&[(6, 6)]);

        let (result, output) = drive(&input, EngineConfig::default(), BOARD_SIZE, None);
        assert!(matches!(result, Err(GomokuError::InputClosed)));
        assert!(output.contains(
            "The cell at column 5 and row 5 is already occupied. Please choose a different cell."
        ));
        assert!(output.contains("6 | _ _ _ _ _ W _ _ _ "));
    }

    #[test]
    fn test_human_vs_ai_opening_reply() {
        let mut input = String::from("2\nAlice\nW\n");
        input += &moves(&[(1, 1)]);
        let config = EngineConfig::default().with_max_depth(2);

        let (result, output) = drive(&input, config, BOARD_SIZE, None);
        assert!(matches!(result, Err(GomokuError::InputClosed)));
        assert!(output.contains("Game mode Human vs AI"));
        assert!(output.contains("AI's turn (B)"));
        // Empty board: the AI opens in the centre
        assert!(output.contains("AI plays column 5 and row 5"));
        assert!(output.contains("Player - Alice's turn (W)"));
    }

    #[test]
    fn test_ai_vs_ai_small_board() {
        let config = EngineConfig::default().with_max_depth(2);
        let (result, output) = drive("", config, 5, Some(MenuChoice::AiVsAi));

        let outcome = result.unwrap();
        assert!(output.contains("Game mode AI vs AI"));
        assert!(output.contains("AI 1's turn (B)"));
        match outcome {
            GameOutcome::Win { .. } => assert!(output.contains("has won!")),
            GameOutcome::Tie => assert!(output.contains("ended in a tie")),
        }
    }

    #[test]
    fn test_unsupported_board_size() {
        let (result, _) = drive("", EngineConfig::default(), 20, Some(MenuChoice::AiVsAi));
        assert!(matches!(
            result,
            Err(GomokuError::UnsupportedBoardSize { size: 20, .. })
        ));
    }
}
