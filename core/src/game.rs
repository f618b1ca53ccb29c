use serde::{Deserialize, Serialize};

use crate::*;

/// Number of scoreboard lines shown on screen.
pub const SCOREBOARD_ROWS: usize = 24;

/// Input events delivered by the host once per frame.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Input {
    /// Left click at a pointer position, y measured from the top
    Primary { x: f32, y: f32 },
    /// Right click at a pointer position, y measured from the top
    Secondary { x: f32, y: f32 },
    /// Restart key
    Restart,
}

/// Board plus the viewport it is drawn in, the entry point for a render loop.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    viewport: Viewport,
}

impl Game {
    pub fn new(board: Board, viewport: Viewport) -> Self {
        Self { board, viewport }
    }

    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(Board::from_difficulty(difficulty), Viewport::default())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layout(&self) -> Layout {
        self.viewport.layout(self.board.size())
    }

    pub fn locate(&self, x: f32, y: f32) -> Option<Location> {
        self.viewport.locate(self.board.size(), x, y)
    }

    /// Applies one input, returns whether the board changed.
    ///
    /// Clicks are only taken while the game is running, restart only once it has ended.
    pub fn handle(&mut self, input: Input) -> bool {
        let status = self.board.status();
        match input {
            Input::Primary { x, y } if !status.is_finished() => {
                let Some(location) = self.locate(x, y) else {
                    log::trace!("Click outside the board at ({}, {})", x, y);
                    return false;
                };
                match self.board.reveal(location) {
                    Ok(outcome) => outcome.has_update(),
                    Err(err) => {
                        log::debug!("Reveal at {:?} ignored: {}", location, err);
                        false
                    }
                }
            }
            Input::Secondary { x, y } if !status.is_finished() => {
                let Some(location) = self.locate(x, y) else {
                    log::trace!("Click outside the board at ({}, {})", x, y);
                    return false;
                };
                match self.board.toggle_flag(location) {
                    Ok(outcome) => outcome.has_update(),
                    Err(err) => {
                        log::debug!("Flag at {:?} ignored: {}", location, err);
                        false
                    }
                }
            }
            Input::Restart if status.is_finished() => {
                self.board.reset();
                true
            }
            _ => false,
        }
    }

    pub fn hud(&mut self) -> Hud {
        let status = self.board.status();
        Hud {
            status,
            flags_remaining: self.board.mines_left(),
            time: self.board.time_display(),
            banner: Hud::banner_for(status),
            scores: self
                .board
                .scoreboard()
                .top(SCOREBOARD_ROWS)
                .into_iter()
                .enumerate()
                .map(|(i, time)| format!("{}. {}", i + 1, format_time(time)))
                .collect(),
        }
    }
}

/// Text overlay drawn around the board each frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub status: GameStatus,
    pub flags_remaining: isize,
    pub time: String,
    pub banner: Vec<&'static str>,
    /// Fastest first, numbered from 1
    pub scores: Vec<String>,
}

impl Hud {
    fn banner_for(status: GameStatus) -> Vec<&'static str> {
        match status {
            GameStatus::NotStarted => vec!["Left mouse to start."],
            GameStatus::InProgress => vec![],
            GameStatus::Lost => vec!["Game over. Loss.", "R to restart."],
            GameStatus::Won => vec!["Game over. Victory.", "R to restart."],
        }
    }

    pub fn flags_label(&self) -> String {
        format!("Flags Remaining: {}", self.flags_remaining)
    }

    pub fn time_label(&self) -> String {
        format!("Time Elapsed:  {}", self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pointer position at the center of a cell.
    fn pointer(game: &Game, row: Coord, col: Coord) -> (f32, f32) {
        let layout = game.layout();
        let (x, y) = layout.cell_origin(Location::new(row, col));
        let half = layout.scale / 2.;
        (x + half, game.viewport().world_height - (y + half))
    }

    fn click(game: &mut Game, row: Coord, col: Coord) -> bool {
        let (x, y) = pointer(game, row, col);
        game.handle(Input::Primary { x, y })
    }

    fn right_click(game: &mut Game, row: Coord, col: Coord) -> bool {
        let (x, y) = pointer(game, row, col);
        game.handle(Input::Secondary { x, y })
    }

    fn small_game() -> Game {
        let config = BoardConfig::new(2, 2, 1).unwrap();
        let mut game = Game::new(Board::with_seed(config, 3), Viewport::default());
        let layout = MineLayout::from_mine_locations((2, 2), &[Location::new(0, 0)]).unwrap();
        game.board_mut().start_with(Location::new(1, 1), layout).unwrap();
        game
    }

    #[test]
    fn first_click_starts_game() {
        let mut game = Game::from_difficulty(Difficulty::Easy);
        assert_eq!(game.hud().banner, vec!["Left mouse to start."]);

        assert!(click(&mut game, 4, 4));

        let hud = game.hud();
        assert_eq!(hud.status, GameStatus::InProgress);
        assert!(hud.banner.is_empty());
        assert_eq!(hud.flags_label(), "Flags Remaining: 10");
    }

    #[test]
    fn clicks_outside_board_are_ignored() {
        let mut game = Game::from_difficulty(Difficulty::Easy);

        assert!(!game.handle(Input::Primary { x: 5., y: 5. }));
        assert!(!game.handle(Input::Secondary { x: 5., y: 5. }));
        assert_eq!(game.board().last_status(), GameStatus::NotStarted);
    }

    #[test]
    fn right_click_toggles_flag() {
        let mut game = small_game();

        assert!(right_click(&mut game, 0, 1));
        assert_eq!(game.hud().flags_remaining, 0);
        assert!(right_click(&mut game, 0, 1));
        assert_eq!(game.hud().flags_remaining, 1);
    }

    #[test]
    fn restart_only_after_game_end() {
        let mut game = small_game();

        assert!(!game.handle(Input::Restart));
        assert!(click(&mut game, 0, 0));

        let hud = game.hud();
        assert_eq!(hud.status, GameStatus::Lost);
        assert_eq!(hud.banner, vec!["Game over. Loss.", "R to restart."]);
        assert!(!click(&mut game, 1, 1));

        assert!(game.handle(Input::Restart));
        assert_eq!(game.hud().status, GameStatus::NotStarted);
    }

    #[test]
    fn win_lists_time_on_scoreboard() {
        let mut game = small_game();
        click(&mut game, 0, 1);
        click(&mut game, 1, 0);
        click(&mut game, 1, 1);
        right_click(&mut game, 0, 0);

        let hud = game.hud();
        assert_eq!(hud.status, GameStatus::Won);
        assert_eq!(hud.banner, vec!["Game over. Victory.", "R to restart."]);
        assert_eq!(hud.scores, vec!["1. 0:00".to_string()]);
        assert_eq!(hud.time_label(), "Time Elapsed:  0:00");
    }
}
