use core::time::Duration;
use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - InProgress -> Lost
/// - InProgress -> Won
/// - any -> NotStarted (reset)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the first reveal, no mines placed yet
    #[default]
    NotStarted,
    InProgress,
    Lost,
    Won,
}

impl GameStatus {
    /// Numeric status code used next to the integer cell codes.
    pub const fn code(self) -> i8 {
        match self {
            Self::NotStarted => 0,
            Self::InProgress => 1,
            Self::Lost => -1,
            Self::Won => 2,
        }
    }

    pub const fn is_ready(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_active(self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Owns the grid, counters, status and timer of a minesweeper game.
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    cells: Array2<Cell>,
    flagged_count: CellCount,
    status: GameStatus,
    started_at: Option<Instant>,
    finish_time: Option<Duration>,
    scoreboard: Scoreboard,
    rng: SmallRng,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self::with_rng(config, SmallRng::from_os_rng())
    }

    /// Board whose mine layouts are reproducible.
    pub fn with_seed(config: BoardConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.config())
    }

    fn with_rng(config: BoardConfig, rng: SmallRng) -> Self {
        Self {
            config,
            cells: Array2::default(config.size_nd()),
            flagged_count: 0,
            status: GameStatus::NotStarted,
            started_at: None,
            finish_time: None,
            scoreboard: Scoreboard::new(),
            rng,
        }
    }

    /// Reallocates the grid for a new configuration, the scoreboard is kept.
    pub fn initialize(&mut self, config: BoardConfig) {
        log::debug!(
            "Initializing {}x{} board with {} mines",
            config.rows,
            config.cols,
            config.mines
        );
        self.config = config;
        self.cells = Array2::default(config.size_nd());
        self.reset();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.initialize(difficulty.config());
    }

    /// Covers and clears every cell, keeping size and mine target.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
        self.flagged_count = 0;
        self.status = GameStatus::NotStarted;
        self.started_at = None;
        self.finish_time = None;
        log::debug!("Board reset");
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> (Coord, Coord) {
        self.config.size()
    }

    pub fn rows(&self) -> Coord {
        self.config.rows
    }

    pub fn cols(&self) -> Coord {
        self.config.cols
    }

    /// Mines on the board once started, the requested count before that.
    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn mines_left(&self) -> isize {
        (self.config.mines as isize) - (self.flagged_count as isize)
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Current status, declaring the win first if the board has just been cleared.
    pub fn status(&mut self) -> GameStatus {
        self.check_won();
        self.status
    }

    /// Current status without running win detection.
    pub fn last_status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn cell(&self, location: Location) -> Result<Cell> {
        let location = self.validate(location)?;
        Ok(self.cells[location.to_nd_index()])
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Snapshot of the grid as integer cell codes.
    pub fn cell_codes(&self) -> Array2<i8> {
        self.cells.map(|cell| cell.code())
    }

    pub fn is_valid(&self, location: Location) -> bool {
        location.row < self.config.rows && location.col < self.config.cols
    }

    pub fn validate(&self, location: Location) -> Result<Location> {
        if self.is_valid(location) {
            Ok(location)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Final time once the game ended, running time while in progress, zero otherwise.
    pub fn elapsed(&self) -> Duration {
        match self.status {
            GameStatus::Won | GameStatus::Lost => self.finish_time.unwrap_or_default(),
            GameStatus::InProgress => self
                .started_at
                .map(|started_at| started_at.elapsed())
                .unwrap_or_default(),
            GameStatus::NotStarted => Duration::ZERO,
        }
    }

    pub fn time_display(&self) -> String {
        format_time(self.elapsed())
    }

    /// Places mines around `start` using the board's own random source.
    pub fn start(&mut self, start: Location) -> Result<()> {
        let seed = self.rng.random();
        self.start_with(start, RandomMineGenerator::new(seed))
    }

    pub fn start_with(&mut self, start: Location, generator: impl MineGenerator) -> Result<()> {
        let start = self.validate(start)?;
        if !self.status.is_ready() {
            return Err(GameError::AlreadyStarted);
        }

        let layout = generator.generate(self.config, start)?;
        for ((row, col), cell) in self.cells.indexed_iter_mut() {
            let location = Location::new(row as Coord, col as Coord);
            *cell = if layout.contains_mine(location) {
                Cell::with_mine()
            } else {
                Cell::with_count(layout.adjacent_mine_count(location))
            };
        }

        if layout.mine_count() != self.config.mines {
            log::debug!(
                "Mine count adjusted from {} to {}",
                self.config.mines,
                layout.mine_count()
            );
        }
        self.config.mines = layout.mine_count();
        self.status = GameStatus::InProgress;
        self.started_at = Some(Instant::now());
        log::debug!("Started at {:?} with {} mines", start, self.config.mines);
        Ok(())
    }

    /// Uncovers a cell, starting the game on the first call.
    pub fn reveal(&mut self, location: Location) -> Result<RevealOutcome> {
        let location = self.validate(location)?;
        self.check_not_finished()?;

        if self.status.is_ready() {
            self.start(location)?;
        }

        let cell = self.cells[location.to_nd_index()];
        if !cell.is_hidden() {
            return Ok(RevealOutcome::NoChange);
        }

        if cell.is_mine() {
            self.finish(GameStatus::Lost);
            self.expose_all();
            return Ok(RevealOutcome::HitMine);
        }

        if cell.adjacent_mines() == 0 {
            let opened = self.flood_reveal(location);
            log::trace!("Flood from {:?} opened {} cells", location, opened);
        } else {
            self.cells[location.to_nd_index()].uncover();
        }

        Ok(if self.check_won() {
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        })
    }

    /// Flags a covered cell or removes an existing flag.
    pub fn toggle_flag(&mut self, location: Location) -> Result<MarkOutcome> {
        let location = self.validate(location)?;
        self.check_active()?;

        let cell = &mut self.cells[location.to_nd_index()];
        let outcome = if cell.is_revealed() {
            return Ok(MarkOutcome::NoChange);
        } else if cell.is_flagged() {
            cell.set_flag(false);
            self.flagged_count -= 1;
            MarkOutcome::Unflagged
        } else {
            cell.set_flag(true);
            self.flagged_count += 1;
            MarkOutcome::Flagged
        };

        Ok(if self.check_won() {
            MarkOutcome::Won
        } else {
            outcome
        })
    }

    /// Opens the zero region around `start` and its numbered border, returns cells opened.
    fn flood_reveal(&mut self, start: Location) -> usize {
        self.cells[start.to_nd_index()].uncover();
        let mut opened = 1;
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            for neighbor in self.cells.iter_neighbors(current) {
                let cell = &mut self.cells[neighbor.to_nd_index()];
                if !cell.is_hidden() || cell.is_mine() {
                    continue;
                }

                cell.uncover();
                opened += 1;
                log::trace!("Flood opened {:?} ({})", neighbor, cell.adjacent_mines());

                if cell.adjacent_mines() == 0 {
                    stack.push(neighbor);
                }
            }
        }

        opened
    }

    /// Every mine flagged by exactly as many flags, and every safe cell uncovered.
    fn check_won(&mut self) -> bool {
        if !self.status.is_active() || self.flagged_count != self.config.mines {
            return false;
        }

        let cleared = self
            .cells
            .iter()
            .all(|cell| cell.is_mine() || cell.is_revealed());
        if cleared {
            self.finish(GameStatus::Won);
        }
        cleared
    }

    fn finish(&mut self, status: GameStatus) {
        if !self.status.is_active() {
            return;
        }

        let finish_time = self
            .started_at
            .map(|started_at| started_at.elapsed())
            .unwrap_or_default();
        self.finish_time = Some(finish_time);
        self.status = status;
        if status == GameStatus::Won {
            self.scoreboard.record(finish_time);
        }
        log::debug!("Game ended {:?} after {:?}", status, finish_time);
    }

    fn expose_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.expose();
        }
    }

    fn check_active(&self) -> Result<()> {
        match self.status {
            GameStatus::InProgress => Ok(()),
            GameStatus::NotStarted => Err(GameError::NotStarted),
            GameStatus::Won | GameStatus::Lost => Err(GameError::AlreadyEnded),
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

impl BoardConfig {
    fn size_nd(&self) -> (usize, usize) {
        (self.rows.into(), self.cols.into())
    }
}
