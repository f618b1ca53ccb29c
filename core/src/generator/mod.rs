use crate::*;
pub use random::*;

mod random;

/// Decides where the mines of a new game go, given the first revealed cell.
pub trait MineGenerator {
    fn generate(self, config: BoardConfig, start: Location) -> Result<MineLayout>;
}

/// A fixed layout is used as-is, the start cell is not protected.
impl MineGenerator for MineLayout {
    fn generate(self, config: BoardConfig, _start: Location) -> Result<MineLayout> {
        if self.size() == config.size() {
            Ok(self)
        } else {
            Err(GameError::InvalidLayout)
        }
    }
}
