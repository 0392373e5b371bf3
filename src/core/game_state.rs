use serde::{Deserialize, Serialize};

use super::{DISK_COUNT, PEG_COUNT, TARGET_PEG};
use crate::error::{GameError, MoveViolation};

/// Arrangement of disks on the three pegs
///
/// Each peg lists disk sizes from bottom to top, so the last element is the
/// only disk that can be moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Disk stacks for pegs 0, 1 and 2
    pub pegs: [Vec<u8>; PEG_COUNT],
    /// Whether every disk has reached the target peg
    pub completed: bool,
    /// Number of moves applied since the last reset
    pub moves: u64,
}

impl GameState {
    /// Create the starting position: every disk on peg 0, largest at the bottom
    pub fn new() -> Self {
        let first_peg = (1..=DISK_COUNT as u8).rev().collect();

        Self {
            pegs: [first_peg, Vec::new(), Vec::new()],
            completed: false,
            moves: 0,
        }
    }

    /// Top disk of a peg, if any
    pub fn top(&self, peg: usize) -> Option<u8> {
        self.pegs.get(peg).and_then(|stack| stack.last().copied())
    }

    /// Whether the target peg holds the full tower
    pub fn is_solved(&self) -> bool {
        self.pegs[TARGET_PEG].len() == DISK_COUNT
    }

    /// Move the top disk of `from` onto `to`
    ///
    /// # Errors
    ///
    /// Returns an error without touching the state if the game is over, a peg
    /// index is out of range, or the move breaks the rules.
    pub fn apply_move(&mut self, from: usize, to: usize) -> Result<(), GameError> {
        if from >= PEG_COUNT {
            return Err(GameError::InvalidPeg {
                name: "from",
                value: from.to_string(),
            });
        }
        if to >= PEG_COUNT {
            return Err(GameError::InvalidPeg {
                name: "to",
                value: to.to_string(),
            });
        }

        if self.completed {
            return Err(GameError::GameOver);
        }

        let disk = self.top(from).ok_or(MoveViolation::EmptySource)?;

        if from == to {
            return Err(MoveViolation::SamePeg.into());
        }

        if self.top(to).is_some_and(|target| disk > target) {
            return Err(MoveViolation::LargerOnSmaller.into());
        }

        self.pegs[from].pop();
        self.pegs[to].push(disk);
        self.moves += 1;

        if self.is_solved() {
            self.completed = true;
        }

        Ok(())
    }

    /// Check the structural invariants of the board
    ///
    /// Returns `Err(message)` describing the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = [false; DISK_COUNT];

        for (index, peg) in self.pegs.iter().enumerate() {
            for &disk in peg {
                if disk == 0 || disk as usize > DISK_COUNT {
                    return Err(format!("peg {} holds unknown disk {}", index, disk));
                }
                let slot = &mut seen[disk as usize - 1];
                if *slot {
                    return Err(format!("disk {} appears more than once", disk));
                }
                *slot = true;
            }

            if peg.windows(2).any(|pair| pair[0] <= pair[1]) {
                return Err(format!("peg {} is not ordered largest to smallest", index));
            }
        }

        if let Some(missing) = seen.iter().position(|present| !present) {
            return Err(format!("disk {} is missing", missing + 1));
        }

        if self.completed != self.is_solved() {
            return Err(format!(
                "completed flag is {} but target peg holds {} disks",
                self.completed,
                self.pegs[TARGET_PEG].len()
            ));
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(pegs: [Vec<u8>; PEG_COUNT]) -> GameState {
        GameState {
            pegs,
            completed: false,
            moves: 0,
        }
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();

        assert_eq!(state.pegs[0], vec![7, 6, 5, 4, 3, 2, 1]);
        assert!(state.pegs[1].is_empty());
        assert!(state.pegs[2].is_empty());
        assert!(!state.completed);
        assert_eq!(state.moves, 0);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_move_onto_empty_peg() {
        let mut state = state_with([vec![7, 6, 5, 4, 3, 2], vec![], vec![1]]);

        state.apply_move(2, 1).unwrap();

        assert_eq!(
            state.pegs,
            [vec![7, 6, 5, 4, 3, 2], vec![1], Vec::<u8>::new()]
        );
        assert_eq!(state.moves, 1);
    }

    #[test]
    fn test_larger_on_smaller_rejected() {
        let mut state = state_with([vec![7, 6, 5, 4, 3], vec![2], vec![1]]);
        let before = state.clone();

        let err = state.apply_move(0, 1).unwrap_err();

        assert_eq!(err, GameError::InvalidMove(MoveViolation::LargerOnSmaller));
        assert_eq!(state, before);
    }

    #[test]
    fn test_empty_source_rejected() {
        let mut state = GameState::new();

        let err = state.apply_move(1, 2).unwrap_err();

        assert_eq!(err, GameError::InvalidMove(MoveViolation::EmptySource));
        assert_eq!(state.moves, 0);
    }

    #[test]
    fn test_same_peg_rejected() {
        let mut state = GameState::new();

        let err = state.apply_move(0, 0).unwrap_err();

        assert_eq!(err, GameError::InvalidMove(MoveViolation::SamePeg));
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_out_of_range_peg_rejected() {
        let mut state = GameState::new();

        assert!(matches!(
            state.apply_move(3, 1),
            Err(GameError::InvalidPeg { name: "from", .. })
        ));
        assert!(matches!(
            state.apply_move(0, 7),
            Err(GameError::InvalidPeg { name: "to", .. })
        ));
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_final_move_completes_game() {
        let mut state = state_with([vec![1], vec![], vec![7, 6, 5, 4, 3, 2]]);
        state.moves = 126;

        state.apply_move(0, 2).unwrap();

        assert!(state.completed);
        assert_eq!(state.moves, 127);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_move_after_completion_rejected() {
        let mut state = state_with([vec![], vec![], vec![7, 6, 5, 4, 3, 2, 1]]);
        state.completed = true;
        let before = state.clone();

        assert_eq!(state.apply_move(2, 0), Err(GameError::GameOver));
        assert_eq!(state, before);
    }

    #[test]
    fn test_validate_detects_missing_disk() {
        let state = state_with([vec![7, 6, 5, 4, 3, 2], vec![], vec![]]);
        assert_eq!(state.validate().unwrap_err(), "disk 1 is missing");
    }

    #[test]
    fn test_validate_detects_duplicate_disk() {
        let state = state_with([vec![7, 6, 5, 4, 3, 2, 1], vec![1], vec![]]);
        assert!(state.validate().unwrap_err().contains("more than once"));
    }

    #[test]
    fn test_validate_detects_bad_order() {
        let state = state_with([vec![7, 6, 5, 4, 3, 1], vec![2], vec![]]);
        assert!(state.validate().is_ok());

        let state = state_with([vec![7, 6, 5, 4, 1, 3], vec![2], vec![]]);
        assert!(state.validate().unwrap_err().contains("not ordered"));
    }

    #[test]
    fn test_validate_detects_unknown_disk() {
        let state = state_with([vec![8, 7, 6, 5, 4, 3, 2, 1], vec![], vec![]]);
        assert!(state.validate().unwrap_err().contains("unknown disk 8"));
    }

    #[test]
    fn test_validate_detects_inconsistent_completion() {
        let mut state = GameState::new();
        state.completed = true;
        assert!(state.validate().unwrap_err().contains("completed flag"));
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(GameState::new()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "pegs": [[7, 6, 5, 4, 3, 2, 1], [], []],
                "completed": false,
                "moves": 0
            })
        );
    }
}
