//! Game State Machine
//!
//! Tracks whether an attempt is running or over. Collision freezes the world,
//! only an explicit restart resumes it.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Playing,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Crash,
    Restart,
}

/// Result of a state transition
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: GameState,
    pub to_state: GameState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct GameFsm {
    state: GameState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Attempt a transition; rejected actions leave the state unchanged
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    /// Apply `action`, logging the outcome. Returns whether the state changed.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let result = self.transition(action);
        if result.success {
            log::debug!(
                "{:?}: {:?} -> {:?}",
                result.action,
                result.from_state,
                result.to_state
            );
        } else {
            log::warn!("Ignored {:?} while {:?}", result.action, result.from_state);
        }
        result.success
    }

    fn get_next_state(&self, action: GameAction) -> Option<GameState> {
        match (self.state, action) {
            (GameState::Playing, GameAction::Crash) => Some(GameState::GameOver),
            (GameState::GameOver, GameAction::Restart) => Some(GameState::Playing),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), GameState::Playing);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_crash_then_restart() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Crash);
        assert!(result.success);
        assert_eq!(result.from_state, GameState::Playing);
        assert_eq!(result.to_state, GameState::GameOver);
        assert!(fsm.is_game_over());

        let result = fsm.transition(GameAction::Restart);
        assert!(result.success);
        assert_eq!(fsm.state(), GameState::Playing);
    }

    #[test]
    fn test_invalid_transitions() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Restart);
        assert!(!result.success);
        assert_eq!(result.action, GameAction::Restart);
        assert_eq!(fsm.state(), GameState::Playing);

        assert!(fsm.apply(GameAction::Crash));
        let result = fsm.transition(GameAction::Crash);
        assert!(!result.success);
        assert_eq!(result.from_state, GameState::GameOver);
        assert_eq!(result.to_state, GameState::GameOver);
    }

    #[test]
    fn test_apply_reports_whether_state_changed() {
        let mut fsm = GameFsm::new();
        assert!(!fsm.apply(GameAction::Restart));
        assert!(fsm.is_playing());

        assert!(fsm.apply(GameAction::Crash));
        assert!(fsm.is_game_over());
        assert!(!fsm.apply(GameAction::Crash), "Already over");

        assert!(fsm.apply(GameAction::Restart));
        assert!(fsm.is_playing());
    }
}
