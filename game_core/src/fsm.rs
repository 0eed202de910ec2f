//! Game State Machine
//!
//! MENU -> PLAYING -> GAME_OVER, with a way back to the menu.

use serde::{Deserialize, Serialize};

use crate::config::Difficulty;
use crate::Side;

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    Menu,
    Playing,
    GameOver,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::Menu => "MENU",
            GameState::Playing => "PLAYING",
            GameState::GameOver => "GAME_OVER",
        }
    }
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    GameOver,
    ReturnToMenu,
}

/// Payload carried into PLAYING
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartPayload {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub auto_left: bool,
}

impl StartPayload {
    pub fn new(difficulty: Difficulty, auto_left: bool) -> Self {
        Self {
            difficulty,
            auto_left,
        }
    }
}

/// Final result of a finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub winner: Side,
    pub left: u8,
    pub right: u8,
}

impl MatchResult {
    pub fn title(&self) -> &'static str {
        match self.winner {
            Side::Left => "Game Over: Left Wins!",
            Side::Right => "Game Over: Right Wins!",
        }
    }
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: GameState,
    pub to_state: GameState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: GameState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: GameState::Menu,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                log::info!("state {} -> {}", from_state.as_str(), next_state.as_str());
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => {
                log::warn!("ignored {action:?} in state {}", from_state.as_str());
                TransitionResult {
                    success: false,
                    from_state,
                    to_state: from_state,
                    action,
                }
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<GameState> {
        match (self.state, action) {
            (GameState::Menu, GameAction::Start) => Some(GameState::Playing),

            (GameState::Playing, GameAction::GameOver) => Some(GameState::GameOver),
            (GameState::Playing, GameAction::ReturnToMenu) => Some(GameState::Menu),

            (GameState::GameOver, GameAction::Start) => Some(GameState::Playing),
            (GameState::GameOver, GameAction::ReturnToMenu) => Some(GameState::Menu),

            // Invalid transition
            _ => None,
        }
    }

    /// Check if the simulation should run
    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), GameState::Menu);
        assert!(!fsm.is_playing());
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Start);
        assert!(result.success);
        assert_eq!(result.from_state, GameState::Menu);
        assert_eq!(result.to_state, GameState::Playing);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = GameFsm::new();
        assert!(!fsm.can_transition(GameAction::GameOver));
        let result = fsm.transition(GameAction::GameOver);
        assert!(!result.success);
        assert_eq!(fsm.state(), GameState::Menu);
    }

    #[test]
    fn test_cannot_start_while_playing() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        let result = fsm.transition(GameAction::Start);
        assert!(!result.success);
        assert_eq!(fsm.state(), GameState::Playing);
    }

    #[test]
    fn test_full_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::GameOver);
        assert!(fsm.is_game_over());
        fsm.transition(GameAction::ReturnToMenu);
        assert_eq!(fsm.state(), GameState::Menu);
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::GameOver);
        fsm.transition(GameAction::Start);
        assert_eq!(fsm.state(), GameState::Playing, "Restart straight from game over");
    }

    #[test]
    fn test_payload_from_json() {
        let payload: StartPayload =
            serde_json::from_str(r#"{"difficulty":"hard","autoLeft":true}"#).unwrap();
        assert_eq!(payload, StartPayload::new(Difficulty::Hard, true));

        let payload: StartPayload =
            serde_json::from_str(r#"{"difficulty":"insane","autoLeft":false}"#).unwrap();
        assert_eq!(payload.difficulty, Difficulty::Normal, "Unknown keys fall back");

        let payload: StartPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload, StartPayload::default());
    }

    #[test]
    fn test_match_result_title() {
        let result = MatchResult {
            winner: Side::Left,
            left: 5,
            right: 2,
        };
        assert_eq!(result.title(), "Game Over: Left Wins!");
    }
}
