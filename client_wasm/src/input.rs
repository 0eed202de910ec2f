//! Keyboard input handling

use game_core::ManualInput;

/// Handle key down event. Returns true when the key drives the paddle.
pub fn handle_key_down(key: &str, input: &mut ManualInput) -> bool {
    match key {
        "ArrowUp" | "w" | "W" => input.up = true,
        "ArrowDown" | "s" | "S" => input.down = true,
        _ => return false,
    }
    true
}

/// Handle key up event. Returns true when the key drives the paddle.
pub fn handle_key_up(key: &str, input: &mut ManualInput) -> bool {
    match key {
        "ArrowUp" | "w" | "W" => input.up = false,
        "ArrowDown" | "s" | "S" => input.down = false,
        _ => return false,
    }
    true
}
