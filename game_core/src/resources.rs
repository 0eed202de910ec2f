use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    /// Winner once either side reaches `target_score`.
    /// Ties at the threshold go to the right side.
    pub fn has_winner(&self, target_score: u8) -> Option<Side> {
        if self.left < target_score && self.right < target_score {
            return None;
        }
        if self.left > self.right {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Wall or paddle contact this frame (drives the hit sound)
    pub fn any_hit(&self) -> bool {
        self.ball_hit_paddle || self.ball_hit_wall
    }
}

/// Held keys for the manually controlled paddle, sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualInput {
    pub up: bool,
    pub down: bool,
}

impl ManualInput {
    pub fn new() -> Self {
        Self::default()
    }
}
