//! Ocean currents
//!
//! A current is a stationary rectangle that nudges the player while the
//! player's box overlaps it. Each kind carries its own phase value, which
//! advances every tick whether or not the player is nearby. Phases are never
//! wrapped or reset; they only ever feed `sin`/`cos` (or the renderer).

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Push direction for streams and vortices (screen coordinates, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit vector of the push
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
        }
    }

    /// Axis the sideways sway acts on: horizontal pushes sway along +y,
    /// vertical pushes along +x
    pub fn sway_axis(self) -> Vec2 {
        match self {
            Direction::Left | Direction::Right => Vec2::Y,
            Direction::Up | Direction::Down => Vec2::X,
        }
    }
}

/// Whirlpool turning sense as seen on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spin {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Spin {
    /// Angle added to the radius angle to get the tangent
    fn tangent_offset(self) -> f32 {
        match self {
            // y grows downward, so +90 degrees turns clockwise on screen
            Spin::Clockwise => FRAC_PI_2,
            Spin::CounterClockwise => -FRAC_PI_2,
        }
    }
}

/// Current kind with its per-kind phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CurrentKind {
    /// Circular motion around the zone center inside half the zone width
    Whirlpool {
        #[serde(default)]
        spin: Spin,
        /// Visual rotation angle (radians)
        #[serde(default)]
        rotation: f32,
    },
    /// Steady push with a travelling wave sway
    Stream {
        direction: Direction,
        #[serde(default)]
        wave_offset: f32,
    },
    /// Steady push with a sway driven by an ever-growing spiral radius
    Vortex {
        direction: Direction,
        #[serde(default)]
        radius: f32,
    },
}

/// A current zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Current {
    pub rect: Rect,
    /// Units per tick applied to the player
    pub strength: f32,
    pub kind: CurrentKind,
}

impl Current {
    pub fn whirlpool(rect: Rect, strength: f32, spin: Spin) -> Self {
        Self {
            rect,
            strength,
            kind: CurrentKind::Whirlpool { spin, rotation: 0.0 },
        }
    }

    pub fn stream(rect: Rect, strength: f32, direction: Direction) -> Self {
        Self {
            rect,
            strength,
            kind: CurrentKind::Stream {
                direction,
                wave_offset: 0.0,
            },
        }
    }

    pub fn vortex(rect: Rect, strength: f32, direction: Direction) -> Self {
        Self {
            rect,
            strength,
            kind: CurrentKind::Vortex {
                direction,
                radius: 0.0,
            },
        }
    }

    /// Current phase value (rotation, wave offset or spiral radius)
    pub fn phase(&self) -> f32 {
        match self.kind {
            CurrentKind::Whirlpool { rotation, .. } => rotation,
            CurrentKind::Stream { wave_offset, .. } => wave_offset,
            CurrentKind::Vortex { radius, .. } => radius,
        }
    }

    /// Advance the phase by one tick
    pub fn advance(&mut self) {
        match &mut self.kind {
            CurrentKind::Whirlpool { rotation, .. } => *rotation += WHIRLPOOL_SPIN_STEP,
            CurrentKind::Stream { wave_offset, .. } => *wave_offset += STREAM_WAVE_STEP,
            CurrentKind::Vortex { radius, .. } => *radius += VORTEX_RADIUS_STEP,
        }
    }

    /// Displacement this zone applies to a player box this tick
    ///
    /// Whirlpool reach is measured from the player's position (its top-left
    /// corner). Does not check overlap; the caller gates on `rect.overlaps`.
    pub fn displacement(&self, player: &Rect) -> Vec2 {
        match self.kind {
            CurrentKind::Whirlpool { spin, .. } => {
                let offset = player.pos - self.rect.center();
                if offset.length() < self.rect.size.x / 2.0 {
                    let angle = offset.y.atan2(offset.x);
                    Vec2::from_angle(angle + spin.tangent_offset()) * self.strength
                } else {
                    Vec2::ZERO
                }
            }
            CurrentKind::Stream {
                direction,
                wave_offset,
            } => {
                direction.unit() * self.strength
                    + direction.sway_axis() * (wave_offset.sin() * STREAM_SWAY)
            }
            CurrentKind::Vortex { direction, radius } => {
                direction.unit() * self.strength + direction.sway_axis() * (radius.sin() * VORTEX_SWAY)
            }
        }
    }
}

/// The reef's standard current layout for an 800x600 arena
pub fn default_layout() -> Vec<Current> {
    vec![
        Current::whirlpool(Rect::new(150.0, 100.0, 150.0, 250.0), 2.0, Spin::Clockwise),
        Current::stream(Rect::new(500.0, 200.0, 120.0, 180.0), 1.5, Direction::Left),
        Current::vortex(Rect::new(300.0, 400.0, 100.0, 200.0), 1.0, Direction::Up),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_phase_advances_per_kind() {
        let mut layout = default_layout();
        for current in &mut layout {
            current.advance();
            current.advance();
        }
        assert!((layout[0].phase() - 2.0 * WHIRLPOOL_SPIN_STEP).abs() < EPS);
        assert!((layout[1].phase() - 2.0 * STREAM_WAVE_STEP).abs() < EPS);
        assert!((layout[2].phase() - 2.0 * VORTEX_RADIUS_STEP).abs() < EPS);
    }

    #[test]
    fn test_whirlpool_tangential_push() {
        let pool = Current::whirlpool(Rect::new(0.0, 0.0, 200.0, 200.0), 2.0, Spin::Clockwise);
        // Player position 30 units right of the pool center
        let player = Rect::new(130.0, 100.0, 100.0, 100.0);
        let d = pool.displacement(&player);
        let radius = player.pos - pool.rect.center();

        assert!((d.length() - 2.0).abs() < EPS);
        assert!(d.dot(radius).abs() < EPS);
        // Clockwise on screen: right of center moves down
        assert!(d.y > 0.0);
    }

    #[test]
    fn test_whirlpool_counter_clockwise() {
        let pool = Current::whirlpool(
            Rect::new(0.0, 0.0, 200.0, 200.0),
            2.0,
            Spin::CounterClockwise,
        );
        let player = Rect::new(130.0, 100.0, 100.0, 100.0);
        assert!(pool.displacement(&player).y < 0.0);
    }

    #[test]
    fn test_whirlpool_outside_inner_radius() {
        let pool = Current::whirlpool(Rect::new(0.0, 0.0, 100.0, 300.0), 2.0, Spin::Clockwise);
        // 100 units below the center, beyond half the width (50)
        let player = Rect::new(50.0, 250.0, 100.0, 100.0);
        assert_eq!(pool.displacement(&player), Vec2::ZERO);
    }

    #[test]
    fn test_whirlpool_reach_uses_player_position() {
        // Default pool: center (225, 225), reach 75
        let pool = &default_layout()[0];

        // Corner 65 below the pivot, center 125 away: pushed
        let below = Rect::new(225.0, 290.0, 100.0, 100.0);
        let d = pool.displacement(&below);
        assert!((d.length() - 2.0).abs() < EPS);
        // Clockwise: below the pivot moves left
        assert!((d.x + 2.0).abs() < EPS && d.y.abs() < EPS);

        // Corner 91.9 up-left of the pivot, center only 21 away: untouched
        let above_left = Rect::new(160.0, 160.0, 100.0, 100.0);
        assert_eq!(pool.displacement(&above_left), Vec2::ZERO);
    }

    #[test]
    fn test_stream_left_with_sway() {
        let mut stream = Current::stream(Rect::new(0.0, 0.0, 100.0, 100.0), 1.5, Direction::Left);
        stream.advance();
        let d = stream.displacement(&Rect::new(10.0, 10.0, 10.0, 10.0));
        assert!((d.x + 1.5).abs() < EPS);
        assert!((d.y - STREAM_WAVE_STEP.sin() * STREAM_SWAY).abs() < EPS);
    }

    #[test]
    fn test_vortex_up_with_sway() {
        let mut vortex = Current::vortex(Rect::new(0.0, 0.0, 100.0, 100.0), 1.0, Direction::Up);
        vortex.advance();
        let d = vortex.displacement(&Rect::new(10.0, 10.0, 10.0, 10.0));
        assert!((d.y + 1.0).abs() < EPS);
        assert!((d.x - VORTEX_RADIUS_STEP.sin() * VORTEX_SWAY).abs() < EPS);
    }

    #[test]
    fn test_every_direction_pushes() {
        let player = Rect::new(10.0, 10.0, 10.0, 10.0);
        for direction in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            // Zero phase, so the sway term vanishes
            let stream = Current::stream(Rect::new(0.0, 0.0, 50.0, 50.0), 3.0, direction);
            assert_eq!(stream.displacement(&player), direction.unit() * 3.0);
        }
    }

    #[test]
    fn test_kind_json_shape() {
        let json = r#"{"rect":{"pos":[1.0,2.0],"size":[3.0,4.0]},"strength":1.0,"kind":{"type":"vortex","direction":"down"}}"#;
        let current: Current = serde_json::from_str(json).unwrap();
        assert_eq!(
            current.kind,
            CurrentKind::Vortex {
                direction: Direction::Down,
                radius: 0.0
            }
        );
    }
}
