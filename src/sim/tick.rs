//! Simulation tick
//!
//! Core game loop step: one call advances the world by one frame.

use super::collision::clamp_into;
use super::state::{GameEvent, GameState};

/// Directional input for a single tick
///
/// Arrow keys and WASD are folded into these four flags by the platform layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl TickInput {
    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    move_player(state, input);
    keep_player_in_bounds(state);

    let arena = state.arena;
    let (bubbles, rng) = state.bubbles_and_rng();
    for bubble in bubbles {
        bubble.update(rng, arena);
    }

    apply_currents(state);
    // Currents can push past the walls
    keep_player_in_bounds(state);

    collect_items(state);
    if state.items.iter().all(|item| item.collected) {
        regenerate_items(state);
    }

    state.time_ticks += 1;
}

/// Unit steps per held direction; diagonals are not normalized
fn move_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;
    if input.left {
        player.pos.x -= player.speed;
    }
    if input.right {
        player.pos.x += player.speed;
    }
    if input.up {
        player.pos.y -= player.speed;
    }
    if input.down {
        player.pos.y += player.speed;
    }
    player.moving = input.any();
}

fn keep_player_in_bounds(state: &mut GameState) {
    let player = &mut state.player;
    player.pos = clamp_into(player.pos, player.size, state.arena);
}

/// Advance every current, then push the player with each one it overlaps
fn apply_currents(state: &mut GameState) {
    for current in &mut state.currents {
        current.advance();

        let player_rect = state.player.rect();
        if current.rect.overlaps(&player_rect) {
            state.player.pos += current.displacement(&player_rect);
        }
    }
}

fn collect_items(state: &mut GameState) {
    let player_rect = state.player.rect();

    for item in &mut state.items {
        if item.collected || !item.rect().overlaps(&player_rect) {
            continue;
        }

        item.collected = true;
        let total = state.reef.record_collection();
        state.displayed_collected = total;
        state.events.push(GameEvent::ItemCollected {
            item_id: item.id,
            total,
        });
        log::debug!(
            "Collected plant {} (total {}, stage {}, growth {:.2})",
            item.id,
            total,
            state.reef.stage,
            state.reef.growth
        );
    }
}

/// Replace the current batch with a freshly generated one
pub fn regenerate_items(state: &mut GameState) {
    state.items = state.spawn_batch();
    let count = state.items.len();
    state.events.push(GameEvent::BatchRegenerated { count });
    log::info!(
        "New plant batch: {} plants (reef stage {})",
        count,
        state.reef.stage
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::item::{Item, ItemKind};
    use crate::sim::reef::{growth_for, stage_for};
    use glam::Vec2;
    use proptest::prelude::*;

    fn item_at(id: u32, x: f32, y: f32) -> Item {
        Item {
            id,
            pos: Vec2::new(x, y),
            size: Vec2::splat(30.0),
            collected: false,
            kind: ItemKind::Seaweed,
        }
    }

    /// State with a single far-away plant so nothing is collected by accident
    fn quiet_state(seed: u64) -> GameState {
        let mut state = GameState::with_seed(seed);
        state.items = vec![item_at(900, 700.0, 50.0)];
        state
    }

    fn assert_in_bounds(state: &GameState) {
        assert!(
            state.player.rect().within(state.arena),
            "player out of bounds at {:?}",
            state.player.pos
        );
    }

    #[test]
    fn test_idle_player_stays_put() {
        let mut state = quiet_state(1);
        // Centered in the arena and clear of every current
        state.player.pos = Vec2::new(350.0, 250.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.player.pos, Vec2::new(350.0, 250.0));
        assert!(!state.player.moving);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_movement_and_diagonal() {
        let mut state = quiet_state(1);
        state.player.pos = Vec2::new(350.0, 250.0);

        let input = TickInput {
            right: true,
            up: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.player.pos, Vec2::new(355.0, 245.0));
        assert!(state.player.moving);
    }

    #[test]
    fn test_opposite_keys_cancel_but_count_as_moving() {
        let mut state = quiet_state(1);
        state.player.pos = Vec2::new(350.0, 250.0);

        let input = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.player.pos, Vec2::new(350.0, 250.0));
        assert!(state.player.moving);
    }

    #[test]
    fn test_left_edge_clamp() {
        let mut state = quiet_state(1);
        state.player.pos = Vec2::new(0.0, 250.0);

        let input = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.player.pos.x, 0.0);
        assert_eq!(state.player.pos.y, 250.0);
    }

    #[test]
    fn test_bottom_right_clamp() {
        let mut state = quiet_state(1);
        state.player.pos = Vec2::new(698.0, 498.0);

        let input = TickInput {
            right: true,
            down: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.player.pos, Vec2::new(700.0, 500.0));
    }

    #[test]
    fn test_collect_overlapping_item() {
        let mut state = quiet_state(1);
        state.player.pos = Vec2::new(350.0, 250.0);
        state.items.push(item_at(901, 350.0, 250.0));

        tick(&mut state, &TickInput::default());

        assert!(state.items[1].collected);
        assert!(!state.items[0].collected);
        assert_eq!(state.reef.collected_total, 1);
        assert_eq!(state.displayed_collected, 1);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::ItemCollected {
                item_id: 901,
                total: 1
            }]
        );
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_collected_item_not_counted_twice() {
        let mut state = quiet_state(1);
        state.player.pos = Vec2::new(350.0, 250.0);
        state.items.push(item_at(901, 350.0, 250.0));

        tick(&mut state, &TickInput::default());
        tick(&mut state, &TickInput::default());

        assert_eq!(state.reef.collected_total, 1);
    }

    #[test]
    fn test_last_item_regenerates_batch() {
        let mut state = GameState::with_seed(42);
        state.player.pos = Vec2::new(350.0, 250.0);
        state.items = vec![item_at(901, 360.0, 260.0)];

        tick(&mut state, &TickInput::default());

        assert_eq!(state.reef.collected_total, 1);
        assert!(!state.items.is_empty() && state.items.len() <= 5);
        assert!(state.items.iter().all(|i| !i.collected && i.id != 901));
        for (i, a) in state.items.iter().enumerate() {
            for b in &state.items[i + 1..] {
                assert!(a.pos.distance(b.pos) >= 100.0);
            }
        }

        let events = state.drain_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], GameEvent::BatchRegenerated { count } if count == state.items.len()));
    }

    #[test]
    fn test_whirlpool_pushes_tangentially() {
        let mut state = quiet_state(1);
        // Default whirlpool spans (150, 100) .. (300, 350); center (225, 225)
        let pool_center = Vec2::new(225.0, 225.0);
        let strength = state.currents[0].strength;
        // Player position 10 units right of the pool center
        state.player.pos = Vec2::new(235.0, 225.0);
        let before = state.player.pos;

        tick(&mut state, &TickInput::default());

        let delta = state.player.pos - before;
        let radius = before - pool_center;
        assert!((delta.length() - strength).abs() < 1e-3);
        assert!(delta.dot(radius).abs() < 1e-3);
    }

    #[test]
    fn test_stream_pushes_left() {
        let mut state = quiet_state(1);
        // Overlap only the stream at (500, 200) .. (620, 380)
        state.player.pos = Vec2::new(520.0, 220.0);

        tick(&mut state, &TickInput::default());

        assert!((state.player.pos.x - 518.5).abs() < 1e-3);
        let sway = crate::consts::STREAM_WAVE_STEP.sin() * crate::consts::STREAM_SWAY;
        assert!((state.player.pos.y - (220.0 + sway)).abs() < 1e-3);
    }

    #[test]
    fn test_current_phases_advance_without_player() {
        let mut state = quiet_state(1);
        state.player.pos = Vec2::new(650.0, 150.0);

        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }

        for current in &state.currents {
            assert!(current.phase() > 0.0);
        }
    }

    #[test]
    fn test_vortex_cannot_push_through_ceiling() {
        let mut state = quiet_state(1);
        state.currents = vec![crate::sim::Current::vortex(
            crate::sim::Rect::new(0.0, 0.0, 800.0, 600.0),
            50.0,
            crate::sim::Direction::Up,
        )];
        state.player.pos = Vec2::new(300.0, 10.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.player.pos.y, 0.0);
        assert_in_bounds(&state);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::with_seed(99999);
        let mut state2 = GameState::with_seed(99999);

        let inputs = [
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput {
                down: true,
                right: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.player.pos, state2.player.pos);
        assert_eq!(state1.reef.collected_total, state2.reef.collected_total);
        assert_eq!(state1.bubbles[3].pos, state2.bubbles[3].pos);
    }

    fn input_strategy() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(left, right, up, down)| TickInput {
                left,
                right,
                up,
                down,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_arena(
            seed in any::<u64>(),
            start_x in 0.0f32..700.0,
            start_y in 0.0f32..500.0,
            inputs in prop::collection::vec(input_strategy(), 1..300),
        ) {
            let mut state = GameState::with_seed(seed);
            state.player.pos = Vec2::new(start_x, start_y);

            for input in &inputs {
                tick(&mut state, input);
                prop_assert!(state.player.rect().within(state.arena));
            }
        }

        #[test]
        fn prop_counter_monotonic_and_reef_consistent(
            seed in any::<u64>(),
            inputs in prop::collection::vec(input_strategy(), 1..400),
        ) {
            let mut state = GameState::with_seed(seed);
            let mut last = 0;

            for input in &inputs {
                tick(&mut state, input);
                let total = state.reef.collected_total;
                prop_assert!(total >= last);
                prop_assert_eq!(state.displayed_collected, total);
                prop_assert_eq!(state.reef.stage, stage_for(total, 5));
                prop_assert!((state.reef.growth - growth_for(total, 5)).abs() < 1e-6);
                last = total;
            }
        }
    }
}
