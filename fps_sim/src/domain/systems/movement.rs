use crate::domain::state::{Arena, Player, PlayerInput, Vec2};
use crate::domain::tuning::PlayerTuning;

pub fn tick_player(
    player: &mut Player,
    input: &PlayerInput,
    dt: f32,
    speed_multiplier: f32,
    tuning: &PlayerTuning,
    arena: &Arena,
) {
    let speed = tuning.speed * speed_multiplier;

    // Diagonal input must not be faster than straight input.
    let local = Vec2::new(input.horizontal * speed, input.vertical * speed).clamp_length(speed);

    // Gravity only pins the controller to the floor, so there is no vertical state.
    let step = local.rotated(player.yaw) * dt;

    player.position = arena.clamp(player.position + step, tuning.radius);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena { half_extent: 100.0 }
    }

    #[test]
    fn when_pushing_forward_then_player_moves_along_yaw() {
        let mut player = Player::new(5);
        player.yaw = 90.0;
        let input = PlayerInput {
            vertical: 1.0,
            ..PlayerInput::default()
        };

        tick_player(&mut player, &input, 0.5, 1.0, &PlayerTuning::default(), &arena());

        assert!((player.position.x - 3.0).abs() < 1e-4);
        assert!(player.position.z.abs() < 1e-4);
    }

    #[test]
    fn when_moving_diagonally_then_speed_is_clamped() {
        let mut player = Player::new(5);
        let input = PlayerInput {
            horizontal: 1.0,
            vertical: 1.0,
            ..PlayerInput::default()
        };

        tick_player(&mut player, &input, 1.0, 1.0, &PlayerTuning::default(), &arena());

        assert!((player.position.length() - 6.0).abs() < 1e-4);
    }

    #[test]
    fn when_speed_multiplier_is_doubled_then_distance_doubles() {
        let mut player = Player::new(5);
        let input = PlayerInput {
            vertical: 1.0,
            ..PlayerInput::default()
        };

        tick_player(&mut player, &input, 1.0, 2.0, &PlayerTuning::default(), &arena());

        assert!((player.position.z - 12.0).abs() < 1e-4);
    }

    #[test]
    fn when_walking_into_a_wall_then_player_stays_inside() {
        let mut player = Player::new(5);
        let input = PlayerInput {
            vertical: 1.0,
            ..PlayerInput::default()
        };
        let small = Arena { half_extent: 2.0 };

        tick_player(&mut player, &input, 10.0, 1.0, &PlayerTuning::default(), &small);

        assert_eq!(player.position, Vec2::new(0.0, 1.5));
    }
}
