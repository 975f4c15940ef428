use crate::domain::state::{Player, PlayerInput};
use crate::domain::tuning::{LookTuning, RotationAxes};

pub fn tick_look(player: &mut Player, input: &PlayerInput, tuning: &LookTuning) {
    if matches!(tuning.axes, RotationAxes::MouseXAndY | RotationAxes::MouseY) {
        // Moving the mouse up looks up, which is a negative pitch.
        player.pitch = (player.pitch - input.mouse_y * tuning.sensitivity_vert)
            .clamp(tuning.min_vert, tuning.max_vert);
    }
    if matches!(tuning.axes, RotationAxes::MouseXAndY | RotationAxes::MouseX) {
        player.yaw = (player.yaw + input.mouse_x * tuning.sensitivity_hor).rem_euclid(360.0);
    }
}
