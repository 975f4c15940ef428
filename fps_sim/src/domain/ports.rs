use super::state::PlayerInput;

// Port for whatever produces per-frame player input.
pub trait InputSource: Send {
    fn next_frame(&mut self, tick: u64) -> PlayerInput;
}
