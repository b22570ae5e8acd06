//! Default value functions for serde deserialization.

pub fn grid_size() -> usize {
    5
}

pub fn collectibles() -> usize {
    3
}

pub fn obstacles() -> usize {
    5
}

pub fn max_attempts() -> usize {
    1000
}

pub fn enabled() -> bool {
    true
}

pub fn frame_delay_ms() -> u64 {
    500
}
