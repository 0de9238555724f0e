#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    pub fn delta(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct SlideshowState {
    pub current_index: usize,
    pub is_playing: bool, // Local belief only, the widget never acknowledges
}

/// `(index + delta + len) mod len`. `len` must be non-zero.
pub fn step_index(index: usize, direction: Direction, len: usize) -> usize {
    let len = len as isize;
    ((index as isize + direction.delta() + len) % len) as usize
}
