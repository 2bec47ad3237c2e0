pub mod driver;

use serde::Serialize;

pub use driver::CarouselHandle;

/// Minimum drag power (|offset| x |velocity|) that counts as a swipe.
pub const SWIPE_CONFIDENCE_THRESHOLD: f64 = 10_000.0;

pub fn swipe_power(offset: f64, velocity: f64) -> f64 {
    offset.abs() * velocity.abs()
}

/// Which way the last transition moved. Only affects the slide-in animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselState {
    pub index: usize,
    pub direction: Direction,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    Empty,

    #[error("slide index {index} out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },

    #[error("carousel driver has stopped")]
    Stopped,
}

/// Current slide of a fixed, cyclic slide sequence.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    direction: Direction,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            len,
            index: 0,
            direction: Direction::Forward,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            index: self.index,
            direction: self.direction,
        }
    }

    /// Automatic advance from the interval timer.
    pub fn tick(&mut self) {
        self.next();
    }

    pub fn next(&mut self) {
        self.direction = Direction::Forward;
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.direction = Direction::Backward;
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.direction = if index > self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.index = index;
        Ok(())
    }

    /// Applies a drag release. Dragging left (negative offset) hard enough advances,
    /// dragging right goes back, anything weaker snaps back to the current slide.
    pub fn gesture(&mut self, offset: f64, velocity: f64) -> Option<Direction> {
        if swipe_power(offset, velocity) <= SWIPE_CONFIDENCE_THRESHOLD {
            return None;
        }
        if offset < 0.0 {
            self.next();
            Some(Direction::Forward)
        } else if offset > 0.0 {
            self.previous();
            Some(Direction::Backward)
        } else {
            None
        }
    }
}
