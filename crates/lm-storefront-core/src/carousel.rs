//! Hero carousel state.
//!
//! Holds the slide index and the hover pause flag. Timer ownership lives in
//! the frontend; it asks [`Carousel::should_run_timer`] before (re)arming.

use anyhow::{Result, anyhow};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Maps a `data-carousel-step` value; anything but a negative step is forward.
    pub fn from_step(step: i32) -> Self {
        if step < 0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }
}

#[derive(Clone, Debug)]
pub struct Carousel {
    index: usize,
    total: usize,
    paused: bool,
}

impl Carousel {
    pub fn new(total: usize) -> Result<Self> {
        if total == 0 {
            return Err(anyhow!("carousel needs at least one slide"));
        }
        Ok(Self {
            index: 0,
            total,
            paused: false,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self, direction: Direction) -> usize {
        self.index = match direction {
            Direction::Forward => (self.index + 1) % self.total,
            Direction::Backward => (self.index + self.total - 1) % self.total,
        };
        self.index
    }

    pub fn go_to(&mut self, index: usize) -> Result<usize> {
        if index >= self.total {
            return Err(anyhow!(
                "slide {index} out of range (carousel has {} slides)",
                self.total
            ));
        }
        self.index = index;
        Ok(self.index)
    }

    /// Timer tick: advances unless hovered.
    pub fn tick(&mut self) -> Option<usize> {
        if self.paused {
            return None;
        }
        Some(self.advance(Direction::Forward))
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn should_run_timer(&self) -> bool {
        !self.paused
    }

    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }

    pub fn is_active_dot(&self, dot: usize) -> bool {
        dot == self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_n_times_is_identity() -> Result<()> {
        for total in 1..=7 {
            for start in 0..total {
                let mut carousel = Carousel::new(total)?;
                carousel.go_to(start)?;
                for _ in 0..total {
                    carousel.advance(Direction::Forward);
                }
                assert_eq!(carousel.index(), start, "total={total} start={start}");
            }
        }
        Ok(())
    }

    #[test]
    fn backward_from_first_wraps_to_last() -> Result<()> {
        let mut carousel = Carousel::new(5)?;
        assert_eq!(carousel.advance(Direction::Backward), 4);
        Ok(())
    }

    #[test]
    fn go_to_rejects_out_of_range() -> Result<()> {
        let mut carousel = Carousel::new(3)?;
        carousel.go_to(2)?;
        assert!(carousel.go_to(3).is_err());
        assert_eq!(carousel.index(), 2);
        Ok(())
    }

    #[test]
    fn empty_carousel_is_rejected() {
        assert!(Carousel::new(0).is_err());
    }

    #[test]
    fn paused_tick_does_not_move() -> Result<()> {
        let mut carousel = Carousel::new(3)?;
        carousel.pause();
        assert_eq!(carousel.tick(), None);
        assert!(!carousel.should_run_timer());
        carousel.resume();
        assert_eq!(carousel.tick(), Some(1));
        Ok(())
    }

    #[test]
    fn manual_move_while_hovered_keeps_timer_stopped() -> Result<()> {
        let mut carousel = Carousel::new(4)?;
        carousel.pause();
        carousel.advance(Direction::Forward);
        carousel.go_to(3)?;
        assert_eq!(carousel.index(), 3);
        assert!(!carousel.should_run_timer());
        assert_eq!(carousel.tick(), None);
        carousel.resume();
        assert!(carousel.should_run_timer());
        Ok(())
    }

    #[test]
    fn transform_and_dots_follow_index() -> Result<()> {
        let mut carousel = Carousel::new(4)?;
        carousel.go_to(2)?;
        assert_eq!(carousel.transform(), "translateX(-200%)");
        assert!(carousel.is_active_dot(2));
        assert!(!carousel.is_active_dot(0));
        Ok(())
    }

    #[test]
    fn step_values_map_to_direction() {
        assert_eq!(Direction::from_step(-1), Direction::Backward);
        assert_eq!(Direction::from_step(1), Direction::Forward);
        assert_eq!(Direction::from_step(0), Direction::Forward);
    }
}
