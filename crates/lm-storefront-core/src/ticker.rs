//! Brand strip auto-scroll.
//!
//! The strip renders the brand list three times, so resetting the offset to
//! zero after one full sequence is visually seamless.

#[derive(Clone, Debug)]
pub struct BrandTicker {
    offset: f64,
    step: f64,
    gap: f64,
    brand_count: usize,
    paused: bool,
}

impl BrandTicker {
    pub fn new(brand_count: usize, step: f64, gap: f64) -> Self {
        Self {
            offset: 0.0,
            step,
            gap,
            brand_count,
            paused: false,
        }
    }

    /// Width of one un-tripled brand sequence for the measured card width.
    pub fn wrap_width(&self, card_width: f64) -> f64 {
        (card_width + self.gap) * self.brand_count as f64
    }

    /// Advances one frame. Hover pause is checked here so the frame loop is the
    /// only thing that moves the strip.
    pub fn tick(&mut self, card_width: f64) -> f64 {
        if self.paused {
            return self.offset;
        }
        let total = self.wrap_width(card_width);
        if total <= 0.0 {
            self.offset = 0.0;
            return self.offset;
        }
        self.offset += self.step;
        if self.offset >= total {
            self.offset = 0.0;
        }
        self.offset
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn transform(&self) -> String {
        format!("translateX(-{}px)", self.offset)
    }
}
