/// Vertical scroll position of the card list, with an optional animated target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    offset: u32,
    target: u32,
}

impl ScrollState {
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.offset != self.target
    }

    /// Bring `top` to the top of the viewport, as far as the content allows.
    pub fn reveal(&mut self, top: u32, content: u32, viewport: u16, smooth: bool) {
        self.target = top.min(max_offset(content, viewport));
        if !smooth {
            self.offset = self.target;
        }
    }

    /// Immediate relative scroll; cancels any animation.
    pub fn scroll_by(&mut self, delta: i32, content: u32, viewport: u16) {
        let next = self.offset.saturating_add_signed(delta);
        self.offset = next.min(max_offset(content, viewport));
        self.target = self.offset;
    }

    /// Keep both positions inside the content after a resize or reload.
    pub fn clamp(&mut self, content: u32, viewport: u16) {
        let max = max_offset(content, viewport);
        self.offset = self.offset.min(max);
        self.target = self.target.min(max);
    }

    /// Advance the animation by one frame. Returns whether the offset moved.
    pub fn tick(&mut self) -> bool {
        if self.offset == self.target {
            return false;
        }
        let distance = self.offset.abs_diff(self.target);
        let step = distance.div_ceil(2);
        if self.offset < self.target {
            self.offset += step;
        } else {
            self.offset -= step;
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn max_offset(content: u32, viewport: u16) -> u32 {
    content.saturating_sub(viewport as u32)
}

#[cfg(test)]
#[path = "../../../tests/unit/views/board/scroll.rs"]
mod tests;
