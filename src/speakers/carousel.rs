use crate::config::model::CarouselConfig;
use crate::viewport::ViewportClass;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Easing {
    Linear,
    EaseInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::EaseInOut if t < 0.5 => 4.0 * t * t * t,
            Easing::EaseInOut => 1.0 - (-2.0 * t + 2.0).powi(3) / 2.0,
        }
    }
}

/// Fixed-duration tween of the strip offset towards a page boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollAnimation {
    pub page: usize,
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl ScrollAnimation {
    pub fn offset_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }

        let progress = self.easing.apply(elapsed.as_secs_f32() / self.duration.as_secs_f32());

        self.from + (self.to - self.from) * progress
    }
}

/// Drag and snap state of a horizontal carousel.
///
/// The offset is the strip's translation in px: 0 shows the first page and
/// it grows more negative towards the last one.
#[derive(Debug, Clone)]
pub struct CarouselPositioner {
    config: CarouselConfig,
    item_count: usize,
    viewport_width: f32,
    class: ViewportClass,
    offset: f32,
    current_page: usize,
}

impl CarouselPositioner {
    pub fn new(
        config: CarouselConfig,
        item_count: usize,
        viewport_width: f32,
        class: ViewportClass,
    ) -> Self {
        Self {
            config,
            item_count,
            viewport_width: viewport_width.max(0.0),
            class,
            offset: 0.0,
            current_page: 0,
        }
    }

    pub fn items_per_page(&self) -> usize {
        self.class.pick(self.config.items_per_page).max(1)
    }

    pub fn total_pages(&self) -> usize {
        self.item_count.div_ceil(self.items_per_page())
    }

    /// Narrow viewports show a sliver of the next page. Never negative.
    pub fn page_width(&self) -> f32 {
        let width = match self.class {
            ViewportClass::Narrow => self.viewport_width * self.config.narrow_page_fraction,
            ViewportClass::Wide => self.viewport_width,
        };

        if width.is_finite() && width > 0.0 {
            width
        } else {
            0.0
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    fn last_page(&self) -> usize {
        self.total_pages().saturating_sub(1)
    }

    pub fn target_offset(&self, page: usize) -> f32 {
        -(page.min(self.last_page()) as f32) * self.page_width()
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        let slack = if self.config.elastic_slack.is_finite() {
            self.config.elastic_slack.max(0.0)
        } else {
            0.0
        };
        let min = self.target_offset(self.last_page()) - slack;

        offset.clamp(min, slack)
    }

    /// Moves the strip by `delta` px during a drag, within the drag bounds
    pub fn drag_by(&mut self, delta: f32) -> f32 {
        self.drag_to(self.offset + delta)
    }

    pub fn drag_to(&mut self, offset: f32) -> f32 {
        self.offset = self.clamp_offset(offset);
        self.offset
    }

    /// Page nearest to the current offset; pulling right past the first page stays on it
    pub fn candidate_page(&self) -> usize {
        let page_width = self.page_width();

        if page_width <= 0.0 || !self.offset.is_finite() || self.offset >= 0.0 {
            return 0;
        }

        let nearest = (self.offset.abs() / page_width).round() as usize;

        nearest.min(self.last_page())
    }

    /// Ends a drag by snapping to the nearest page
    pub fn release(&mut self) -> ScrollAnimation {
        let page = self.candidate_page();

        debug!(offset = self.offset, page, "Drag released");

        self.scroll_to(page)
    }

    /// Snaps to `page`, clamped to the existing pages
    pub fn scroll_to(&mut self, page: usize) -> ScrollAnimation {
        let page = page.min(self.last_page());
        let animation = ScrollAnimation {
            page,
            from: self.offset,
            to: self.target_offset(page),
            duration: self.config.scroll_duration,
            easing: Easing::EaseInOut,
        };

        self.current_page = page;
        self.offset = animation.to;

        animation
    }

    /// Applies a new viewport, keeping the current page when it still exists
    pub fn resize(&mut self, viewport_width: f32, class: ViewportClass) {
        self.viewport_width = viewport_width.max(0.0);
        self.class = class;
        self.current_page = self.current_page.min(self.last_page());
        self.offset = self.target_offset(self.current_page);
    }
}
