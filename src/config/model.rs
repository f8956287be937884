use crate::schedule::filter::{FacetSource, FilterPolicy};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceConfig,
    pub schedule: ScheduleConfig,
    pub carousel: CarouselConfig,
    pub viewport: ViewportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// Events bundled with the binary
    Static { excluded_titles: Vec<String> },
    Remote {
        url: String,
        excluded_titles: Vec<String>,
    },
}

#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    pub page_size: PerViewport<usize>,
    pub policy: FilterPolicy,
    pub facets: FacetSource,
}

#[derive(Debug, Clone)]
pub struct CarouselConfig {
    pub items_per_page: PerViewport<usize>,
    /// Share of the visible width a page takes on narrow viewports
    pub narrow_page_fraction: f32,
    /// How far (px) a drag may overshoot the first and last page
    pub elastic_slack: f32,
    pub scroll_duration: Duration,
}

#[derive(Debug, Clone)]
pub struct ViewportConfig {
    /// Widths below this are narrow
    pub narrow_breakpoint: u32,
    pub resize_debounce: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerViewport<T> {
    pub wide: T,
    pub narrow: T,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            page_size: PerViewport { wide: 6, narrow: 3 },
            policy: FilterPolicy::default(),
            facets: FacetSource::default(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            items_per_page: PerViewport { wide: 4, narrow: 1 },
            narrow_page_fraction: 0.8,
            elastic_slack: 0.0,
            scroll_duration: Duration::from_millis(500),
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint: 768,
            resize_debounce: Duration::from_millis(150),
        }
    }
}
