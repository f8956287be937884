use crate::config::model::{
    CarouselConfig, Config, PerViewport, ScheduleConfig, SourceConfig, ViewportConfig,
};
use crate::schedule::filter::{FacetSource, FilterPolicy};
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use std::time::Duration;

pub fn load_config() -> Config {
    let excluded_titles = load_list_config("EXCLUDED_TITLES");
    let source = match env::var("EVENTS_URL").ok().filter(|url| !url.is_empty()) {
        Some(url) => SourceConfig::Remote {
            url,
            excluded_titles,
        },
        None => SourceConfig::Static { excluded_titles },
    };
    // The bundled data only lists club events, CMS data is shown as-is
    let is_static = matches!(source, SourceConfig::Static { .. });

    let schedule_defaults = ScheduleConfig::default();
    let carousel_defaults = CarouselConfig::default();
    let viewport_defaults = ViewportConfig::default();

    Config {
        source,
        schedule: ScheduleConfig {
            page_size: PerViewport {
                wide: load_config_or("SCHEDULE_PAGE_SIZE_WIDE", schedule_defaults.page_size.wide),
                narrow: load_config_or(
                    "SCHEDULE_PAGE_SIZE_NARROW",
                    schedule_defaults.page_size.narrow,
                ),
            },
            policy: FilterPolicy {
                exclude_general_club: load_bool_config("EXCLUDE_GENERAL_CLUB", is_static),
            },
            facets: if load_bool_config("DERIVE_FACETS", !is_static) {
                FacetSource::Derived
            } else {
                schedule_defaults.facets
            },
        },
        carousel: CarouselConfig {
            items_per_page: PerViewport {
                wide: load_config_or("CAROUSEL_ITEMS_WIDE", carousel_defaults.items_per_page.wide),
                narrow: load_config_or(
                    "CAROUSEL_ITEMS_NARROW",
                    carousel_defaults.items_per_page.narrow,
                ),
            },
            narrow_page_fraction: load_fraction_config(
                "CAROUSEL_NARROW_FRACTION",
                carousel_defaults.narrow_page_fraction,
            ),
            elastic_slack: load_length_config(
                "CAROUSEL_ELASTIC_SLACK",
                carousel_defaults.elastic_slack,
            ),
            scroll_duration: load_millis_config(
                "CAROUSEL_SCROLL_MS",
                carousel_defaults.scroll_duration,
            ),
        },
        viewport: ViewportConfig {
            narrow_breakpoint: load_config_or(
                "NARROW_BREAKPOINT_PX",
                viewport_defaults.narrow_breakpoint,
            ),
            resize_debounce: load_millis_config(
                "RESIZE_DEBOUNCE_MS",
                viewport_defaults.resize_debounce,
            ),
        },
    }
}

/// Accepts `true`/`false` in any case, as well as `1`/`0`
fn load_bool_config(name: &str, default: bool) -> bool {
    let Ok(value) = env::var(name) else {
        return default;
    };

    match value.trim().to_lowercase().as_str() {
        "true" | "1" => true,
        "false" | "0" => false,
        _ => panic!(
            "Invalid config '{}'. Expected either 'true' or 'false', got '{}'.",
            name, value
        ),
    }
}

pub fn load_config_or<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Debug,
{
    match env::var(name) {
        Ok(value) => value.trim().parse().unwrap_or_else(|err| {
            panic!("Invalid config '{}' ({:?}). Got '{}'.", name, err, value)
        }),
        Err(_) => default,
    }
}

/// Share of a width, in `(0, 1]`
fn load_fraction_config(name: &str, default: f32) -> f32 {
    let value = load_config_or(name, default);

    if !(value.is_finite() && value > 0.0 && value <= 1.0) {
        panic!("Invalid config '{}'. Expected a number above 0 and up to 1, got {}.", name, value);
    }

    value
}

/// Length in px, zero or more
fn load_length_config(name: &str, default: f32) -> f32 {
    let value = load_config_or(name, default);

    if !(value.is_finite() && value >= 0.0) {
        panic!("Invalid config '{}'. Expected a length of 0 or more, got {}.", name, value);
    }

    value
}

fn load_millis_config(name: &str, default: Duration) -> Duration {
    Duration::from_millis(load_config_or(name, default.as_millis() as u64))
}

fn load_list_config(name: &str) -> Vec<String> {
    env::var(name)
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
