use fest_schedule::config::env_loader::{load_config, load_config_or};
use fest_schedule::schedule::api::ConfiguredStore;
use fest_schedule::schedule::view::ScheduleView;
use fest_schedule::speakers::carousel::CarouselPositioner;
use fest_schedule::speakers::model::load_speakers;
use fest_schedule::tracing::setup_loki;
use fest_schedule::viewport::{ResizeDebouncer, ViewportClass};
use tracing::{error, info};

const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

#[tokio::main]
async fn main() {
    let loki = setup_loki().await;
    let config = load_config();

    let viewport_width = load_config_or("VIEWPORT_WIDTH", DEFAULT_VIEWPORT_WIDTH);
    let (mut debouncer, mut resizes) = ResizeDebouncer::new(config.viewport.clone());
    debouncer.notify_resize(viewport_width);
    let viewport = resizes.recv().await.unwrap_or(ViewportClass::Wide);

    info!(width = viewport_width, %viewport, "Viewport classified");

    let store = ConfiguredStore::from(&config.source);
    let mut schedule = ScheduleView::new(config.schedule.clone(), viewport);
    schedule.load(&store).await;

    match serde_json::to_string_pretty(&schedule.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(err) => error!("Failed to render schedule: {:?}", err),
    }

    let speakers = load_speakers();
    let carousel = CarouselPositioner::new(
        config.carousel.clone(),
        speakers.len(),
        viewport_width as f32,
        viewport,
    );

    info!(
        speakers = speakers.len(),
        pages = carousel.total_pages(),
        page_width = carousel.page_width(),
        "Speaker carousel ready"
    );

    if let Some((controller, handle)) = loki {
        controller.shutdown().await;
        let _ = handle.await;
    }
}
