use gesture_subtitles::config::Configuration;
use gesture_subtitles::coordinator::CoordinatorBuilder;
use gesture_subtitles::error::AppError;
use gesture_subtitles::pipeline::classifier::GestureModel;
use gesture_subtitles::pipeline::extractor::{IdleTracker, LandmarkExtractor};
use gesture_subtitles::pipeline::recognizer::GestureRecognizer;
use std::path::Path;
use std::sync::Arc;
use tracing::Level;

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_logging();
    let configuration = Configuration::load()?;

    // The model is loaded exactly once; a failure here is permanent and
    // every request will answer model_unavailable until a restart.
    let model = Arc::new(GestureModel::load(Path::new(&configuration.model_path)));
    match model.unavailable_reason() {
        Some(reason) => {
            tracing::warn!("Gesture model unavailable, requests will fail fast: {reason}")
        }
        None => tracing::info!("Gesture model ready at {}", configuration.model_path),
    }

    // The idle backend stands in until an embedding service links a real
    // hand-pose capability through the same factory seam.
    let extractor = Arc::new(LandmarkExtractor::from_factory(
        &configuration.tracker,
        IdleTracker::new,
    ));
    let recognizer = Arc::new(GestureRecognizer::new(model, extractor));

    let coordinator = CoordinatorBuilder::new(configuration)
        .recognizer(recognizer)
        .build()?;
    tracing::info!("Gesture pipeline ready, waiting for requests");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received, stopping coordinator");
    coordinator.stop();
    Ok(())
}
