pub mod anime_pipeline;
pub mod formatter;
pub mod media_pipeline;
pub mod mode_store;
pub mod providers;
pub mod recommendations;
pub mod shuffle;
pub mod timeout;

pub use anime_pipeline::AnimeQueryPipeline;
pub use media_pipeline::MediaQueryPipeline;
pub use mode_store::{FileModeStore, InMemoryModeStore, ModeStore};
pub use recommendations::RecommendationService;
pub use timeout::TimeoutGuard;
