pub mod audit;
pub mod builder;
pub mod config;
pub mod error;
pub mod generation;
pub mod geometry;
pub mod layout;
pub mod room;
pub mod types;

mod random;

pub use audit::{Violation, audit};
pub use builder::{Placement, RoomGraphBuilder, StepResult};
pub use config::GenerationConfig;
pub use error::{ConfigError, GenerationError};
pub use generation::{Generation, GenerationSummary, RoomPlaced, TickOutcome};
pub use geometry::{connector_rect, intersects, offset_rect};
pub use layout::{Layout, LayoutRoom};
pub use room::Room;
pub use types::*;
