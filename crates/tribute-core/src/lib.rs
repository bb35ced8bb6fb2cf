pub mod blend;
pub mod clock;
pub mod constants;
pub mod engine;
pub mod error;
pub mod fade;
pub mod keyframe;
pub mod rotation;
pub mod scheduler;
pub mod state;
pub mod timeline;
pub mod triggers;

pub use blend::*;
pub use clock::*;
pub use engine::*;
pub use error::TimelineError;
pub use fade::*;
pub use keyframe::*;
pub use rotation::*;
pub use scheduler::*;
pub use state::*;
pub use timeline::*;
pub use triggers::*;
