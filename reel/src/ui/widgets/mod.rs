//! Widgets for the slideshow TUI.

pub mod challenge;
pub mod progress;
pub mod script;
pub mod timeline;

pub use challenge::ChallengeWidget;
pub use progress::{CountdownWidget, ProgressWidget};
pub use script::ScriptWidget;
pub use timeline::TenseShiftWidget;
