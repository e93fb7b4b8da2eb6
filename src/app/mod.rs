//! Application-Layer: Zeichen-Session, Controller, Events und Übergabevertrag.

pub mod command_log;
pub mod completion;
pub mod controller;
pub mod elevation;
pub mod events;
mod intent_mapping;
pub mod session;

pub use command_log::CommandLog;
pub use completion::{RouteCompletion, RouteSummary};
pub use controller::DrawingController;
pub use elevation::ElevationSource;
pub use events::{DrawingCommand, DrawingIntent};
pub use intent_mapping::map_intent_to_commands;
pub use session::{ClickOutcome, DrawingSession, SessionError, SessionOutcome, SessionState};
