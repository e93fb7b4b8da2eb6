//! DrawingIntent- und DrawingCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::DrawingCommand;
pub use intent::DrawingIntent;
