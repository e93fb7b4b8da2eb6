//! Zeichen-Session: Zustandsmaschine für die interaktive Punkt-Erfassung.
//!
//! ```text
//! Idle ──enter──▶ Active ──complete──▶ Completed ──exit──▶ Idle
//!                  │  ▲
//!                  │  └── add_point / handle_click / undo / clear
//!                  └────cancel────▶ Idle
//! ```
//!
//! Nach jeder Mutation wird das Overlay über `RenderSync` aus der
//! kanonischen Punktfolge synchronisiert.

mod capture;
mod lifecycle;
mod state;

pub use state::{ClickOutcome, DrawingSession, SessionError, SessionOutcome, SessionState};

#[cfg(test)]
mod tests;
