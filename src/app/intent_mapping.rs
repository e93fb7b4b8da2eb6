//! Mapping von Zeichen-Intents auf mutierende Session-Commands.

use super::events::{DrawingCommand, DrawingIntent};
use super::session::SessionState;

/// Übersetzt einen `DrawingIntent` abhängig vom Session-Zustand in Commands.
///
/// Klicks außerhalb des Zeichenmodus gehören nicht der Session und ergeben
/// eine leere Liste.
pub fn map_intent_to_commands(state: SessionState, intent: DrawingIntent) -> Vec<DrawingCommand> {
    match intent {
        DrawingIntent::DrawModeToggled => match state {
            SessionState::Idle => vec![DrawingCommand::EnterDrawMode],
            SessionState::Active => vec![DrawingCommand::CancelDrawing],
            SessionState::Completed => vec![DrawingCommand::ExitDrawMode],
        },
        DrawingIntent::SurfaceClicked { click } => {
            if state == SessionState::Active {
                vec![DrawingCommand::HandleSurfaceClick { click }]
            } else {
                Vec::new()
            }
        }
        DrawingIntent::UndoRequested => vec![DrawingCommand::UndoLastPoint],
        DrawingIntent::ClearRequested => vec![DrawingCommand::ClearPoints],
        DrawingIntent::FinishRequested => vec![DrawingCommand::CompleteRoute],
        // Escape stufenweise: erst Zeichnen abbrechen, dann Modus verlassen
        DrawingIntent::CancelRequested => match state {
            SessionState::Idle => Vec::new(),
            SessionState::Active => vec![DrawingCommand::CancelDrawing],
            SessionState::Completed => vec![DrawingCommand::ExitDrawMode],
        },
        DrawingIntent::ExitRequested => match state {
            SessionState::Active => vec![
                DrawingCommand::CancelDrawing,
                DrawingCommand::ExitDrawMode,
            ],
            SessionState::Idle | SessionState::Completed => vec![DrawingCommand::ExitDrawMode],
        },
        // Verspätete Antworten des Höhendienstes nach Abschluss verfallen
        DrawingIntent::ElevationReceived { index, elevation_m } => {
            if state == SessionState::Active {
                vec![DrawingCommand::SetElevation { index, elevation_m }]
            } else {
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests;
