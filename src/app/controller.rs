//! Controller: zentrale Verarbeitung von Zeichen-Intents.

use super::command_log::CommandLog;
use super::completion::RouteCompletion;
use super::events::{DrawingCommand, DrawingIntent};
use super::intent_mapping::map_intent_to_commands;
use super::session::DrawingSession;
use crate::shared::RenderSync;

/// Orchestriert UI-Events auf eine `DrawingSession` und protokolliert Commands.
#[derive(Debug, Default)]
pub struct DrawingController {
    command_log: CommandLog,
}

impl DrawingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn command_log(&self) -> &CommandLog {
        &self.command_log
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Gibt die `RouteCompletion` zurück, falls einer der Commands die
    /// Strecke abgeschlossen hat.
    pub fn handle_intent<R: RenderSync + ?Sized>(
        &mut self,
        session: &mut DrawingSession<'_, R>,
        intent: DrawingIntent,
    ) -> anyhow::Result<Option<RouteCompletion>> {
        let commands = map_intent_to_commands(session.state(), intent);
        let mut completion = None;
        for command in commands {
            if let Some(done) = self.handle_command(session, command)? {
                completion = Some(done);
            }
        }
        Ok(completion)
    }

    /// Führt einen Command auf der Session aus.
    /// Session-Fehler werden als `anyhow::Error` weitergereicht.
    pub fn handle_command<R: RenderSync + ?Sized>(
        &mut self,
        session: &mut DrawingSession<'_, R>,
        command: DrawingCommand,
    ) -> anyhow::Result<Option<RouteCompletion>> {
        self.command_log.record(&command);

        match command {
            DrawingCommand::EnterDrawMode => session.enter()?,
            DrawingCommand::HandleSurfaceClick { click } => {
                session.handle_click(click)?;
            }
            DrawingCommand::UndoLastPoint => {
                session.undo()?;
            }
            DrawingCommand::ClearPoints => session.clear()?,
            DrawingCommand::CompleteRoute => return Ok(Some(session.complete()?)),
            DrawingCommand::CancelDrawing => session.cancel()?,
            DrawingCommand::ExitDrawMode => session.exit()?,
            DrawingCommand::SetElevation { index, elevation_m } => {
                session.set_elevation(index, elevation_m)?
            }
        }

        Ok(None)
    }
}
