use crate::app::events::{DrawingCommand, DrawingIntent};
use crate::app::session::SessionState;
use crate::shared::SurfaceClick;

use super::map_intent_to_commands;

#[test]
fn draw_mode_toggle_depends_on_state() {
    assert_eq!(
        map_intent_to_commands(SessionState::Idle, DrawingIntent::DrawModeToggled),
        vec![DrawingCommand::EnterDrawMode]
    );
    assert_eq!(
        map_intent_to_commands(SessionState::Active, DrawingIntent::DrawModeToggled),
        vec![DrawingCommand::CancelDrawing]
    );
    assert_eq!(
        map_intent_to_commands(SessionState::Completed, DrawingIntent::DrawModeToggled),
        vec![DrawingCommand::ExitDrawMode]
    );
}

#[test]
fn surface_click_only_forwarded_while_active() {
    let click = SurfaceClick::on_map(57.1, 27.1);

    let commands =
        map_intent_to_commands(SessionState::Active, DrawingIntent::SurfaceClicked { click });
    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        DrawingCommand::HandleSurfaceClick { click: c } if c == click
    ));

    assert!(
        map_intent_to_commands(SessionState::Idle, DrawingIntent::SurfaceClicked { click })
            .is_empty()
    );
    assert!(
        map_intent_to_commands(SessionState::Completed, DrawingIntent::SurfaceClicked { click })
            .is_empty()
    );
}

#[test]
fn chrome_click_is_still_forwarded_for_counting() {
    let click = SurfaceClick::on_chrome(57.1, 27.1);
    let commands =
        map_intent_to_commands(SessionState::Active, DrawingIntent::SurfaceClicked { click });
    assert_eq!(commands, vec![DrawingCommand::HandleSurfaceClick { click }]);
}

#[test]
fn escape_steps_back_one_level() {
    assert!(map_intent_to_commands(SessionState::Idle, DrawingIntent::CancelRequested).is_empty());
    assert_eq!(
        map_intent_to_commands(SessionState::Active, DrawingIntent::CancelRequested),
        vec![DrawingCommand::CancelDrawing]
    );
    assert_eq!(
        map_intent_to_commands(SessionState::Completed, DrawingIntent::CancelRequested),
        vec![DrawingCommand::ExitDrawMode]
    );
}

#[test]
fn exit_while_active_maps_to_two_commands_in_order() {
    let commands = map_intent_to_commands(SessionState::Active, DrawingIntent::ExitRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], DrawingCommand::CancelDrawing));
    assert!(matches!(commands[1], DrawingCommand::ExitDrawMode));
}

#[test]
fn elevation_received_maps_to_set_elevation_while_active() {
    let intent = DrawingIntent::ElevationReceived {
        index: 2,
        elevation_m: Some(412.0),
    };

    assert_eq!(
        map_intent_to_commands(SessionState::Active, intent.clone()),
        vec![DrawingCommand::SetElevation {
            index: 2,
            elevation_m: Some(412.0),
        }]
    );
    assert!(map_intent_to_commands(SessionState::Completed, intent).is_empty());
}
