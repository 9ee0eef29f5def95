use std::io;

use crate::f1::SessionData;
use crate::formatting::{format_duration, format_session_type, format_track_id};
use crate::overlay::or_placeholder;
use crate::surface::{Style, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionInfo {
    pub session_type: u8,
    pub track_id: i8,
    pub elapsed_seconds: f32,
    pub total_seconds: f32,
}

impl From<&SessionData> for SessionInfo {
    fn from(session: &SessionData) -> Self {
        SessionInfo {
            session_type: session.session_type,
            track_id: session.track_id,
            elapsed_seconds: session.session_duration.saturating_sub(session.session_time_left)
                as f32,
            total_seconds: session.session_duration as f32,
        }
    }
}

/// Two centred lines: session name and track, then elapsed / total time.
pub struct SessionPanel {
    row: u16,
}

impl SessionPanel {
    pub fn new(row: u16) -> SessionPanel {
        SessionPanel { row }
    }

    pub fn draw(&self, surface: &mut dyn Surface, info: &SessionInfo) -> io::Result<()> {
        let title = format!(
            "{} - {}",
            or_placeholder(format_session_type(info.session_type)),
            or_placeholder(format_track_id(info.track_id)),
        );
        let clock = format!(
            "{} / {}",
            format_duration(info.elapsed_seconds, false),
            format_duration(info.total_seconds, false),
        );

        let width = surface.width();
        for (row, text) in [(self.row, &title), (self.row + 1, &clock)] {
            surface.clear(row, 0, width)?;
            surface.put(row, centre(width, text), text, Style::plain())?;
        }
        Ok(())
    }
}

fn centre(width: u16, text: &str) -> u16 {
    width.saturating_sub(text.chars().count() as u16) / 2
}
