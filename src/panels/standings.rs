use std::io;

use crate::f1::{LapData, LapStatus, VehicleSlot, MAX_CARS};
use crate::formatting::{format_driver_label, format_duration, format_position, format_status};
use crate::overlay::write_line;
use crate::registry::VehicleRegistry;
use crate::surface::{Paint, Style, Surface};

const HEADER: &str =
    " P. NAME                 | CURRENT LAP  | LAST LAP     | BEST LAP     | STATUS";

const NAME_WIDTH: usize = 20;

/// One car's line in the standings, rebuilt from every lap-data packet.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingsRow {
    pub slot: VehicleSlot,
    pub position: u8,
    pub current_lap_time: f32,
    pub last_lap_time: f32,
    pub best_lap_time: f32,
    /// `None` when the game sent a status this build does not know.
    pub lap_status: Option<LapStatus>,
    pub in_pit: bool,
    pub penalties: u8,
}

impl StandingsRow {
    pub fn from_lap_data(slot: VehicleSlot, lap: &LapData) -> StandingsRow {
        let lap_status = LapStatus::try_from(lap.result_status)
            .map_err(|err| warn!("Slot {}: {}", slot, err))
            .ok();

        StandingsRow {
            slot,
            position: lap.car_position,
            current_lap_time: lap.current_lap_time,
            last_lap_time: lap.last_lap_time,
            best_lap_time: lap.best_lap_time,
            lap_status,
            in_pit: lap.pit_status != 0,
            penalties: lap.penalties,
        }
    }
}

pub struct StandingsPanel {
    header_row: u16,
    first_row: u16,
    col: u16,
    width: u16,
    local_driver: String,
}

impl StandingsPanel {
    pub fn new(header_row: u16, first_row: u16, col: u16, width: u16, local_driver: String) -> StandingsPanel {
        StandingsPanel { header_row, first_row, col, width, local_driver }
    }

    /// Draws `rows` top to bottom in the order given.
    pub fn draw(
        &self,
        surface: &mut dyn Surface,
        rows: &[StandingsRow],
        registry: &VehicleRegistry,
    ) -> io::Result<()> {
        write_line(surface, self.header_row, self.col, self.width, HEADER, Style::plain())?;

        for line in 0..MAX_CARS {
            let row = self.first_row + line as u16;
            let text = rows.get(line).and_then(|standing| self.format_row(standing, registry));

            match text {
                Some((text, team_id)) => {
                    let style = Style::paint(Paint::Team(team_id)).bold();
                    write_line(surface, row, self.col, self.width, &text, style)?;
                }
                None => surface.clear(row, self.col, self.width)?,
            }
        }

        Ok(())
    }

    fn format_row(&self, row: &StandingsRow, registry: &VehicleRegistry) -> Option<(String, u8)> {
        let vehicle = match registry.vehicle(row.slot) {
            Ok(vehicle) => vehicle,
            Err(err) => {
                debug!("Skipping standings row: {}", err);
                return None;
            }
        };

        let label: String = format_driver_label(&vehicle.name, &self.local_driver)
            .chars()
            .take(NAME_WIDTH)
            .collect();
        let text = format!(
            "{:<3} {:<width$} | {} | {} | {} | {}",
            format_position(row),
            label,
            format_duration(row.current_lap_time, true),
            format_duration(row.last_lap_time, true),
            format_duration(row.best_lap_time, true),
            format_status(row),
            width = NAME_WIDTH,
        );

        Some((text, vehicle.team_id))
    }
}
