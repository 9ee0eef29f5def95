use std::io;

use crate::bands::{rpm_band, RpmBand};
use crate::f1::CarTelemetry;
use crate::formatting::{bar, format_gear};
use crate::overlay::{or_placeholder, write_line};
use crate::surface::{Paint, StatusColour, Style, Surface};

const BAR_STEP: u32 = 5;
const BAR_COL_OFFSET: u16 = 11;

// Rev bar sections start where the previous one ends: 70 % and 90 % in
// 5 % steps.
const CAUTION_REVS_OFFSET: u16 = 70 / BAR_STEP as u16;
const CRITICAL_REVS_OFFSET: u16 = 90 / BAR_STEP as u16;

/// Live speed, RPM and gear plus throttle, brake and rev bars for the
/// player's car.
pub struct TelemetryPanel {
    row: u16,
    col: u16,
}

impl TelemetryPanel {
    pub fn new(row: u16, col: u16) -> TelemetryPanel {
        TelemetryPanel { row, col }
    }

    pub fn draw(&self, surface: &mut dyn Surface, car: &CarTelemetry) -> io::Result<()> {
        let width = surface.width().saturating_sub(self.col);
        let revs = car.rev_lights_percent as f32;

        write_line(surface, self.row, self.col, width, &format!("{:3} km/h | ", car.speed), Style::plain())?;
        surface.put(
            self.row,
            self.col + 13,
            &format!("{:5} RPM | ", car.engine_rpm),
            Style::paint(rpm_band(revs).paint()),
        )?;
        surface.put(
            self.row,
            self.col + 28,
            &format!("Gear: {}", or_placeholder(format_gear(car.gear))),
            Style::plain(),
        )?;

        let bar_col = self.col + BAR_COL_OFFSET;
        let bar_width = width.saturating_sub(BAR_COL_OFFSET);

        let throttle_row = self.row + 2;
        write_line(surface, throttle_row, self.col, BAR_COL_OFFSET, "Throttle :", Style::plain())?;
        write_line(
            surface,
            throttle_row,
            bar_col,
            bar_width,
            &bar(car.throttle * 100.0, BAR_STEP),
            Style::paint(Paint::Status(StatusColour::Green)),
        )?;

        let brake_row = self.row + 3;
        write_line(surface, brake_row, self.col, BAR_COL_OFFSET, "Brake    :", Style::plain())?;
        write_line(
            surface,
            brake_row,
            bar_col,
            bar_width,
            &bar(car.brake * 100.0, BAR_STEP),
            Style::paint(Paint::Status(StatusColour::Red)),
        )?;

        let revs_row = self.row + 4;
        write_line(surface, revs_row, self.col, BAR_COL_OFFSET, "RPM      :", Style::plain())?;
        surface.clear(revs_row, bar_col, bar_width)?;
        if revs > 1.0 {
            let sections = [
                (0, revs.min(70.0), RpmBand::Nominal),
                (CAUTION_REVS_OFFSET, (revs.min(90.0) - 70.0).max(0.0), RpmBand::Caution),
                (CRITICAL_REVS_OFFSET, (revs.min(100.0) - 90.0).max(0.0), RpmBand::Critical),
            ];
            for (offset, pct, band) in sections {
                surface.put(
                    revs_row,
                    bar_col + offset,
                    &bar(pct, BAR_STEP),
                    Style::paint(band.paint()),
                )?;
            }
        }

        Ok(())
    }
}
