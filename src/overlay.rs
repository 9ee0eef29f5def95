use std::io;

use crate::car::CarLayout;
use crate::f1::CarTelemetry;
use crate::formatting::FormatError;
use crate::panels::damage::{DamagePanel, DamageSnapshot};
use crate::panels::session::{SessionInfo, SessionPanel};
use crate::panels::standings::{StandingsPanel, StandingsRow};
use crate::panels::telemetry::TelemetryPanel;
use crate::registry::VehicleRegistry;
use crate::surface::{Style, Surface};

pub const SESSION_ROW: u16 = 0;
pub const STANDINGS_HEADER_ROW: u16 = 3;
pub const STANDINGS_ROW: u16 = 5;
pub const STANDINGS_COL: u16 = 2;
pub const TELEMETRY_ROW: u16 = 26;
pub const TELEMETRY_COL: u16 = 2;
pub const CAR_ROW: u16 = 5;
pub const CAR_COL: u16 = 85;

/// Shown instead of a field the formatter could not produce.
pub const PLACEHOLDER: &str = "?";

/// Clears `len` cells from `col`, then writes `text` there.
pub fn write_line(
    surface: &mut dyn Surface,
    row: u16,
    col: u16,
    len: u16,
    text: &str,
    style: Style,
) -> io::Result<()> {
    surface.clear(row, col, len)?;
    surface.put(row, col, text, style)
}

pub fn or_placeholder(field: Result<&'static str, FormatError>) -> &'static str {
    field.unwrap_or_else(|err| {
        debug!("Rendering placeholder: {}", err);
        PLACEHOLDER
    })
}

/// Draws the dashboard panels. Holds the fixed screen layout only; all
/// data arrives with each call.
pub struct Renderer {
    session: SessionPanel,
    standings: StandingsPanel,
    telemetry: TelemetryPanel,
    damage: DamagePanel,
}

impl Renderer {
    pub fn new(car: CarLayout, local_driver: String) -> Renderer {
        Renderer {
            session: SessionPanel::new(SESSION_ROW),
            standings: StandingsPanel::new(
                STANDINGS_HEADER_ROW,
                STANDINGS_ROW,
                STANDINGS_COL,
                CAR_COL - STANDINGS_COL,
                local_driver,
            ),
            telemetry: TelemetryPanel::new(TELEMETRY_ROW, TELEMETRY_COL),
            damage: DamagePanel::new(CAR_ROW, CAR_COL, car),
        }
    }

    pub fn draw_session(&self, surface: &mut dyn Surface, info: &SessionInfo) -> io::Result<()> {
        self.session.draw(surface, info)
    }

    pub fn draw_standings(
        &self,
        surface: &mut dyn Surface,
        rows: &[StandingsRow],
        registry: &VehicleRegistry,
    ) -> io::Result<()> {
        self.standings.draw(surface, rows, registry)
    }

    pub fn draw_telemetry(&self, surface: &mut dyn Surface, car: &CarTelemetry) -> io::Result<()> {
        self.telemetry.draw(surface, car)
    }

    pub fn draw_damage(&self, surface: &mut dyn Surface, damage: &DamageSnapshot) -> io::Result<()> {
        self.damage.draw(surface, damage)
    }

    pub fn flush(&self, surface: &mut dyn Surface) -> io::Result<()> {
        surface.flush()
    }
}
