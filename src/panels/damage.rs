use std::io;

use crate::bands::damage_band;
use crate::car::{CarLayout, Segment};
use crate::f1::CarStatus;
use crate::surface::{Style, Surface};

/// No telemetry field reports damage to the body itself.
pub const BODY_DAMAGE: u8 = 0;

/// Damage percentage per car segment, taken from one car-status packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DamageSnapshot {
    damage: [u8; 8],
}

impl DamageSnapshot {
    pub fn undamaged() -> DamageSnapshot {
        DamageSnapshot::default()
    }

    pub fn with(mut self, segment: Segment, pct: u8) -> DamageSnapshot {
        self.damage[segment.index()] = pct;
        self
    }

    pub fn get(&self, segment: Segment) -> u8 {
        self.damage[segment.index()]
    }
}

impl From<&CarStatus> for DamageSnapshot {
    fn from(status: &CarStatus) -> Self {
        let [back_left, back_right, front_left, front_right] = status.tyres_damage;

        DamageSnapshot::undamaged()
            .with(Segment::LeftWing, status.front_left_wing_damage)
            .with(Segment::RightWing, status.front_right_wing_damage)
            .with(Segment::RearWing, status.rear_wing_damage)
            .with(Segment::BackLeftTyre, back_left)
            .with(Segment::BackRightTyre, back_right)
            .with(Segment::FrontLeftTyre, front_left)
            .with(Segment::FrontRightTyre, front_right)
            .with(Segment::Body, BODY_DAMAGE)
    }
}

pub struct DamagePanel {
    row: u16,
    col: u16,
    car: CarLayout,
}

impl DamagePanel {
    pub fn new(row: u16, col: u16, car: CarLayout) -> DamagePanel {
        DamagePanel { row, col, car }
    }

    /// Repaints every segment at its fixed origin.
    pub fn draw(&self, surface: &mut dyn Surface, damage: &DamageSnapshot) -> io::Result<()> {
        for segment in Segment::ALL {
            let style = Style::paint(damage_band(damage.get(segment) as f32).paint());
            let (x, y) = self.car.origin(segment);

            for (line_no, line) in self.car.block(segment).lines().enumerate() {
                surface.put(self.row + y + line_no as u16, self.col + x, line, style)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bands::DamageBand;
    use crate::surface::MemorySurface;

    #[test]
    fn snapshot_follows_wire_tyre_order() {
        let status = CarStatus {
            fuel_in_tank: 0.0,
            max_rpm: 0,
            tyres_wear: [0; 4],
            tyres_damage: [1, 2, 3, 4],
            front_left_wing_damage: 10,
            front_right_wing_damage: 20,
            rear_wing_damage: 30,
            engine_damage: 99,
            gear_box_damage: 99,
        };
        let snapshot = DamageSnapshot::from(&status);

        assert_eq!(snapshot.get(Segment::BackLeftTyre), 1);
        assert_eq!(snapshot.get(Segment::BackRightTyre), 2);
        assert_eq!(snapshot.get(Segment::FrontLeftTyre), 3);
        assert_eq!(snapshot.get(Segment::FrontRightTyre), 4);
        assert_eq!(snapshot.get(Segment::RightWing), 20);
        assert_eq!(snapshot.get(Segment::Body), BODY_DAMAGE);
    }

    #[test]
    fn segments_are_banded_independently() {
        let mut surface = MemorySurface::new(120, 30);
        let panel = DamagePanel::new(5, 85, CarLayout::new().unwrap());
        let damage = DamageSnapshot::undamaged().with(Segment::LeftWing, 70);
        panel.draw(&mut surface, &damage).unwrap();

        let critical = Style::paint(DamageBand::Critical.paint());
        let nominal = Style::paint(DamageBand::Nominal.paint());
        // first column of the left wing, right wing and body
        assert_eq!(surface.style_at(5, 85), Some(critical));
        assert_eq!(surface.style_at(5, 100), Some(nominal));
        assert_eq!(surface.style_at(9, 92), Some(nominal));
        assert_eq!(surface.line(5).trim(), r"___________/----\___________");
    }
}
