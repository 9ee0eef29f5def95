use crate::surface::{Paint, StatusColour};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DamageBand {
    Nominal,
    Caution,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RpmBand {
    Nominal,
    Caution,
    Critical,
}

pub fn damage_band(pct: f32) -> DamageBand {
    if pct <= 15.0 {
        DamageBand::Nominal
    } else if pct <= 40.0 {
        DamageBand::Caution
    } else if pct <= 60.0 {
        DamageBand::Warning
    } else {
        DamageBand::Critical
    }
}

pub fn rpm_band(pct: f32) -> RpmBand {
    if pct > 90.0 {
        RpmBand::Critical
    } else if pct > 70.0 {
        RpmBand::Caution
    } else {
        RpmBand::Nominal
    }
}

impl DamageBand {
    pub fn paint(self) -> Paint {
        match self {
            DamageBand::Nominal => Paint::Status(StatusColour::Green),
            DamageBand::Caution => Paint::Status(StatusColour::Yellow),
            DamageBand::Warning => Paint::Status(StatusColour::Orange),
            DamageBand::Critical => Paint::Status(StatusColour::Red),
        }
    }
}

impl RpmBand {
    pub fn paint(self) -> Paint {
        match self {
            RpmBand::Nominal => Paint::Default,
            RpmBand::Caution => Paint::Status(StatusColour::Yellow),
            RpmBand::Critical => Paint::Status(StatusColour::Red),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_band_boundaries() {
        assert_eq!(damage_band(0.0), DamageBand::Nominal);
        assert_eq!(damage_band(15.0), DamageBand::Nominal);
        assert_eq!(damage_band(16.0), DamageBand::Caution);
        assert_eq!(damage_band(40.0), DamageBand::Caution);
        assert_eq!(damage_band(41.0), DamageBand::Warning);
        assert_eq!(damage_band(60.0), DamageBand::Warning);
        assert_eq!(damage_band(61.0), DamageBand::Critical);
        assert_eq!(damage_band(100.0), DamageBand::Critical);
    }

    #[test]
    fn damage_band_never_decreases() {
        let mut previous = damage_band(0.0);
        for pct in 0..=100 {
            let band = damage_band(pct as f32);
            assert!(band >= previous, "band dropped at {}%", pct);
            assert_eq!(band, damage_band(pct as f32));
            previous = band;
        }
    }

    #[test]
    fn rpm_band_boundaries() {
        assert_eq!(rpm_band(0.0), RpmBand::Nominal);
        assert_eq!(rpm_band(70.0), RpmBand::Nominal);
        assert_eq!(rpm_band(71.0), RpmBand::Caution);
        assert_eq!(rpm_band(90.0), RpmBand::Caution);
        assert_eq!(rpm_band(91.0), RpmBand::Critical);
        assert_eq!(RpmBand::Nominal.paint(), Paint::Default);
    }
}
