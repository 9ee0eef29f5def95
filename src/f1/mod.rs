pub mod data_collector;
pub mod data_producer;
pub mod decoder;

use crate::formatting::FormatError;

/// Number of car slots in every F1 2019 per-car array.
pub const MAX_CARS: usize = 20;

pub type VehicleSlot = usize;

#[derive(Debug, Clone, PartialEq)]
pub struct PacketHeader {
    pub packet_format: u16,
    pub game_major_version: u8,
    pub game_minor_version: u8,
    pub packet_version: u8,
    pub packet_id: u8,
    pub session_uid: u64,
    pub session_time: f32,
    pub frame_identifier: u32,
    pub player_car_index: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionData {
    pub header: PacketHeader,
    pub weather: u8,
    pub track_temperature: i8,
    pub air_temperature: i8,
    pub total_laps: u8,
    pub track_length: u16,
    pub session_type: u8,
    pub track_id: i8,
    pub formula: u8,
    pub session_time_left: u16,
    pub session_duration: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LapData {
    pub last_lap_time: f32,
    pub current_lap_time: f32,
    pub best_lap_time: f32,
    pub car_position: u8,
    pub current_lap_num: u8,
    pub pit_status: u8,
    pub penalties: u8,
    pub result_status: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LapDataPacket {
    pub header: PacketHeader,
    pub cars: Vec<LapData>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub ai_controlled: bool,
    pub driver_id: u8,
    pub team_id: u8,
    pub race_number: u8,
    pub nationality: u8,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantsPacket {
    pub header: PacketHeader,
    pub num_active_cars: u8,
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarTelemetry {
    pub speed: u16,
    pub throttle: f32,
    pub steer: f32,
    pub brake: f32,
    pub clutch: u8,
    pub gear: i8,
    pub engine_rpm: u16,
    pub drs: bool,
    pub rev_lights_percent: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarTelemetryPacket {
    pub header: PacketHeader,
    pub cars: Vec<CarTelemetry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarStatus {
    pub fuel_in_tank: f32,
    pub max_rpm: u16,
    pub tyres_wear: [u8; 4],
    // Wheel order on the wire: rear left, rear right, front left, front right.
    pub tyres_damage: [u8; 4],
    pub front_left_wing_damage: u8,
    pub front_right_wing_damage: u8,
    pub rear_wing_damage: u8,
    pub engine_damage: u8,
    pub gear_box_damage: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarStatusPacket {
    pub header: PacketHeader,
    pub cars: Vec<CarStatus>,
}

/// A decoded datagram. Packet kinds the dashboard has no use for arrive as
/// `Other` so newer protocol revisions keep flowing through.
#[derive(Debug, Clone, PartialEq)]
pub enum Packet {
    Session(SessionData),
    LapData(LapDataPacket),
    Participants(ParticipantsPacket),
    CarTelemetry(CarTelemetryPacket),
    CarStatus(CarStatusPacket),
    Other(PacketHeader),
}

impl Packet {
    pub fn header(&self) -> &PacketHeader {
        match self {
            Packet::Session(packet) => &packet.header,
            Packet::LapData(packet) => &packet.header,
            Packet::Participants(packet) => &packet.header,
            Packet::CarTelemetry(packet) => &packet.header,
            Packet::CarStatus(packet) => &packet.header,
            Packet::Other(header) => header,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LapStatus {
    Invalid,
    Inactive,
    Active,
    Finished,
    Disqualified,
    NotClassified,
    Retired,
}

impl TryFrom<u8> for LapStatus {
    type Error = FormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LapStatus::Invalid),
            1 => Ok(LapStatus::Inactive),
            2 => Ok(LapStatus::Active),
            3 => Ok(LapStatus::Finished),
            4 => Ok(LapStatus::Disqualified),
            5 => Ok(LapStatus::NotClassified),
            6 => Ok(LapStatus::Retired),
            _ => Err(FormatError::UnknownEnumValue {
                kind: "result status",
                value: value as i64,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lap_status_from_wire_byte() {
        assert_eq!(LapStatus::try_from(2).unwrap(), LapStatus::Active);
        assert_eq!(LapStatus::try_from(6).unwrap(), LapStatus::Retired);
        assert!(matches!(
            LapStatus::try_from(7),
            Err(FormatError::UnknownEnumValue { value: 7, .. })
        ));
    }
}
