#![allow(dead_code)]

use f1_dash::config::Config;
use f1_dash::dispatcher::{Context, Dispatcher};
use f1_dash::f1::{
    CarStatus, CarStatusPacket, CarTelemetry, CarTelemetryPacket, LapData, LapDataPacket, Packet,
    PacketHeader, Participant, ParticipantsPacket, SessionData, MAX_CARS,
};
use f1_dash::surface::MemorySurface;

pub const WIDTH: u16 = 120;
pub const HEIGHT: u16 = 32;

pub fn header(packet_id: u8, player_car_index: u8) -> PacketHeader {
    PacketHeader {
        packet_format: 2019,
        game_major_version: 1,
        game_minor_version: 22,
        packet_version: 1,
        packet_id,
        session_uid: 0xF1,
        session_time: 12.5,
        frame_identifier: 300,
        player_car_index,
    }
}

pub fn dispatcher(driver_name: &str) -> Dispatcher<MemorySurface> {
    let config = Config { driver_name: driver_name.to_string(), ..Config::default() };
    let context = Context::new(config).unwrap();
    Dispatcher::new(&context, MemorySurface::new(WIDTH, HEIGHT))
}

/// `(name, team)` per slot; the player sits in `local`.
pub fn participants(drivers: &[(&str, u8)], local: u8) -> Packet {
    let mut participants: Vec<Participant> = drivers
        .iter()
        .map(|(name, team_id)| Participant {
            ai_controlled: true,
            driver_id: 0,
            team_id: *team_id,
            race_number: 0,
            nationality: 0,
            name: name.to_string(),
        })
        .collect();
    participants.resize(
        MAX_CARS,
        Participant {
            ai_controlled: true,
            driver_id: 0,
            team_id: 0,
            race_number: 0,
            nationality: 0,
            name: String::new(),
        },
    );

    Packet::Participants(ParticipantsPacket {
        header: header(4, local),
        num_active_cars: drivers.len() as u8,
        participants,
    })
}

pub fn lap(position: u8) -> LapData {
    LapData {
        last_lap_time: 83.5,
        current_lap_time: 41.25,
        best_lap_time: 82.75,
        car_position: position,
        current_lap_num: 3,
        pit_status: 0,
        penalties: 0,
        result_status: 2,
    }
}

/// Lap data with the given running position per slot; the rest of the
/// grid is empty.
pub fn lap_data(positions: &[u8]) -> Packet {
    let mut cars: Vec<LapData> = positions.iter().map(|&position| lap(position)).collect();
    cars.resize(MAX_CARS, lap(0));
    Packet::LapData(LapDataPacket { header: header(2, 0), cars })
}

pub fn telemetry(speed: u16) -> Packet {
    let car = CarTelemetry {
        speed,
        throttle: 0.5,
        steer: 0.0,
        brake: 0.0,
        clutch: 0,
        gear: 4,
        engine_rpm: 10500,
        drs: false,
        rev_lights_percent: 40,
    };
    Packet::CarTelemetry(CarTelemetryPacket { header: header(6, 0), cars: vec![car; MAX_CARS] })
}

pub fn car_status(front_left_wing_damage: u8) -> Packet {
    let car = CarStatus {
        fuel_in_tank: 20.0,
        max_rpm: 12000,
        tyres_wear: [0; 4],
        tyres_damage: [0; 4],
        front_left_wing_damage,
        front_right_wing_damage: 0,
        rear_wing_damage: 0,
        engine_damage: 0,
        gear_box_damage: 0,
    };
    Packet::CarStatus(CarStatusPacket { header: header(7, 0), cars: vec![car; MAX_CARS] })
}

pub fn session() -> Packet {
    Packet::Session(SessionData {
        header: header(1, 0),
        weather: 0,
        track_temperature: 30,
        air_temperature: 22,
        total_laps: 53,
        track_length: 5793,
        session_type: 10,
        track_id: 11,
        formula: 0,
        session_time_left: 3600 - 754,
        session_duration: 3600,
    })
}
