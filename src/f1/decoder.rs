use std::fmt;

use crate::f1::{
    CarStatus, CarStatusPacket, CarTelemetry, CarTelemetryPacket, LapData, LapDataPacket, Packet,
    PacketHeader, Participant, ParticipantsPacket, SessionData, MAX_CARS,
};

pub const PACKET_FORMAT_2019: u16 = 2019;

const PACKET_ID_SESSION: u8 = 1;
const PACKET_ID_LAP_DATA: u8 = 2;
const PACKET_ID_PARTICIPANTS: u8 = 4;
const PACKET_ID_CAR_TELEMETRY: u8 = 6;
const PACKET_ID_CAR_STATUS: u8 = 7;

const NAME_LENGTH: usize = 48;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    Truncated { needed: usize, got: usize },
    UnsupportedFormat(u16),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Truncated { needed, got } => {
                write!(f, "datagram truncated: needed {} bytes, got {}", needed, got)
            }
            DecodeError::UnsupportedFormat(format) => {
                write!(f, "unsupported packet format {}", format)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Little-endian cursor over one datagram.
struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Reader<'a> {
        Reader { data, offset: 0 }
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let end = self.offset + N;
        let bytes = self.data.get(self.offset..end).ok_or(DecodeError::Truncated {
            needed: end,
            got: self.data.len(),
        })?;
        self.offset = end;

        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    fn skip(&mut self, count: usize) -> Result<(), DecodeError> {
        let end = self.offset + count;
        if end > self.data.len() {
            return Err(DecodeError::Truncated { needed: end, got: self.data.len() });
        }
        self.offset = end;
        Ok(())
    }

    fn u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take::<1>()?[0])
    }

    fn i8(&mut self) -> Result<i8, DecodeError> {
        Ok(i8::from_le_bytes(self.take::<1>()?))
    }

    fn u16(&mut self) -> Result<u16, DecodeError> {
        Ok(u16::from_le_bytes(self.take::<2>()?))
    }

    fn u32(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.take::<4>()?))
    }

    fn u64(&mut self) -> Result<u64, DecodeError> {
        Ok(u64::from_le_bytes(self.take::<8>()?))
    }

    fn f32(&mut self) -> Result<f32, DecodeError> {
        Ok(f32::from_le_bytes(self.take::<4>()?))
    }

    fn name(&mut self) -> Result<String, DecodeError> {
        let raw = self.take::<NAME_LENGTH>()?;
        let end = raw.iter().position(|&b| b == 0).unwrap_or(NAME_LENGTH);
        Ok(String::from_utf8_lossy(&raw[..end]).into_owned())
    }
}

/// Decodes one F1 2019 UDP datagram.
pub fn decode(data: &[u8]) -> Result<Packet, DecodeError> {
    let mut reader = Reader::new(data);
    let header = decode_header(&mut reader)?;

    if header.packet_format != PACKET_FORMAT_2019 {
        return Err(DecodeError::UnsupportedFormat(header.packet_format));
    }

    let packet = match header.packet_id {
        PACKET_ID_SESSION => Packet::Session(decode_session(header, &mut reader)?),
        PACKET_ID_LAP_DATA => Packet::LapData(LapDataPacket {
            header,
            cars: decode_cars(&mut reader, decode_lap_data)?,
        }),
        PACKET_ID_PARTICIPANTS => Packet::Participants(decode_participants(header, &mut reader)?),
        PACKET_ID_CAR_TELEMETRY => Packet::CarTelemetry(CarTelemetryPacket {
            header,
            cars: decode_cars(&mut reader, decode_car_telemetry)?,
        }),
        PACKET_ID_CAR_STATUS => Packet::CarStatus(CarStatusPacket {
            header,
            cars: decode_cars(&mut reader, decode_car_status)?,
        }),
        _ => Packet::Other(header),
    };

    Ok(packet)
}

fn decode_header(reader: &mut Reader) -> Result<PacketHeader, DecodeError> {
    Ok(PacketHeader {
        packet_format: reader.u16()?,
        game_major_version: reader.u8()?,
        game_minor_version: reader.u8()?,
        packet_version: reader.u8()?,
        packet_id: reader.u8()?,
        session_uid: reader.u64()?,
        session_time: reader.f32()?,
        frame_identifier: reader.u32()?,
        player_car_index: reader.u8()?,
    })
}

fn decode_cars<T>(
    reader: &mut Reader,
    decode_car: fn(&mut Reader) -> Result<T, DecodeError>,
) -> Result<Vec<T>, DecodeError> {
    (0..MAX_CARS).map(|_| decode_car(reader)).collect()
}

fn decode_session(header: PacketHeader, reader: &mut Reader) -> Result<SessionData, DecodeError> {
    Ok(SessionData {
        header,
        weather: reader.u8()?,
        track_temperature: reader.i8()?,
        air_temperature: reader.i8()?,
        total_laps: reader.u8()?,
        track_length: reader.u16()?,
        session_type: reader.u8()?,
        track_id: reader.i8()?,
        formula: reader.u8()?,
        session_time_left: reader.u16()?,
        session_duration: reader.u16()?,
    })
}

fn decode_lap_data(reader: &mut Reader) -> Result<LapData, DecodeError> {
    let last_lap_time = reader.f32()?;
    let current_lap_time = reader.f32()?;
    let best_lap_time = reader.f32()?;
    // sector times, lap/total distance, safety car delta
    reader.skip(5 * 4)?;
    let car_position = reader.u8()?;
    let current_lap_num = reader.u8()?;
    let pit_status = reader.u8()?;
    // sector, current lap invalid
    reader.skip(2)?;
    let penalties = reader.u8()?;
    // grid position, driver status
    reader.skip(2)?;
    let result_status = reader.u8()?;

    Ok(LapData {
        last_lap_time,
        current_lap_time,
        best_lap_time,
        car_position,
        current_lap_num,
        pit_status,
        penalties,
        result_status,
    })
}

fn decode_participants(
    header: PacketHeader,
    reader: &mut Reader,
) -> Result<ParticipantsPacket, DecodeError> {
    let num_active_cars = reader.u8()?;
    let participants = decode_cars(reader, |reader| {
        let participant = Participant {
            ai_controlled: reader.u8()? != 0,
            driver_id: reader.u8()?,
            team_id: reader.u8()?,
            race_number: reader.u8()?,
            nationality: reader.u8()?,
            name: reader.name()?,
        };
        // your telemetry
        reader.skip(1)?;
        Ok(participant)
    })?;

    Ok(ParticipantsPacket { header, num_active_cars, participants })
}

fn decode_car_telemetry(reader: &mut Reader) -> Result<CarTelemetry, DecodeError> {
    let telemetry = CarTelemetry {
        speed: reader.u16()?,
        throttle: reader.f32()?,
        steer: reader.f32()?,
        brake: reader.f32()?,
        clutch: reader.u8()?,
        gear: reader.i8()?,
        engine_rpm: reader.u16()?,
        drs: reader.u8()? != 0,
        rev_lights_percent: reader.u8()?,
    };
    // brake, surface and inner tyre temperatures, engine temperature,
    // tyre pressures, surface types
    reader.skip(3 * 4 * 2 + 2 + 4 * 4 + 4)?;
    Ok(telemetry)
}

fn decode_car_status(reader: &mut Reader) -> Result<CarStatus, DecodeError> {
    // traction control, abs, fuel mix, brake bias, pit limiter
    reader.skip(5)?;
    let fuel_in_tank = reader.f32()?;
    // fuel capacity, remaining laps
    reader.skip(2 * 4)?;
    let max_rpm = reader.u16()?;
    // idle rpm, max gears, drs allowed
    reader.skip(2 + 1 + 1)?;
    let tyres_wear = reader.take::<4>()?;
    // actual and visual compound
    reader.skip(2)?;
    let tyres_damage = reader.take::<4>()?;
    let status = CarStatus {
        fuel_in_tank,
        max_rpm,
        tyres_wear,
        tyres_damage,
        front_left_wing_damage: reader.u8()?,
        front_right_wing_damage: reader.u8()?,
        rear_wing_damage: reader.u8()?,
        engine_damage: reader.u8()?,
        gear_box_damage: reader.u8()?,
    };
    // fia flags, ers store, deploy mode, ers harvested (mguk, mguh), ers deployed
    reader.skip(1 + 4 + 1 + 4 + 4 + 4)?;
    Ok(status)
}
