use std::collections::HashMap;
use std::fmt;

use crate::f1::{ParticipantsPacket, VehicleSlot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleKey {
    Slot(VehicleSlot),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    UnknownVehicle(VehicleKey),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownVehicle(VehicleKey::Slot(slot)) => {
                write!(f, "no vehicle in slot {}", slot)
            }
            RegistryError::UnknownVehicle(VehicleKey::Name(name)) => {
                write!(f, "no vehicle named '{}'", name)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub name: String,
    pub team_id: u8,
}

/// One decoded roster line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub slot: VehicleSlot,
    pub name: String,
    pub team_id: u8,
    pub is_local: bool,
}

impl RosterEntry {
    /// The roster carried by a participants packet, active cars only.
    pub fn from_packet(packet: &ParticipantsPacket) -> Vec<RosterEntry> {
        let local = packet.header.player_car_index as usize;
        packet
            .participants
            .iter()
            .take(packet.num_active_cars as usize)
            .enumerate()
            .map(|(slot, participant)| RosterEntry {
                slot,
                name: participant.name.clone(),
                team_id: participant.team_id,
                is_local: slot == local,
            })
            .collect()
    }
}

/// Slot index to driver mapping for the current session.
#[derive(Debug, Clone, Default)]
pub struct VehicleRegistry {
    vehicles: HashMap<VehicleSlot, Vehicle>,
    slots_by_name: HashMap<String, VehicleSlot>,
    local_slot: Option<VehicleSlot>,
    initialised: bool,
}

impl VehicleRegistry {
    pub fn new() -> VehicleRegistry {
        VehicleRegistry::default()
    }

    /// Replaces the whole mapping with `roster`.
    pub fn populate<I>(&mut self, roster: I)
    where
        I: IntoIterator<Item = RosterEntry>,
    {
        let mut vehicles = HashMap::new();
        let mut slots_by_name = HashMap::new();
        let mut local_slot = None;

        for entry in roster {
            if entry.is_local {
                local_slot = Some(entry.slot);
            }
            slots_by_name.insert(entry.name.clone(), entry.slot);
            vehicles.insert(entry.slot, Vehicle { name: entry.name, team_id: entry.team_id });
        }

        self.vehicles = vehicles;
        self.slots_by_name = slots_by_name;
        self.local_slot = local_slot;
        self.initialised = true;
    }

    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn local_slot(&self) -> Option<VehicleSlot> {
        self.local_slot
    }

    pub fn vehicle(&self, slot: VehicleSlot) -> Result<&Vehicle, RegistryError> {
        self.vehicles
            .get(&slot)
            .ok_or(RegistryError::UnknownVehicle(VehicleKey::Slot(slot)))
    }

    pub fn name_of(&self, slot: VehicleSlot) -> Result<&str, RegistryError> {
        self.vehicle(slot).map(|vehicle| vehicle.name.as_str())
    }

    pub fn team_of(&self, slot: VehicleSlot) -> Result<u8, RegistryError> {
        self.vehicle(slot).map(|vehicle| vehicle.team_id)
    }

    pub fn slot_of(&self, name: &str) -> Result<VehicleSlot, RegistryError> {
        self.slots_by_name
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownVehicle(VehicleKey::Name(name.to_string())))
    }
}
