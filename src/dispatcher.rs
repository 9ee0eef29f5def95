use std::io;

use crate::car::CarLayout;
use crate::config::Config;
use crate::error::DashError;
use crate::f1::{LapDataPacket, Packet};
use crate::overlay::Renderer;
use crate::panels::damage::DamageSnapshot;
use crate::panels::session::SessionInfo;
use crate::panels::standings::StandingsRow;
use crate::registry::{RosterEntry, VehicleRegistry};
use crate::surface::Surface;

/// Everything built once at startup and handed to the dispatcher.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub car: CarLayout,
}

impl Context {
    /// Fails if the built-in car diagram is malformed.
    pub fn new(config: Config) -> Result<Context, DashError> {
        Ok(Context { config, car: CarLayout::new()? })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    Uninitialised,
    Ready,
}

/// What a single dispatch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    Session,
    Roster,
    Standings(usize),
    Telemetry,
    Damage,
    Skipped,
}

pub struct Dispatcher<S: Surface> {
    registry: VehicleRegistry,
    renderer: Renderer,
    surface: S,
    state: DispatcherState,
}

impl<S: Surface> Dispatcher<S> {
    pub fn new(context: &Context, surface: S) -> Dispatcher<S> {
        Dispatcher {
            registry: VehicleRegistry::new(),
            renderer: Renderer::new(context.car.clone(), context.config.driver_name.clone()),
            surface,
            state: DispatcherState::Uninitialised,
        }
    }

    pub fn state(&self) -> DispatcherState {
        self.state
    }

    pub fn registry(&self) -> &VehicleRegistry {
        &self.registry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn prepare(&mut self) -> io::Result<()> {
        self.surface.setup()?;
        self.renderer.flush(&mut self.surface)
    }

    pub fn release(&mut self) -> io::Result<()> {
        self.surface.release()
    }

    /// Routes one packet to the registry or a panel, then flushes once.
    pub fn dispatch(&mut self, packet: &Packet) -> Result<Dispatched, DashError> {
        let dispatched = self.route(packet)?;
        self.renderer.flush(&mut self.surface)?;
        Ok(dispatched)
    }

    fn route(&mut self, packet: &Packet) -> io::Result<Dispatched> {
        match packet {
            Packet::Session(session) => {
                self.renderer.draw_session(&mut self.surface, &SessionInfo::from(session))?;
                Ok(Dispatched::Session)
            }
            Packet::Participants(participants) => {
                self.registry.populate(RosterEntry::from_packet(participants));
                if self.state == DispatcherState::Uninitialised {
                    info!(
                        "Roster received: {} cars, local car in slot {:?}",
                        self.registry.len(),
                        self.registry.local_slot()
                    );
                }
                self.state = DispatcherState::Ready;
                Ok(Dispatched::Roster)
            }
            Packet::LapData(lap_data) => {
                if self.state != DispatcherState::Ready {
                    return Ok(Dispatched::Skipped);
                }
                let rows = self.standings(lap_data);
                self.renderer.draw_standings(&mut self.surface, &rows, &self.registry)?;
                Ok(Dispatched::Standings(rows.len()))
            }
            Packet::CarTelemetry(telemetry) => match self.local_car(&telemetry.cars) {
                Some(car) => {
                    self.renderer.draw_telemetry(&mut self.surface, car)?;
                    Ok(Dispatched::Telemetry)
                }
                None => Ok(Dispatched::Skipped),
            },
            Packet::CarStatus(status) => match self.local_car(&status.cars) {
                Some(car) => {
                    self.renderer.draw_damage(&mut self.surface, &DamageSnapshot::from(car))?;
                    Ok(Dispatched::Damage)
                }
                None => Ok(Dispatched::Skipped),
            },
            Packet::Other(header) => {
                debug!("Ignoring packet id {}", header.packet_id);
                Ok(Dispatched::Skipped)
            }
        }
    }

    /// Rows for every registered car, ordered by running position.
    fn standings(&self, packet: &LapDataPacket) -> Vec<StandingsRow> {
        let mut rows: Vec<StandingsRow> = packet
            .cars
            .iter()
            .enumerate()
            .filter(|(slot, _)| self.registry.vehicle(*slot).is_ok())
            .map(|(slot, lap)| StandingsRow::from_lap_data(slot, lap))
            .collect();

        rows.sort_by_key(|row| row.position);
        rows
    }

    fn local_car<'a, T>(&self, cars: &'a [T]) -> Option<&'a T> {
        self.registry.local_slot().and_then(|slot| cars.get(slot))
    }
}
