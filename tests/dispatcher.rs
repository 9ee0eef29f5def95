mod common;

use f1_dash::bands::DamageBand;
use f1_dash::dispatcher::{Dispatched, DispatcherState};
use f1_dash::f1::{LapDataPacket, Packet};
use f1_dash::overlay::{CAR_COL, CAR_ROW, STANDINGS_ROW, TELEMETRY_ROW};
use f1_dash::surface::{Paint, Style};

use common::*;

#[test]
fn lap_data_before_roster_is_skipped() {
    let mut dispatcher = dispatcher("");

    assert_eq!(dispatcher.dispatch(&lap_data(&[1, 2])).unwrap(), Dispatched::Skipped);
    assert_eq!(dispatcher.state(), DispatcherState::Uninitialised);
    assert!(dispatcher.registry().is_empty());
    assert_eq!(dispatcher.surface().line(STANDINGS_ROW), "");
}

#[test]
fn roster_makes_the_dispatcher_ready() {
    let mut dispatcher = dispatcher("");

    let roster = participants(&[("Max Verstappen", 2), ("Lewis Hamilton", 0)], 1);
    assert_eq!(dispatcher.dispatch(&roster).unwrap(), Dispatched::Roster);

    assert_eq!(dispatcher.state(), DispatcherState::Ready);
    assert_eq!(dispatcher.registry().len(), 2);
    assert_eq!(dispatcher.registry().local_slot(), Some(1));
    assert_eq!(dispatcher.registry().slot_of("Max Verstappen").unwrap(), 0);
}

#[test]
fn standings_follow_running_position() {
    let mut dispatcher = dispatcher("Lewis Hamilton");
    dispatcher.dispatch(&participants(&[("Max Verstappen", 2), ("Lewis Hamilton", 0)], 1)).unwrap();

    assert_eq!(dispatcher.dispatch(&lap_data(&[2, 1])).unwrap(), Dispatched::Standings(2));

    let surface = dispatcher.surface();
    assert!(surface.line(STANDINGS_ROW).starts_with("  1.  L. HAMILTON "));
    assert!(surface.line(STANDINGS_ROW + 1).starts_with("  2.  Max Verstappen "));
    assert_eq!(surface.line(STANDINGS_ROW + 2), "");

    assert_eq!(surface.style_at(STANDINGS_ROW, 2), Some(Style::paint(Paint::Team(0)).bold()));
    assert_eq!(surface.style_at(STANDINGS_ROW + 1, 2), Some(Style::paint(Paint::Team(2)).bold()));
}

#[test]
fn new_roster_replaces_the_old_one() {
    let mut dispatcher = dispatcher("");
    dispatcher
        .dispatch(&participants(&[("Max Verstappen", 2), ("Lewis Hamilton", 0), ("Lando Norris", 8)], 0))
        .unwrap();
    dispatcher.dispatch(&lap_data(&[1, 2, 3])).unwrap();
    assert!(dispatcher.surface().line(STANDINGS_ROW + 2).contains("Lando Norris"));

    dispatcher.dispatch(&participants(&[("Max Verstappen", 2)], 0)).unwrap();
    assert!(dispatcher.registry().slot_of("Lando Norris").is_err());

    assert_eq!(dispatcher.dispatch(&lap_data(&[1, 2, 3])).unwrap(), Dispatched::Standings(1));
    assert_eq!(dispatcher.surface().line(STANDINGS_ROW + 1), "");
    assert_eq!(dispatcher.surface().line(STANDINGS_ROW + 2), "");
}

#[test]
fn local_car_panels_wait_for_the_roster() {
    let mut dispatcher = dispatcher("");

    assert_eq!(dispatcher.dispatch(&telemetry(250)).unwrap(), Dispatched::Skipped);
    assert_eq!(dispatcher.dispatch(&car_status(70)).unwrap(), Dispatched::Skipped);
    assert_eq!(dispatcher.surface().line(TELEMETRY_ROW), "");

    dispatcher.dispatch(&participants(&[("Lewis Hamilton", 0)], 0)).unwrap();
    assert_eq!(dispatcher.dispatch(&telemetry(250)).unwrap(), Dispatched::Telemetry);
    assert!(dispatcher.surface().line(TELEMETRY_ROW).starts_with("  250 km/h"));
}

#[test]
fn damage_recolours_only_the_hit_segment() {
    let mut dispatcher = dispatcher("");
    dispatcher.dispatch(&participants(&[("Lewis Hamilton", 0)], 0)).unwrap();

    assert_eq!(dispatcher.dispatch(&car_status(70)).unwrap(), Dispatched::Damage);

    let surface = dispatcher.surface();
    // left wing starts at the car origin, the right wing 15 columns over
    assert_eq!(surface.style_at(CAR_ROW, CAR_COL), Some(Style::paint(DamageBand::Critical.paint())));
    assert_eq!(surface.style_at(CAR_ROW, CAR_COL + 15), Some(Style::paint(DamageBand::Nominal.paint())));
}

#[test]
fn session_header_is_drawn_without_a_roster() {
    let mut dispatcher = dispatcher("");

    assert_eq!(dispatcher.dispatch(&session()).unwrap(), Dispatched::Session);
    assert_eq!(dispatcher.surface().line(0).trim(), "Race - Monza");
    assert_eq!(dispatcher.surface().line(1).trim(), "00:12:34 / 01:00:00");
}

#[test]
fn other_packets_are_ignored() {
    let mut dispatcher = dispatcher("");

    assert_eq!(dispatcher.dispatch(&Packet::Other(header(3, 0))).unwrap(), Dispatched::Skipped);
    assert_eq!(dispatcher.state(), DispatcherState::Uninitialised);
}

#[test]
fn every_packet_is_flushed_once() {
    let mut dispatcher = dispatcher("");
    dispatcher.prepare().unwrap();
    assert_eq!(dispatcher.surface().flushes(), 1);

    let packets = [
        session(),
        participants(&[("Lewis Hamilton", 0)], 0),
        lap_data(&[1]),
        telemetry(120),
        car_status(10),
        Packet::Other(header(0, 0)),
    ];
    for packet in &packets {
        dispatcher.dispatch(packet).unwrap();
    }

    assert_eq!(dispatcher.surface().flushes(), 1 + packets.len());
}

#[test]
fn unknown_result_status_still_shows_the_driver() {
    let mut dispatcher = dispatcher("");
    dispatcher.dispatch(&participants(&[("Max Verstappen", 2), ("Lewis Hamilton", 0)], 1)).unwrap();

    let mut cars = vec![lap(1), lap(2)];
    cars[1].result_status = 42;
    cars.resize(20, lap(0));
    let packet = Packet::LapData(LapDataPacket { header: header(2, 0), cars });

    assert_eq!(dispatcher.dispatch(&packet).unwrap(), Dispatched::Standings(2));
    assert!(dispatcher.surface().line(STANDINGS_ROW + 1).starts_with("  2.  Lewis Hamilton "));
}
