//! End-to-end scenarios for the cash machine.
//!
//! Covers the full response table cell by cell, the classic walkthrough
//! session, the observer stream, the read-only panel, and resuming a
//! session from a snapshot.

use cashpoint::atm::{AtmConfig, AtmEvent, AtmMachine, AtmState, CashStatus};
use cashpoint::core::Outcome;
use cashpoint::snapshot::SessionSnapshot;
use std::sync::{Arc, Mutex};

/// Drive a fresh default machine into the given state.
fn machine_in(state: AtmState) -> AtmMachine {
    let mut atm = AtmMachine::new();
    match state {
        AtmState::NoCard => {}
        AtmState::HasCard => {
            atm.insert_card();
        }
        AtmState::PinVerified => {
            atm.insert_card();
            atm.insert_pin(1234);
        }
        AtmState::OutOfCash => {
            atm.insert_card();
            atm.insert_pin(1234);
            atm.request_cash(2000);
        }
    }
    assert_eq!(atm.current_state(), state);
    atm
}

#[test]
fn no_card_answers_all_four_events() {
    let cells = [
        (AtmEvent::InsertCard, Outcome::Transitioned, AtmState::HasCard),
        (AtmEvent::EjectCard, Outcome::RejectedNoOp, AtmState::NoCard),
        (
            AtmEvent::InsertPin(1234),
            Outcome::RejectedNoOp,
            AtmState::NoCard,
        ),
        (
            AtmEvent::RequestCash(100),
            Outcome::RejectedNoOp,
            AtmState::NoCard,
        ),
    ];
    for (event, outcome, next) in cells {
        let mut atm = machine_in(AtmState::NoCard);
        assert_eq!(atm.handle(event), outcome, "event {event:?}");
        assert_eq!(atm.current_state(), next, "event {event:?}");
    }
}

#[test]
fn has_card_answers_every_event() {
    let cells = [
        (AtmEvent::InsertCard, Outcome::RejectedNoOp, AtmState::HasCard),
        (AtmEvent::EjectCard, Outcome::Transitioned, AtmState::NoCard),
        (
            AtmEvent::InsertPin(1234),
            Outcome::Transitioned,
            AtmState::PinVerified,
        ),
        (
            AtmEvent::InsertPin(9999),
            Outcome::Transitioned,
            AtmState::NoCard,
        ),
        (
            AtmEvent::RequestCash(100),
            Outcome::RejectedNoOp,
            AtmState::HasCard,
        ),
    ];
    for (event, outcome, next) in cells {
        let mut atm = machine_in(AtmState::HasCard);
        assert_eq!(atm.handle(event), outcome, "event {event:?}");
        assert_eq!(atm.current_state(), next, "event {event:?}");
    }
}

#[test]
fn pin_verified_answers_every_event() {
    let cells = [
        (
            AtmEvent::InsertCard,
            Outcome::RejectedNoOp,
            AtmState::PinVerified,
        ),
        (AtmEvent::EjectCard, Outcome::Transitioned, AtmState::NoCard),
        (
            AtmEvent::InsertPin(1234),
            Outcome::AcceptedNoOp,
            AtmState::PinVerified,
        ),
        (
            AtmEvent::RequestCash(500),
            Outcome::Transitioned,
            AtmState::NoCard,
        ),
        (
            AtmEvent::RequestCash(2000),
            Outcome::Transitioned,
            AtmState::OutOfCash,
        ),
        (
            AtmEvent::RequestCash(2001),
            Outcome::Transitioned,
            AtmState::NoCard,
        ),
        (
            AtmEvent::RequestCash(0),
            Outcome::Transitioned,
            AtmState::NoCard,
        ),
        (
            AtmEvent::RequestCash(i64::MIN),
            Outcome::Transitioned,
            AtmState::NoCard,
        ),
        (
            AtmEvent::RequestCash(i64::MAX),
            Outcome::Transitioned,
            AtmState::NoCard,
        ),
    ];
    for (event, outcome, next) in cells {
        let mut atm = machine_in(AtmState::PinVerified);
        assert_eq!(atm.handle(event), outcome, "event {event:?}");
        assert_eq!(atm.current_state(), next, "event {event:?}");
    }
}

#[test]
fn out_of_cash_answers_all_four_events() {
    let events = [
        AtmEvent::InsertCard,
        AtmEvent::EjectCard,
        AtmEvent::InsertPin(1234),
        AtmEvent::RequestCash(1),
    ];
    for event in events {
        let mut atm = machine_in(AtmState::OutOfCash);
        assert_eq!(atm.handle(event), Outcome::RejectedNoOp, "event {event:?}");
        assert_eq!(atm.current_state(), AtmState::OutOfCash, "event {event:?}");
    }
}

#[test]
fn classic_walkthrough_drains_the_machine() {
    let mut atm = AtmMachine::new();

    assert_eq!(atm.insert_card(), Outcome::Transitioned);
    assert_eq!(atm.eject_card(), Outcome::Transitioned);
    assert_eq!(atm.insert_card(), Outcome::Transitioned);
    assert_eq!(atm.insert_pin(1234), Outcome::Transitioned);
    assert_eq!(atm.request_cash(2000), Outcome::Transitioned);

    assert_eq!(atm.current_state(), AtmState::OutOfCash);
    assert_eq!(atm.cash_in_machine(), 0);

    // The drained machine refuses further service.
    assert_eq!(atm.insert_card(), Outcome::RejectedNoOp);
    assert_eq!(atm.insert_pin(1234), Outcome::RejectedNoOp);
    assert_eq!(atm.current_state(), AtmState::OutOfCash);
}

#[test]
fn walkthrough_leaves_a_readable_message_trail() {
    let mut atm = AtmMachine::new();
    atm.insert_card();
    atm.eject_card();
    atm.insert_card();
    atm.insert_pin(1234);
    atm.request_cash(2000);
    atm.insert_card();

    assert_eq!(
        atm.transcript().messages(),
        vec![
            "card accepted",
            "card ejected",
            "card accepted",
            "correct PIN entered",
            "2000 dispensed, card ejected",
            "machine is out of cash",
        ]
    );
}

#[test]
fn transcript_never_contains_pin_digits() {
    let mut atm = AtmMachine::with_config(AtmConfig {
        initial_cash: 2000,
        correct_pin: 7777,
    });
    atm.insert_card();
    atm.insert_pin(1111);
    atm.insert_card();
    atm.insert_pin(7777);

    for message in atm.transcript().messages() {
        assert!(!message.contains("7777"), "message leaks PIN: {message}");
        assert!(!message.contains("1111"), "message leaks PIN: {message}");
    }
}

#[test]
fn observer_stream_matches_the_transcript() {
    let stream = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&stream);

    let mut atm = AtmMachine::new();
    atm.set_observer(move |entry| {
        sink.lock().unwrap().push(entry.message.clone());
    });

    atm.insert_card();
    atm.insert_pin(9999);
    atm.insert_card();
    atm.insert_pin(1234);
    atm.request_cash(250);

    let streamed = stream.lock().unwrap().clone();
    let recorded: Vec<String> = atm
        .transcript()
        .messages()
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(streamed, recorded);
}

#[test]
fn read_only_panel_follows_the_session() {
    let mut atm = AtmMachine::new();

    atm.insert_card();
    atm.insert_pin(1234);
    {
        let panel = atm.read_only();
        assert_eq!(panel.current_state(), AtmState::PinVerified);
        assert_eq!(panel.cash_in_machine(), 2000);
    }

    atm.request_cash(1500);
    let panel = atm.read_only();
    assert_eq!(panel.current_state(), AtmState::NoCard);
    assert_eq!(panel.cash_in_machine(), 500);
    assert!(panel.has_cash());
}

#[test]
fn session_resumes_from_a_snapshot_across_both_codecs() {
    let mut atm = AtmMachine::new();
    atm.insert_card();
    atm.insert_pin(1234);
    atm.request_cash(1200);
    atm.insert_card();

    let snapshot = SessionSnapshot::capture(&atm);

    let via_json = SessionSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
    let via_bytes = SessionSnapshot::from_bytes(&snapshot.to_bytes().unwrap()).unwrap();

    for copy in [via_json, via_bytes] {
        let mut resumed = copy.restore(1234).unwrap();
        assert_eq!(resumed.current_state(), AtmState::HasCard);
        assert_eq!(resumed.cash_in_machine(), 800);
        assert_eq!(resumed.transcript().len(), 4);

        resumed.insert_pin(1234);
        resumed.request_cash(800);
        assert_eq!(resumed.current_state(), AtmState::OutOfCash);
    }
}

#[test]
fn customer_recovers_from_a_wrong_pin() {
    let mut atm = AtmMachine::new();

    atm.insert_card();
    assert_eq!(atm.insert_pin(4321), Outcome::Transitioned);
    assert_eq!(atm.current_state(), AtmState::NoCard);

    // Card comes back; a second attempt with the right PIN works.
    atm.insert_card();
    assert_eq!(atm.insert_pin(1234), Outcome::Transitioned);
    assert_eq!(atm.request_cash(300), Outcome::Transitioned);
    assert_eq!(atm.cash_in_machine(), 1700);
}

#[test]
fn configured_pin_replaces_the_default() {
    let mut atm = AtmMachine::with_config(AtmConfig {
        initial_cash: 2000,
        correct_pin: 4242,
    });

    atm.insert_card();
    assert_eq!(atm.insert_pin(1234), Outcome::Transitioned);
    assert_eq!(atm.current_state(), AtmState::NoCard);

    atm.insert_card();
    assert_eq!(atm.insert_pin(4242), Outcome::Transitioned);
    assert_eq!(atm.current_state(), AtmState::PinVerified);
}
