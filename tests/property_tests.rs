//! Property-based tests for the cash machine.
//!
//! These tests use proptest to verify the machine invariants hold across
//! many randomly generated event sequences.

use cashpoint::atm::{AtmConfig, AtmEvent, AtmMachine, AtmState};
use cashpoint::core::Outcome;
use cashpoint::snapshot::SessionSnapshot;
use proptest::prelude::*;

const INITIAL_CASH: i64 = 2000;
const PIN: u32 = 1234;

fn fresh_machine() -> AtmMachine {
    AtmMachine::with_config(AtmConfig {
        initial_cash: INITIAL_CASH,
        correct_pin: PIN,
    })
}

fn drive(atm: &mut AtmMachine, events: &[AtmEvent]) -> Vec<Outcome> {
    events.iter().map(|event| atm.handle(*event)).collect()
}

prop_compose! {
    fn arbitrary_pin()(correct in any::<bool>(), other in 0..9999u32) -> u32 {
        if correct { PIN } else { other }
    }
}

fn arbitrary_amount() -> impl Strategy<Value = i64> {
    prop_oneof![
        4 => 1..2500i64,
        1 => Just(0i64),
        1 => -2500..0i64,
        1 => Just(i64::MIN),
        1 => Just(i64::MAX),
    ]
}

fn arbitrary_event() -> impl Strategy<Value = AtmEvent> {
    prop_oneof![
        2 => Just(AtmEvent::InsertCard),
        1 => Just(AtmEvent::EjectCard),
        2 => arbitrary_pin().prop_map(AtmEvent::InsertPin),
        2 => arbitrary_amount().prop_map(AtmEvent::RequestCash),
    ]
}

fn event_sequence() -> impl Strategy<Value = Vec<AtmEvent>> {
    prop::collection::vec(arbitrary_event(), 0..40)
}

proptest! {
    #[test]
    fn pin_flag_matches_the_state(events in event_sequence()) {
        let mut atm = fresh_machine();
        for event in &events {
            atm.handle(*event);
            prop_assert_eq!(
                atm.pin_verified(),
                atm.current_state() == AtmState::PinVerified
            );
        }
    }

    #[test]
    fn out_of_cash_exactly_when_drained(events in event_sequence()) {
        let mut atm = fresh_machine();
        for event in &events {
            atm.handle(*event);
            prop_assert_eq!(
                atm.current_state() == AtmState::OutOfCash,
                atm.cash_in_machine() <= 0
            );
        }
    }

    #[test]
    fn cash_stays_within_bounds(events in event_sequence()) {
        let mut atm = fresh_machine();
        let mut previous = atm.cash_in_machine();
        for event in &events {
            let outcome = atm.handle(*event);
            let current = atm.cash_in_machine();
            prop_assert!(current >= 0);
            prop_assert!(current <= previous);
            if outcome.is_noop() {
                prop_assert_eq!(current, previous);
            }
            previous = current;
        }
    }

    #[test]
    fn every_event_is_recorded_once(events in event_sequence()) {
        let mut atm = fresh_machine();
        drive(&mut atm, &events);
        prop_assert_eq!(atm.transcript().len(), events.len());
    }

    #[test]
    fn noop_outcomes_leave_the_state_alone(events in event_sequence()) {
        let mut atm = fresh_machine();
        drive(&mut atm, &events);
        for entry in atm.transcript().entries() {
            prop_assert_eq!(entry.outcome.is_noop(), entry.from == entry.to);
        }
    }

    #[test]
    fn dispatch_is_deterministic(events in event_sequence()) {
        let mut first = fresh_machine();
        let mut second = fresh_machine();

        let outcomes_first = drive(&mut first, &events);
        let outcomes_second = drive(&mut second, &events);

        prop_assert_eq!(outcomes_first, outcomes_second);
        prop_assert_eq!(first.current_state(), second.current_state());
        prop_assert_eq!(first.cash_in_machine(), second.cash_in_machine());
        prop_assert_eq!(
            first.transcript().messages(),
            second.transcript().messages()
        );
    }

    #[test]
    fn out_of_cash_is_absorbing(events in event_sequence()) {
        let mut atm = fresh_machine();
        let mut drained = false;
        for event in &events {
            atm.handle(*event);
            if drained {
                prop_assert_eq!(atm.current_state(), AtmState::OutOfCash);
            }
            drained = atm.current_state() == AtmState::OutOfCash;
        }
    }

    #[test]
    fn restored_machine_behaves_like_the_original(
        before in event_sequence(),
        after in event_sequence()
    ) {
        let mut original = fresh_machine();
        drive(&mut original, &before);

        let snapshot = SessionSnapshot::capture(&original);
        let mut restored = snapshot.restore(PIN).unwrap();

        let outcomes_original = drive(&mut original, &after);
        let outcomes_restored = drive(&mut restored, &after);

        prop_assert_eq!(outcomes_original, outcomes_restored);
        prop_assert_eq!(original.current_state(), restored.current_state());
        prop_assert_eq!(original.cash_in_machine(), restored.cash_in_machine());
    }

    #[test]
    fn snapshot_roundtrip_preserves_the_session(events in event_sequence()) {
        let mut atm = fresh_machine();
        drive(&mut atm, &events);

        let snapshot = SessionSnapshot::capture(&atm);
        let json = snapshot.to_json().unwrap();
        let from_json = SessionSnapshot::from_json(&json).unwrap();
        let bytes = snapshot.to_bytes().unwrap();
        let from_bytes = SessionSnapshot::from_bytes(&bytes).unwrap();

        prop_assert_eq!(from_json.state, snapshot.state);
        prop_assert_eq!(from_json.cash_in_machine, snapshot.cash_in_machine);
        prop_assert_eq!(from_json.transcript.len(), snapshot.transcript.len());
        prop_assert_eq!(from_bytes.state, snapshot.state);
        prop_assert_eq!(from_bytes.transcript.len(), snapshot.transcript.len());
    }

    #[test]
    fn captured_snapshots_always_validate(events in event_sequence()) {
        let mut atm = fresh_machine();
        drive(&mut atm, &events);
        prop_assert!(SessionSnapshot::capture(&atm).validate().is_ok());
    }
}
