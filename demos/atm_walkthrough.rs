//! Cash Machine Walkthrough
//!
//! This example runs the classic single-session script: insert a card,
//! eject it, insert it again, verify the PIN, and withdraw the whole
//! balance, leaving the machine drained.
//!
//! Key concepts:
//! - Every event is dispatched through the active state
//! - No-op events are answered and recorded, never thrown
//! - The drained machine is absorbing
//!
//! Run with: cargo run --example atm_walkthrough

use cashpoint::atm::{AtmMachine, AtmState};

fn main() {
    println!("=== Cash Machine Walkthrough ===\n");

    let mut atm = AtmMachine::new();
    atm.set_observer(|entry| {
        println!(
            "  {:12} {:>11} -> {:<11} {}",
            entry.event, entry.from, entry.to, entry.message
        );
    });

    println!("Machine up: {:?} with {} in cash\n", atm.current_state(), atm.cash_in_machine());

    println!("A customer walks up:");
    atm.insert_card();
    atm.eject_card();
    atm.insert_card();
    atm.insert_pin(1234);
    atm.request_cash(2000);

    println!("\nState now: {:?}", atm.current_state());
    println!("Cash left: {}", atm.cash_in_machine());

    println!("\nThe next customer is out of luck:");
    atm.insert_card();
    atm.insert_pin(1234);

    assert_eq!(atm.current_state(), AtmState::OutOfCash);

    let snapshot = atm.snapshot();
    let json = snapshot.to_json().unwrap();
    println!(
        "\nSession captured: {} transcript entries, {} bytes of JSON",
        snapshot.transcript.len(),
        json.len()
    );

    println!("\n=== Example Complete ===");
}
