//! Read-Only Status Panel
//!
//! This example wires a status panel to the machine through the read-only
//! view. The panel can report the state and balance at any time but has
//! no way to feed events in.
//!
//! Key concepts:
//! - A shared reporting trait for the machine and its proxy
//! - Borrowed, mutation-free access for monitoring code
//!
//! Run with: cargo run --example readonly_panel

use cashpoint::atm::{AtmMachine, CashStatus};

fn show(panel: &dyn CashStatus) {
    println!(
        "  [panel] state: {:<11}  cash: {:>5}  serviceable: {}",
        panel.current_state(),
        panel.cash_in_machine(),
        panel.has_cash()
    );
}

fn main() {
    println!("=== Read-Only Status Panel ===\n");

    let mut atm = AtmMachine::new();
    println!("Fresh machine:");
    show(&atm.read_only());

    println!("\nMid-session:");
    atm.insert_card();
    atm.insert_pin(1234);
    show(&atm.read_only());

    println!("\nAfter a withdrawal:");
    atm.request_cash(1500);
    show(&atm.read_only());

    println!("\nAfter draining the rest:");
    atm.insert_card();
    atm.insert_pin(1234);
    atm.request_cash(500);
    show(&atm.read_only());

    println!("\nThe panel never mutates: it exposes no event methods at all.");

    println!("\n=== Example Complete ===");
}
