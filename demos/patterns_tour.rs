//! Design Patterns Tour
//!
//! This example runs every companion pattern study in sequence, printing
//! what each one does.
//!
//! Run with: cargo run --example patterns_tour

use std::cell::RefCell;
use std::rc::Rc;

use cashpoint::patterns::adapter::{EnemyAttacker, EnemyRobot, EnemyTank, RobotAdapter};
use cashpoint::patterns::chain::{
    standard_chain, Calculation, Calculator, Divider, Multiplier, Operation,
};
use cashpoint::patterns::command::{
    AllOff, DeviceButton, Radio, SharedDevice, Television, TurnOff, TurnOn, VolumeUp,
};
use cashpoint::patterns::factory::{EnemyShip, ShipClass};
use cashpoint::patterns::flyweight::{Color, Shape, StylePool};
use cashpoint::patterns::prototype::{CloneFactory, Sheep};
use cashpoint::patterns::visitor::{HolidayTax, Liquor, Necessity, StandardTax, Taxable, Tobacco};

fn banner(name: &str) {
    println!("\n------------------");
    println!("{name}");
}

fn chain_of_responsibility() {
    banner("CHAIN OF RESPONSIBILITY");
    let chain = standard_chain();
    println!("{}", chain.calculate(&Calculation::new(3, 5, Operation::Add)));
    println!("{}", chain.calculate(&Calculation::new(6, 2, Operation::Multiply)));
    println!("{}", chain.calculate(&Calculation::new(12, 0, Operation::Divide)));

    // Entering the chain midway skips the earlier links.
    let tail = Divider::new().with_next(Multiplier::new());
    println!("{}", tail.calculate(&Calculation::new(12, 3, Operation::Subtract)));
}

fn command() {
    banner("COMMAND");
    let tv: SharedDevice = Rc::new(RefCell::new(Television::new()));
    let radio: SharedDevice = Rc::new(RefCell::new(Radio::new()));

    for line in DeviceButton::new(TurnOn::new(Rc::clone(&tv))).press() {
        println!("{line}");
    }
    let volume = DeviceButton::new(VolumeUp::new(Rc::clone(&tv)));
    for _ in 0..3 {
        for line in volume.press() {
            println!("{line}");
        }
    }
    for line in DeviceButton::new(TurnOff::new(Rc::clone(&tv))).press() {
        println!("{line}");
    }

    let master = DeviceButton::new(AllOff::new(vec![Rc::clone(&tv), Rc::clone(&radio)]));
    println!("pressing the master switch:");
    for line in master.press() {
        println!("{line}");
    }
    println!("and undoing it:");
    for line in master.press_undo() {
        println!("{line}");
    }
}

fn visitor() {
    banner("VISITOR");
    let milk = Necessity::new(3.25);
    let vodka = Liquor::new(11.99);
    let cigars = Tobacco::new(19.99);

    println!(
        "milk costs {:.2}, holiday price {:.2}",
        milk.accept(&StandardTax),
        milk.accept(&HolidayTax)
    );
    println!(
        "vodka costs {:.2}, holiday price {:.2}",
        vodka.accept(&StandardTax),
        vodka.accept(&HolidayTax)
    );
    println!(
        "cigars cost {:.2}, holiday price {:.2}",
        cigars.accept(&StandardTax),
        cigars.accept(&HolidayTax)
    );
}

fn factory() {
    banner("FACTORY");
    for class in [ShipClass::Ufo, ShipClass::Rocket, ShipClass::Boss] {
        let ship = EnemyShip::from(class);
        println!("{}", ship.appears());
        println!("{}", ship.follows_hero());
        println!("{}", ship.shoots());
    }
}

fn prototype() {
    banner("PROTOTYPE");
    let factory = CloneFactory::new();
    let sally = Sheep::new("Sally");
    let mut copy = factory.clone_of(&sally);
    copy.name = "Dolly".to_string();

    println!("{sally}");
    println!("{copy}");
    println!("the clone is independent: renaming it left Sally alone");
}

fn adapter() {
    banner("ADAPTER");
    let squad: Vec<Box<dyn EnemyAttacker>> = vec![
        Box::new(EnemyTank::new()),
        Box::new(RobotAdapter::new(EnemyRobot::new())),
    ];
    for attacker in &squad {
        println!("{}", attacker.assign_driver("Mark"));
        println!("{}", attacker.drive_forward());
        println!("{}", attacker.fire_weapon());
    }
}

fn flyweight() {
    banner("FLYWEIGHT");
    let mut pool = StylePool::new();
    let shapes: Vec<Shape> = (0..100)
        .map(|i| {
            let color = if i % 2 == 0 { Color::Red } else { Color::Blue };
            Shape::new(pool.style(color), 1.0, i as f64, 0.0)
        })
        .collect();

    println!("built {} shapes sharing {} interned styles", shapes.len(), pool.len());
    println!("first of them: {}", shapes[0].describe());
}

fn main() {
    println!("=== Design Patterns Tour ===");

    chain_of_responsibility();
    command();
    visitor();
    factory();
    prototype();
    adapter();
    flyweight();

    println!("\n=== Example Complete ===");
}
