//! Enemy ship construction behind a factory.
//!
//! Callers pick a [`ShipClass`] and get a fully configured [`EnemyShip`];
//! the stats per class live in exactly one `match`, and the exhaustive
//! enum means there is no "unknown class" case to return null for.

use std::fmt;

/// The classes of ship the factory knows how to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShipClass {
    Ufo,
    Rocket,
    Boss,
}

/// An enemy ship: a name and how hard it hits.
#[derive(Clone, Debug, PartialEq)]
pub struct EnemyShip {
    name: String,
    damage: f64,
}

impl EnemyShip {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage(&self) -> f64 {
        self.damage
    }

    pub fn appears(&self) -> String {
        format!("{} is on the screen", self.name)
    }

    pub fn follows_hero(&self) -> String {
        format!("{} is following the hero", self.name)
    }

    pub fn shoots(&self) -> String {
        format!("{} attacks and does {} damage", self.name, self.damage)
    }
}

impl From<ShipClass> for EnemyShip {
    /// The factory. Stats for every class in one place.
    ///
    /// # Example
    ///
    /// ```
    /// use cashpoint::patterns::factory::{EnemyShip, ShipClass};
    ///
    /// let boss = EnemyShip::from(ShipClass::Boss);
    /// assert_eq!(boss.damage(), 40.0);
    /// ```
    fn from(class: ShipClass) -> Self {
        match class {
            ShipClass::Ufo => Self {
                name: "UFO".to_string(),
                damage: 20.0,
            },
            ShipClass::Rocket => Self {
                name: "Rocket".to_string(),
                damage: 10.0,
            },
            ShipClass::Boss => Self {
                name: "Boss".to_string(),
                damage: 40.0,
            },
        }
    }
}

impl fmt::Display for EnemyShip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} damage)", self.name, self.damage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_class_gets_its_own_stats() {
        assert_eq!(EnemyShip::from(ShipClass::Ufo).damage(), 20.0);
        assert_eq!(EnemyShip::from(ShipClass::Rocket).damage(), 10.0);
        assert_eq!(EnemyShip::from(ShipClass::Boss).damage(), 40.0);
    }

    #[test]
    fn built_ships_report_their_actions() {
        let ufo = EnemyShip::from(ShipClass::Ufo);
        assert_eq!(ufo.appears(), "UFO is on the screen");
        assert_eq!(ufo.follows_hero(), "UFO is following the hero");
        assert_eq!(ufo.shoots(), "UFO attacks and does 20 damage");
    }

    #[test]
    fn same_class_builds_equal_ships() {
        assert_eq!(
            EnemyShip::from(ShipClass::Rocket),
            EnemyShip::from(ShipClass::Rocket)
        );
    }
}
