//! Fitting a robot into a squad that expects vehicles.
//!
//! The squad talks [`EnemyAttacker`]; the robot speaks its own vocabulary
//! of smashing and walking. [`RobotAdapter`] translates call for call so
//! both kinds fight side by side.

/// What the squad expects every attacker to answer.
pub trait EnemyAttacker {
    fn fire_weapon(&self) -> String;
    fn drive_forward(&self) -> String;
    fn assign_driver(&self, driver: &str) -> String;
}

/// Speaks the squad vocabulary natively.
pub struct EnemyTank {
    firepower: u32,
    speed: u32,
}

impl EnemyTank {
    pub fn new() -> Self {
        Self {
            firepower: 9,
            speed: 4,
        }
    }
}

impl Default for EnemyTank {
    fn default() -> Self {
        Self::new()
    }
}

impl EnemyAttacker for EnemyTank {
    fn fire_weapon(&self) -> String {
        format!("enemy tank does {} damage", self.firepower)
    }

    fn drive_forward(&self) -> String {
        format!("enemy tank moves {} spaces", self.speed)
    }

    fn assign_driver(&self, driver: &str) -> String {
        format!("{driver} is driving the tank")
    }
}

/// The adaptee. Its methods exist and work, they just have the wrong
/// names and shapes for the squad.
pub struct EnemyRobot {
    strength: u32,
    stride: u32,
}

impl EnemyRobot {
    pub fn new() -> Self {
        Self {
            strength: 5,
            stride: 2,
        }
    }

    pub fn smash_with_hands(&self) -> String {
        format!("robot causes {} damage with its hands", self.strength)
    }

    pub fn walk_forward(&self) -> String {
        format!("robot walks {} spaces", self.stride)
    }

    pub fn react_to_human(&self, name: &str) -> String {
        format!("robot tramps on {name}")
    }
}

impl Default for EnemyRobot {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps a robot and translates every squad call into robot vocabulary.
///
/// # Example
///
/// ```
/// use cashpoint::patterns::adapter::{EnemyAttacker, EnemyRobot, RobotAdapter};
///
/// let adapter = RobotAdapter::new(EnemyRobot::new());
/// assert_eq!(adapter.fire_weapon(), "robot causes 5 damage with its hands");
/// ```
pub struct RobotAdapter {
    robot: EnemyRobot,
}

impl RobotAdapter {
    pub fn new(robot: EnemyRobot) -> Self {
        Self { robot }
    }
}

impl EnemyAttacker for RobotAdapter {
    fn fire_weapon(&self) -> String {
        self.robot.smash_with_hands()
    }

    fn drive_forward(&self) -> String {
        self.robot.walk_forward()
    }

    fn assign_driver(&self, driver: &str) -> String {
        self.robot.react_to_human(driver)
    }
}
