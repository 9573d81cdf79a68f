//! Commands over shared household devices.
//!
//! A command captures a receiver and one action on it; the button that
//! fires the command knows nothing about either. Every command also knows
//! how to undo itself. Devices are shared single-threaded via
//! `Rc<RefCell<_>>` so a composite command can sweep across the same
//! receivers the individual commands hold.

use std::cell::RefCell;
use std::rc::Rc;

/// A switchable device with a volume dial. Every method reports what it
/// did as one line.
pub trait PowerDevice {
    fn on(&mut self) -> String;
    fn off(&mut self) -> String;
    fn volume_up(&mut self) -> String;
    fn volume_down(&mut self) -> String;
    fn is_on(&self) -> bool;
    fn volume(&self) -> u32;
}

/// A receiver handle shared between commands.
pub type SharedDevice = Rc<RefCell<dyn PowerDevice>>;

#[derive(Default)]
pub struct Television {
    powered: bool,
    volume: u32,
}

impl Television {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PowerDevice for Television {
    fn on(&mut self) -> String {
        self.powered = true;
        "TV is on".to_string()
    }

    fn off(&mut self) -> String {
        self.powered = false;
        "TV is off".to_string()
    }

    fn volume_up(&mut self) -> String {
        self.volume += 1;
        format!("TV volume up to {}", self.volume)
    }

    fn volume_down(&mut self) -> String {
        self.volume = self.volume.saturating_sub(1);
        format!("TV volume down to {}", self.volume)
    }

    fn is_on(&self) -> bool {
        self.powered
    }

    fn volume(&self) -> u32 {
        self.volume
    }
}

#[derive(Default)]
pub struct Radio {
    powered: bool,
    volume: u32,
}

impl Radio {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PowerDevice for Radio {
    fn on(&mut self) -> String {
        self.powered = true;
        "radio is on".to_string()
    }

    fn off(&mut self) -> String {
        self.powered = false;
        "radio is off".to_string()
    }

    fn volume_up(&mut self) -> String {
        self.volume += 1;
        format!("radio volume up to {}", self.volume)
    }

    fn volume_down(&mut self) -> String {
        self.volume = self.volume.saturating_sub(1);
        format!("radio volume down to {}", self.volume)
    }

    fn is_on(&self) -> bool {
        self.powered
    }

    fn volume(&self) -> u32 {
        self.volume
    }
}

/// An executable, undoable action. Returns one line per affected device.
pub trait Command {
    fn execute(&self) -> Vec<String>;
    fn undo(&self) -> Vec<String>;
}

pub struct TurnOn {
    device: SharedDevice,
}

impl TurnOn {
    pub fn new(device: SharedDevice) -> Self {
        Self { device }
    }
}

impl Command for TurnOn {
    fn execute(&self) -> Vec<String> {
        vec![self.device.borrow_mut().on()]
    }

    fn undo(&self) -> Vec<String> {
        vec![self.device.borrow_mut().off()]
    }
}

pub struct TurnOff {
    device: SharedDevice,
}

impl TurnOff {
    pub fn new(device: SharedDevice) -> Self {
        Self { device }
    }
}

impl Command for TurnOff {
    fn execute(&self) -> Vec<String> {
        vec![self.device.borrow_mut().off()]
    }

    fn undo(&self) -> Vec<String> {
        vec![self.device.borrow_mut().on()]
    }
}

pub struct VolumeUp {
    device: SharedDevice,
}

impl VolumeUp {
    pub fn new(device: SharedDevice) -> Self {
        Self { device }
    }
}

impl Command for VolumeUp {
    fn execute(&self) -> Vec<String> {
        vec![self.device.borrow_mut().volume_up()]
    }

    fn undo(&self) -> Vec<String> {
        vec![self.device.borrow_mut().volume_down()]
    }
}

pub struct VolumeDown {
    device: SharedDevice,
}

impl VolumeDown {
    pub fn new(device: SharedDevice) -> Self {
        Self { device }
    }
}

impl Command for VolumeDown {
    fn execute(&self) -> Vec<String> {
        vec![self.device.borrow_mut().volume_down()]
    }

    fn undo(&self) -> Vec<String> {
        vec![self.device.borrow_mut().volume_up()]
    }
}

/// Switches every captured device off at once; undo switches them back on.
pub struct AllOff {
    devices: Vec<SharedDevice>,
}

impl AllOff {
    pub fn new(devices: Vec<SharedDevice>) -> Self {
        Self { devices }
    }
}

impl Command for AllOff {
    fn execute(&self) -> Vec<String> {
        self.devices
            .iter()
            .map(|device| device.borrow_mut().off())
            .collect()
    }

    fn undo(&self) -> Vec<String> {
        self.devices
            .iter()
            .map(|device| device.borrow_mut().on())
            .collect()
    }
}

/// The invoker. It holds one command and has no idea what pressing it
/// actually does.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use cashpoint::patterns::command::{
///     DeviceButton, PowerDevice, SharedDevice, Television, TurnOn,
/// };
///
/// let tv: SharedDevice = Rc::new(RefCell::new(Television::new()));
/// let button = DeviceButton::new(TurnOn::new(Rc::clone(&tv)));
///
/// assert_eq!(button.press(), vec!["TV is on".to_string()]);
/// assert!(tv.borrow().is_on());
/// ```
pub struct DeviceButton {
    command: Box<dyn Command>,
}

impl DeviceButton {
    pub fn new(command: impl Command + 'static) -> Self {
        Self {
            command: Box::new(command),
        }
    }

    pub fn press(&self) -> Vec<String> {
        self.command.execute()
    }

    pub fn press_undo(&self) -> Vec<String> {
        self.command.undo()
    }
}
