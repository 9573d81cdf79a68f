//! Sharing intrinsic style between many shapes.
//!
//! A drawing full of shapes needs one style object per color, not one per
//! shape. The pool interns styles behind `Rc`; shapes keep only their
//! extrinsic size and position plus a cheap handle to the shared style.

use std::collections::HashMap;
use std::rc::Rc;

/// The palette styles are interned by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Gray,
    Black,
    Green,
    White,
}

/// Intrinsic, shareable appearance of a shape.
#[derive(Debug, PartialEq, Eq)]
pub struct ShapeStyle {
    color: Color,
}

impl ShapeStyle {
    pub fn color(&self) -> Color {
        self.color
    }
}

/// Interns one [`ShapeStyle`] per color and hands out shared handles.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use cashpoint::patterns::flyweight::{Color, StylePool};
///
/// let mut pool = StylePool::new();
/// let a = pool.style(Color::Red);
/// let b = pool.style(Color::Red);
/// assert!(Rc::ptr_eq(&a, &b));
/// ```
#[derive(Debug, Default)]
pub struct StylePool {
    styles: HashMap<Color, Rc<ShapeStyle>>,
}

impl StylePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared style for `color`, created on first request.
    pub fn style(&mut self, color: Color) -> Rc<ShapeStyle> {
        Rc::clone(
            self.styles
                .entry(color)
                .or_insert_with(|| Rc::new(ShapeStyle { color })),
        )
    }

    /// How many distinct styles have been interned.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// A shape: shared style plus per-shape size and position.
#[derive(Debug)]
pub struct Shape {
    style: Rc<ShapeStyle>,
    size: f64,
    x: f64,
    y: f64,
}

impl Shape {
    pub fn new(style: Rc<ShapeStyle>, size: f64, x: f64, y: f64) -> Self {
        Self { style, size, x, y }
    }

    pub fn color(&self) -> Color {
        self.style.color()
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn describe(&self) -> String {
        format!(
            "{:?} shape of size {} at ({}, {})",
            self.color(),
            self.size,
            self.x,
            self.y
        )
    }
}
