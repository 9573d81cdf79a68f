//! Tax computation as a visitor over priced goods.
//!
//! The goods stay ignorant of tax law; a visitor carries one pricing
//! policy and each item dispatches to the visit method for its own kind.
//! Swapping the policy means handing in a different visitor, not editing
//! the items.

/// One pricing policy, with a method per kind of good.
pub trait PriceVisitor {
    fn visit_liquor(&self, item: &Liquor) -> f64;
    fn visit_tobacco(&self, item: &Tobacco) -> f64;
    fn visit_necessity(&self, item: &Necessity) -> f64;
}

/// A good that can have a pricing policy applied to it.
pub trait Taxable {
    /// Dispatch to the visit method for this item's kind.
    fn accept(&self, visitor: &dyn PriceVisitor) -> f64;
}

pub struct Liquor {
    pub price: f64,
}

impl Liquor {
    pub fn new(price: f64) -> Self {
        Self { price }
    }
}

impl Taxable for Liquor {
    fn accept(&self, visitor: &dyn PriceVisitor) -> f64 {
        visitor.visit_liquor(self)
    }
}

pub struct Tobacco {
    pub price: f64,
}

impl Tobacco {
    pub fn new(price: f64) -> Self {
        Self { price }
    }
}

impl Taxable for Tobacco {
    fn accept(&self, visitor: &dyn PriceVisitor) -> f64 {
        visitor.visit_tobacco(self)
    }
}

pub struct Necessity {
    pub price: f64,
}

impl Necessity {
    pub fn new(price: f64) -> Self {
        Self { price }
    }
}

impl Taxable for Necessity {
    fn accept(&self, visitor: &dyn PriceVisitor) -> f64 {
        visitor.visit_necessity(self)
    }
}

/// Everyday tax rates: 18% on liquor, 32% on tobacco, necessities exempt.
pub struct StandardTax;

impl PriceVisitor for StandardTax {
    fn visit_liquor(&self, item: &Liquor) -> f64 {
        item.price * 1.18
    }

    fn visit_tobacco(&self, item: &Tobacco) -> f64 {
        item.price * 1.32
    }

    fn visit_necessity(&self, item: &Necessity) -> f64 {
        item.price
    }
}

/// Reduced holiday rates: 10% on liquor, 20% on tobacco, necessities
/// still exempt.
pub struct HolidayTax;

impl PriceVisitor for HolidayTax {
    fn visit_liquor(&self, item: &Liquor) -> f64 {
        item.price * 1.10
    }

    fn visit_tobacco(&self, item: &Tobacco) -> f64 {
        item.price * 1.20
    }

    fn visit_necessity(&self, item: &Necessity) -> f64 {
        item.price
    }
}
