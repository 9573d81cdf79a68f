//! Chain of responsibility over arithmetic requests.
//!
//! A request names two operands and the operation it wants. Each link in
//! the chain answers for exactly one operation and hands everything else
//! to the link behind it; a request no link claims falls off the end with
//! a failure line instead of an error.

use std::fmt;

/// Operations the chain knows how to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Divide,
    Multiply,
}

impl Operation {
    fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Divide => '/',
            Self::Multiply => '*',
        }
    }

    /// Checked application; `None` when the result is undefined for the
    /// inputs (division by zero, overflow).
    fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
            Self::Divide => lhs.checked_div(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Divide => "divide",
            Self::Multiply => "multiply",
        };
        f.write_str(name)
    }
}

/// Two operands plus the operation the caller wants applied to them.
#[derive(Clone, Copy, Debug)]
pub struct Calculation {
    pub lhs: i64,
    pub rhs: i64,
    pub wanted: Operation,
}

impl Calculation {
    pub fn new(lhs: i64, rhs: i64, wanted: Operation) -> Self {
        Self { lhs, rhs, wanted }
    }
}

/// One link in the chain.
pub trait Calculator {
    /// Handle the request or pass it along; the returned line says what
    /// happened.
    fn calculate(&self, request: &Calculation) -> String;
}

fn handle_or_defer(
    handles: Operation,
    next: Option<&dyn Calculator>,
    request: &Calculation,
) -> String {
    if request.wanted == handles {
        match handles.apply(request.lhs, request.rhs) {
            Some(result) => format!(
                "{} {} {} = {}",
                request.lhs,
                handles.symbol(),
                request.rhs,
                result
            ),
            None => format!(
                "cannot {} {} and {}",
                handles, request.lhs, request.rhs
            ),
        }
    } else if let Some(next) = next {
        next.calculate(request)
    } else {
        format!("no link handles {}", request.wanted)
    }
}

macro_rules! calculator_link {
    ($(#[$doc:meta])* $name:ident, $operation:expr) => {
        $(#[$doc])*
        #[derive(Default)]
        pub struct $name {
            next: Option<Box<dyn Calculator>>,
        }

        impl $name {
            pub fn new() -> Self {
                Self { next: None }
            }

            /// Attach the link consulted when this one cannot handle a
            /// request.
            pub fn with_next(mut self, next: impl Calculator + 'static) -> Self {
                self.next = Some(Box::new(next));
                self
            }
        }

        impl Calculator for $name {
            fn calculate(&self, request: &Calculation) -> String {
                handle_or_defer($operation, self.next.as_deref(), request)
            }
        }
    };
}

calculator_link!(
    /// Answers for [`Operation::Add`].
    Adder,
    Operation::Add
);
calculator_link!(
    /// Answers for [`Operation::Subtract`].
    Subtractor,
    Operation::Subtract
);
calculator_link!(
    /// Answers for [`Operation::Divide`].
    Divider,
    Operation::Divide
);
calculator_link!(
    /// Answers for [`Operation::Multiply`].
    Multiplier,
    Operation::Multiply
);

/// The full add, subtract, divide, multiply chain, wired in that order.
///
/// # Example
///
/// ```
/// use cashpoint::patterns::chain::{standard_chain, Calculation, Calculator, Operation};
///
/// let chain = standard_chain();
/// let line = chain.calculate(&Calculation::new(3, 5, Operation::Add));
/// assert_eq!(line, "3 + 5 = 8");
/// ```
pub fn standard_chain() -> impl Calculator {
    Adder::new().with_next(Subtractor::new().with_next(Divider::new().with_next(Multiplier::new())))
}
