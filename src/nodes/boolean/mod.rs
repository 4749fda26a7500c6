//! Boolean logic nodes

mod logic;
mod unary;

pub use logic::BooleanLogicNode;
pub use unary::BooleanUnaryNode;
