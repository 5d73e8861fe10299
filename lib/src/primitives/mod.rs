pub mod card;
pub mod cardvector;
pub mod eplayerindex;
pub mod position;
pub mod trick;

pub use self::{card::*, cardvector::*, eplayerindex::*, position::*, trick::*};
