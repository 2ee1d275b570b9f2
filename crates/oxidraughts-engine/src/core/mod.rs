pub use self::{board::*, moves::*, piece::*, position::*};

pub(crate) mod board;
pub(crate) mod moves;
pub(crate) mod piece;
pub(crate) mod position;
