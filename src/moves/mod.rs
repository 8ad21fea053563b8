//! Everything that turns a move intent into a committed board mutation:
//! the Attacker Generator, the Legality Filter, special-move rules, the SAN
//! parser, and the Move Executor that ties them together.

pub mod attackers;
pub mod execute;
pub mod legality;
pub mod san;
pub mod special;
pub mod types;

pub use execute::apply_move;
pub use san::parse_san;
pub use types::{Candidate, Candidates, MoveIntent, MoveRecord};
