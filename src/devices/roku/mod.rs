mod roku_input;
mod roku_key;

pub use roku_input::*;
pub use roku_key::*;
