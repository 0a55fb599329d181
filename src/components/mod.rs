pub mod trail;

pub use trail::{Trail, Trails};
