pub mod mixed_osc;

pub use self::mixed_osc::*;
