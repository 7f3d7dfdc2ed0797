mod date_time;
mod decimal;

pub use date_time::*;
pub use decimal::*;
