pub mod control;
pub mod pot;
pub mod snapshot;
pub mod store;
pub mod switch;
