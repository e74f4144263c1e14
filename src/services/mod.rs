pub mod adapter;
pub mod lookup;
pub mod transport;
