pub mod client;
pub mod params;
pub mod reference;
