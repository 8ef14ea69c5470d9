//! Domain layer

pub mod communication;
pub mod contact;
pub mod newsletter;
