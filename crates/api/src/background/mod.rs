//! Background tasks spawned by the server binary.

pub mod delivery;

pub use delivery::NotificationDispatcher;
