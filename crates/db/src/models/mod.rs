pub mod mosque;
pub mod notification;
