pub mod auth;
pub mod mosque;
pub mod notification;
pub mod times;
