pub mod mosque_repo;
pub mod notification_repo;

pub use mosque_repo::MosqueRepo;
pub use notification_repo::NotificationRepo;
