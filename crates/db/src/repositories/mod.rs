//! Repository layer: all SQL lives here.

mod comment_repo;
mod progress_repo;
mod rating_repo;
mod session_repo;
mod user_repo;

pub use comment_repo::CommentRepo;
pub use progress_repo::ProgressRepo;
pub use rating_repo::RatingRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
