//! Page modules

pub mod fyb_students;
pub mod fyb_week;
pub mod home;
pub mod vote;

pub use fyb_students::FybStudentsPage;
pub use fyb_week::FybWeekPage;
pub use home::HomePage;
pub use vote::VotePage;
