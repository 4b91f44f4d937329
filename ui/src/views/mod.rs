mod home;
pub use home::Home;

mod history;
pub use history::History;
