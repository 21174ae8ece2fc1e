mod home;
pub use home::Home;

mod about;
pub use about::About;

mod not_found;
pub use not_found::NotFound;
