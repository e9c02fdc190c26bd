mod home;

pub use home::HomeController;
