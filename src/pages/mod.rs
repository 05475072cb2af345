mod chatbot;
mod landing;
mod login;
mod not_found;
mod settings;
mod signup;

pub use chatbot::Chatbot;
pub use landing::Landing;
pub use login::Login;
pub use not_found::NotFound;
pub use settings::Settings;
pub use signup::Signup;
