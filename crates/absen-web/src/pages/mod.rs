//! Page components

pub mod absen;
pub mod dashboard;
pub mod history;
pub mod home;
pub mod login;
pub mod settings;
pub mod sync;

pub use absen::AbsenPage;
pub use dashboard::Dashboard;
pub use home::HomePage;
pub use login::LoginPage;
