pub mod calls;
pub mod health;
pub mod imaging;
pub mod media;
pub mod patient;
