//! Game session management

mod session;

pub use session::Session;
