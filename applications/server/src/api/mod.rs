/// API route modules
pub mod users;
