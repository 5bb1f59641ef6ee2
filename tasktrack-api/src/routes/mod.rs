/// API route handlers
///
/// - `health`: Health check endpoint
/// - `tasks`: Task CRUD endpoints

pub mod health;
pub mod tasks;
