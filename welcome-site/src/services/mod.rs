mod database;
mod store;

pub use database::{MongoDb, MongoStore};
pub use store::{MemoryStore, WelcomeStore};
