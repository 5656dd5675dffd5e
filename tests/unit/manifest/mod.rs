pub mod builder;
pub mod schema;
