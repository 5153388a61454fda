pub mod client;
pub mod expand;
pub mod fetch;
pub mod schedule;
pub mod server;
pub mod site;
