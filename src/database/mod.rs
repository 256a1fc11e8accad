pub mod connection;
pub mod store;

#[cfg(test)]
pub mod memory;
