pub mod aggregate;

pub use aggregate::{Service, ServiceInput};
