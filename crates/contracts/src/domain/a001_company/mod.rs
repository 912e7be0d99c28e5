pub mod aggregate;

pub use aggregate::{Company, CompanyInput};
