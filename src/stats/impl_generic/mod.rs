//! Runtime-generic statistics implementations shared by every backend.

mod descriptive;
mod regression;

pub use descriptive::describe_impl;
pub use regression::linregress_impl;
