//! Use cases (application services)

pub mod customer_support;
