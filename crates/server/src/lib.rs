pub mod errors;
pub mod notice;
pub mod routes;
pub mod startup;

pub use startup::run;
