pub mod audit;
pub mod error;
pub mod generalized;
pub mod log;
pub mod ordered;
pub mod queue;
pub(crate) mod ring;
