pub mod config;
pub mod scheduler;

pub use config::SchedulerConfigError;
pub use scheduler::SchedulerError;
