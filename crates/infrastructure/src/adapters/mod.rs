//! Adapters for application ports that wrap system services.

mod system_clock;

pub use system_clock::SystemClock;
