//! Application Layer
//!
//! Orchestrates the costing domain through ports and use cases.
//!
//! - **Ports**: Store interfaces for the rows the engine reads and writes
//! - **Services**: Aggregators, feed pricing, and the allocation engine
//! - **Use Cases**: One per exposed operation
//! - **DTOs**: Wire shapes for API boundaries

pub mod dto;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use dto::*;
pub use ports::*;
pub use services::*;
pub use use_cases::*;
