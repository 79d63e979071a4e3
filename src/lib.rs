//! Small collection utilities and a FIFO queue.

pub mod array;
pub mod collate;
pub mod object;
pub mod queue;
pub mod util;
pub mod value;

pub use queue::Queue;
pub use util::EmptyQueueError;
pub use value::Value;
