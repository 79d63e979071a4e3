use std::fmt::Display;

use thiserror::Error;

/// Width that single-digit line numbers are zero-padded to.
pub const PAD_WIDTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Queue is empty")]
pub struct EmptyQueueError;

/// Left-pads `n` with zeros up to `PAD_WIDTH` digits. Wider numbers are
/// returned as-is.
pub fn pad_number<N: Display>(n: N) -> String {
    format!("{:0>width$}", n, width = PAD_WIDTH)
}
