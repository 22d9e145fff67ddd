use derive_more::{Display, Error};

/// Returned when a [`HashSet`](crate::HashSet) is requested with no buckets.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to create a HashSet with capacity 0!")]
pub struct ZeroCapacity;
