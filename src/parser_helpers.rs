#![forbid(unsafe_code)]

use bytemuck::{checked::pod_read_unaligned, Pod};

use crate::RasterError;
use core::mem::size_of;

/// Reads a `T` off the front of the bytes, giving back the rest.
#[inline]
pub(crate) fn try_pull_pod<T: Pod>(bytes: &[u8]) -> Result<(T, &[u8]), RasterError> {
  let position = size_of::<T>();
  if bytes.len() >= position {
    let (head, tail) = bytes.split_at(position);
    let a: T = pod_read_unaligned(head);
    Ok((a, tail))
  } else {
    Err(RasterError::InsufficientBytes)
  }
}
