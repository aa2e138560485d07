// Copyright 2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors reported by list operations.
///
/// All errors are reported synchronously to the immediate caller and nothing
/// is retried internally.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ListError {
    /// A required hook was not supplied when building the list.
    #[error("a required hook was not supplied")]
    InvalidArgument,

    /// Storage for the list or a new node could not be reserved.
    #[error("storage for the list could not be reserved")]
    AllocationError,

    /// The removal index does not address a live element.
    #[error("index {index} is out of range for a list of {len} elements")]
    IndexOutOfRange {
        /// The index that was passed in.
        index: usize,
        /// The number of elements the list held at that moment.
        len: usize,
    },

    /// The operation was attempted on a list that has already been destroyed.
    #[error("the list has already been destroyed")]
    InvalidState,
}
