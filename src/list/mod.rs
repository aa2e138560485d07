// Copyright 2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

mod arena;
mod hooks;
mod owning;

pub use arena::{Iter, IterMut};
pub use hooks::*;
pub use owning::*;
