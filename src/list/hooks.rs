// Copyright 2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use alloc::boxed::Box;
use core::cmp::Ordering;

/// Owned teardown hook of a list.
///
/// The hook consumes an element whenever the list releases one on its own,
/// that is on [`SentinelList::clear`], [`SentinelList::destroy`], and drop.
/// Elements handed back to the caller via [`SentinelList::remove_at`] bypass
/// the hook.
///
/// [`SentinelList::clear`]: super::SentinelList::clear
/// [`SentinelList::destroy`]: super::SentinelList::destroy
/// [`SentinelList::remove_at`]: super::SentinelList::remove_at
pub type DestroyFn<T> = Box<dyn FnMut(T)>;

/// Owned three-way comparator of a list.
///
/// The search operations call it with the stored element first and the probe
/// second; [`Ordering::Equal`] counts as a match.
pub type CompareFn<T> = Box<dyn Fn(&T, &T) -> Ordering>;
