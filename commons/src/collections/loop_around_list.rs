// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A list that presents a fixed size cutout starting at a cursor, looping around to the
//! front of the list when the cutout runs past the end.
//!
//! ```text
//! |1 2 3 4 5 6 7 8|       cursor: 3, cutout size: 4
//! |      <----->  |       cutout: [4, 5, 6, 7]
//!
//! advance()
//!
//! |1 2 3 4 5 6 7 8|       cursor: 4
//! |        <----->|       cutout: [5, 6, 7, 8]
//!
//! advance()
//!
//! |1 2 3 4 5 6 7 8|       cursor: 5
//! |>         <----|       cutout: [6, 7, 8, 1]
//!
//! advance()
//!
//! |1 2 3 4 5 6 7 8|       cursor: 6
//! |-->         <--|       cutout: [7, 8, 1, 2]
//! ```

use crate::{CommonError, CommonErrorType, CommonResult, add_mod, floor_mod};

/// Owns its backing [Vec] and a cursor into it. Only a narrow set of mutators is exposed
/// so that the cursor can be kept in range whenever the list shrinks.
///
/// # Fields
///
/// * `internal_storage`: The backing sequence.
/// * `cutout_size`: Number of items in every cutout, always greater than zero.
/// * `cursor`: Start of the cutout. In `[0, len)` when the list is not empty, `0`
///   otherwise.
///
/// # Modules
///
/// * `constructor`: [`Self::new`] and [`Self::try_from_vec`].
/// * `mutator`: Methods that change the backing sequence.
/// * `size`: Read only access to the backing sequence.
/// * `cursor_movement`: Methods that move the cutout.
/// * `cutout`: Methods that materialize the cutout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopAroundList<T> {
    internal_storage: Vec<T>,
    cutout_size: usize,
    cursor: usize,
}

mod constructor {
    use super::*;

    impl<T> LoopAroundList<T> {
        /// Creates an empty list with the given cutout size.
        ///
        /// # Errors
        ///
        /// Returns [`CommonErrorType::InvalidArguments`] if `cutout_size` is zero.
        pub fn new(cutout_size: usize) -> CommonResult<Self> {
            Self::try_from_vec(cutout_size, Vec::new())
        }

        /// Creates a list that is pre-populated with `items`. The cursor starts at `0`.
        ///
        /// # Errors
        ///
        /// Returns [`CommonErrorType::InvalidArguments`] if `cutout_size` is zero.
        pub fn try_from_vec(cutout_size: usize, items: Vec<T>) -> CommonResult<Self> {
            if cutout_size == 0 {
                return CommonError::new_error_result(
                    CommonErrorType::InvalidArguments,
                    "The cutout size needs to be greater than zero, but was 0",
                );
            }

            Ok(Self {
                internal_storage: items,
                cutout_size,
                cursor: 0,
            })
        }
    }
}

mod mutator {
    use super::*;

    impl<T> LoopAroundList<T> {
        pub fn push(&mut self, value: T) { self.internal_storage.push(value); }

        /// Inserts `value` at `index`, shifting everything after it to the right.
        ///
        /// # Errors
        ///
        /// Returns [`CommonErrorType::IndexOutOfBounds`] if `index > len`.
        pub fn insert(&mut self, index: usize, value: T) -> CommonResult<()> {
            if index > self.internal_storage.len() {
                return CommonError::new_error_result(
                    CommonErrorType::IndexOutOfBounds,
                    &format!(
                        "Insertion index {index} is past the end (len {})",
                        self.internal_storage.len()
                    ),
                );
            }
            self.internal_storage.insert(index, value);
            Ok(())
        }

        /// Removes the item at `index`. Returns [None] if there isn't one.
        pub fn remove(&mut self, index: usize) -> Option<T> {
            if index >= self.internal_storage.len() {
                return None;
            }
            let value = self.internal_storage.remove(index);
            self.renormalize_cursor();
            Some(value)
        }

        pub fn pop(&mut self) -> Option<T> {
            let value = self.internal_storage.pop();
            self.renormalize_cursor();
            value
        }

        pub fn truncate(&mut self, new_len: usize) {
            self.internal_storage.truncate(new_len);
            self.renormalize_cursor();
        }

        pub fn clear(&mut self) {
            self.internal_storage.clear();
            self.cursor = 0;
        }

        /// Keeps the cursor pointing at the same logical offset, modulo the new length.
        fn renormalize_cursor(&mut self) {
            let len = self.internal_storage.len();
            self.cursor = if len == 0 { 0 } else { self.cursor % len };
        }
    }

    impl<T> Extend<T> for LoopAroundList<T> {
        fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
            self.internal_storage.extend(iter);
        }
    }
}

mod size {
    use super::*;

    impl<T> LoopAroundList<T> {
        #[must_use]
        pub fn len(&self) -> usize { self.internal_storage.len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.internal_storage.is_empty() }

        #[must_use]
        pub fn cutout_size(&self) -> usize { self.cutout_size }

        #[must_use]
        pub fn cursor(&self) -> usize { self.cursor }

        #[must_use]
        pub fn get(&self, index: usize) -> Option<&T> { self.internal_storage.get(index) }

        #[must_use]
        pub fn as_slice(&self) -> &[T] { &self.internal_storage }

        pub fn iter(&self) -> std::slice::Iter<'_, T> { self.internal_storage.iter() }
    }

    /// This implementation allows the list to be used in a for loop directly.
    impl<'a, T> IntoIterator for &'a LoopAroundList<T> {
        type Item = &'a T;
        type IntoIter = std::slice::Iter<'a, T>;

        fn into_iter(self) -> Self::IntoIter { self.iter() }
    }
}

mod cursor_movement {
    use super::*;

    impl<T> LoopAroundList<T> {
        /// Moves the cutout one forward. Returns the new cursor.
        ///
        /// # Errors
        ///
        /// Returns [`CommonErrorType::InvalidState`] if the list is empty.
        pub fn advance(&mut self) -> CommonResult<usize> { self.move_by(1) }

        /// Moves the cutout one backward. Returns the new cursor.
        ///
        /// # Errors
        ///
        /// Returns [`CommonErrorType::InvalidState`] if the list is empty.
        pub fn retreat(&mut self) -> CommonResult<usize> { self.move_by(-1) }

        /// Moves the cutout by `steps`, which may be negative. Returns the new cursor.
        ///
        /// # Errors
        ///
        /// Returns [`CommonErrorType::InvalidState`] if the list is empty.
        pub fn move_by(&mut self, steps: isize) -> CommonResult<usize> {
            let len = self.internal_storage.len();
            let Ok(step_offset) = floor_mod(steps, len) else {
                return empty_list_error("move the cursor");
            };
            let new_cursor = add_mod(self.cursor, step_offset, len)?;
            Ok(self.commit_cursor(new_cursor))
        }

        /// Sets the cursor to `index`, wrapped into `[0, len)` using floored modulo. So
        /// for a list of length 8, `-1` becomes `7`. Returns the new cursor.
        ///
        /// # Errors
        ///
        /// Returns [`CommonErrorType::InvalidState`] if the list is empty. The cursor is
        /// left untouched in that case.
        pub fn set_cursor(&mut self, index: isize) -> CommonResult<usize> {
            let Ok(new_cursor) = floor_mod(index, self.internal_storage.len()) else {
                return empty_list_error("set the cursor");
            };
            Ok(self.commit_cursor(new_cursor))
        }

        fn commit_cursor(&mut self, new_cursor: usize) -> usize {
            tracing::trace!(
                from = self.cursor,
                to = new_cursor,
                len = self.internal_storage.len(),
                "loop around cursor moved"
            );
            self.cursor = new_cursor;
            self.cursor
        }
    }

    fn empty_list_error(action: &str) -> CommonResult<usize> {
        CommonError::new_error_result(
            CommonErrorType::InvalidState,
            &format!("Can't {action} of an empty list"),
        )
    }
}

mod cutout {
    use super::*;

    impl<T> LoopAroundList<T> {
        /// Iterates over the items currently in the cutout, starting at the cursor and
        /// looping around to the front of the list.
        ///
        /// # Errors
        ///
        /// Returns [`CommonErrorType::InvalidState`] if the list is empty, or if it is
        /// shorter than the cutout size (the cutout can't be filled without repeats).
        pub fn cutout_iter(&self) -> CommonResult<LoopAroundIterator<'_, T>> {
            let len = self.internal_storage.len();

            if len == 0 {
                return CommonError::new_error_result(
                    CommonErrorType::InvalidState,
                    "Can't take a cutout of an empty list",
                );
            }

            if self.cutout_size > len {
                return CommonError::new_error_result(
                    CommonErrorType::InvalidState,
                    &format!(
                        "The cutout size ({}) is bigger than the list (len {len})",
                        self.cutout_size
                    ),
                );
            }

            Ok(LoopAroundIterator {
                items: &self.internal_storage,
                start: self.cursor,
                iterator_index: 0,
                count: self.cutout_size,
            })
        }

        /// Copies the items currently in the cutout into a new [Vec]. This is always
        /// computed fresh from the current contents of the list.
        ///
        /// # Errors
        ///
        /// See [`Self::cutout_iter`].
        pub fn cutout(&self) -> CommonResult<Vec<T>>
        where
            T: Clone,
        {
            Ok(self.cutout_iter()?.cloned().collect())
        }
    }
}

/// Borrowing iterator over a cutout. Created by [`LoopAroundList::cutout_iter`].
#[derive(Debug)]
pub struct LoopAroundIterator<'a, T> {
    items: &'a [T],
    start: usize,
    iterator_index: usize,
    count: usize,
}

impl<'a, T> Iterator for LoopAroundIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.iterator_index == self.count {
            return None;
        }

        let room_until_wrap = self.items.len() - self.start;
        let actual_index = if self.iterator_index >= room_until_wrap {
            self.iterator_index - room_until_wrap
        } else {
            self.start + self.iterator_index
        };
        self.iterator_index += 1;
        self.items.get(actual_index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.iterator_index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for LoopAroundIterator<'_, T> {}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    fn list_of_len(len: usize) -> LoopAroundList<usize> {
        LoopAroundList::try_from_vec(1, (0..len).collect()).unwrap()
    }

    proptest! {
        #[test]
        fn set_cursor_is_normalized_and_periodic(
            len in 1_usize..64,
            cursor in -10_000_isize..10_000,
            k in -50_isize..50,
        ) {
            let signed_len = isize::try_from(len).unwrap();
            let mut list = list_of_len(len);

            let first = list.set_cursor(cursor).unwrap();
            prop_assert!(first < len);
            prop_assert_eq!(list.cursor(), first);

            let second = list.set_cursor(cursor + k * signed_len).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn cutout_starts_at_cursor(
            len in 1_usize..64,
            cutout_size in 1_usize..64,
            cursor in -10_000_isize..10_000,
        ) {
            prop_assume!(cutout_size <= len);
            let mut list =
                LoopAroundList::try_from_vec(cutout_size, (0..len).collect()).unwrap();
            let cursor = list.set_cursor(cursor).unwrap();
            let cutout = list.cutout().unwrap();
            prop_assert_eq!(cutout.len(), cutout_size);
            prop_assert_eq!(cutout[0], cursor);
        }

        #[test]
        fn advance_then_retreat_restores_cursor(
            len in 1_usize..64,
            cursor in -10_000_isize..10_000,
        ) {
            let mut list = list_of_len(len);
            let start = list.set_cursor(cursor).unwrap();

            list.advance().unwrap();
            prop_assert_eq!(list.retreat().unwrap(), start);

            list.retreat().unwrap();
            prop_assert_eq!(list.advance().unwrap(), start);
        }

        #[test]
        fn move_by_matches_set_cursor(
            len in 1_usize..64,
            cursor in -10_000_isize..10_000,
            steps in -10_000_isize..10_000,
        ) {
            let mut moved = list_of_len(len);
            let start = moved.set_cursor(cursor).unwrap();
            let moved_cursor = moved.move_by(steps).unwrap();

            let mut set = list_of_len(len);
            let start_signed = isize::try_from(start).unwrap();
            prop_assert_eq!(set.set_cursor(start_signed + steps).unwrap(), moved_cursor);
        }
    }
}
