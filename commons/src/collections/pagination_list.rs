// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonError, CommonErrorType, CommonResult};

/// A list that can be read one page at a time. Nothing about the pages is stored, the
/// page count and page boundaries are derived from the current length on every call.
///
/// ```
/// use plugin_commons::PaginationList;
///
/// let mut list = PaginationList::new(2).unwrap();
/// list.extend([1, 2, 3, 4, 5]);
/// assert_eq!(list.pages(), 3);
/// assert_eq!(list.page(1).unwrap(), &[3, 4]);
/// assert_eq!(list.page(2).unwrap(), &[5]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationList<T> {
    internal_storage: Vec<T>,
    items_per_page: usize,
}

mod constructor {
    use super::*;

    impl<T> PaginationList<T> {
        /// Creates an empty list with the given page size.
        ///
        /// # Errors
        ///
        /// Returns [`CommonErrorType::InvalidArguments`] if `items_per_page` is zero.
        pub fn new(items_per_page: usize) -> CommonResult<Self> {
            Self::try_from_vec(items_per_page, Vec::new())
        }

        /// # Errors
        ///
        /// Returns [`CommonErrorType::InvalidArguments`] if `items_per_page` is zero.
        pub fn try_from_vec(items_per_page: usize, items: Vec<T>) -> CommonResult<Self> {
            if items_per_page == 0 {
                return CommonError::new_error_result(
                    CommonErrorType::InvalidArguments,
                    "The amount of items per page must be greater than zero, but was 0",
                );
            }

            Ok(Self {
                internal_storage: items,
                items_per_page,
            })
        }
    }
}

mod mutator {
    use super::*;

    impl<T> PaginationList<T> {
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

        pub fn remove(&mut self, index: usize) -> Option<T> {
            if index >= self.internal_storage.len() {
                return None;
            }
            Some(self.internal_storage.remove(index))
        }

        pub fn pop(&mut self) -> Option<T> { self.internal_storage.pop() }

        pub fn truncate(&mut self, new_len: usize) {
            self.internal_storage.truncate(new_len);
        }

        pub fn clear(&mut self) { self.internal_storage.clear(); }
    }

    impl<T> Extend<T> for PaginationList<T> {
        fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
            self.internal_storage.extend(iter);
        }
    }
}

mod size {
    use super::*;

    impl<T> PaginationList<T> {
        #[must_use]
        pub fn len(&self) -> usize { self.internal_storage.len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.internal_storage.is_empty() }

        #[must_use]
        pub fn items_per_page(&self) -> usize { self.items_per_page }

        #[must_use]
        pub fn get(&self, index: usize) -> Option<&T> { self.internal_storage.get(index) }

        #[must_use]
        pub fn as_slice(&self) -> &[T] { &self.internal_storage }

        pub fn iter(&self) -> std::slice::Iter<'_, T> { self.internal_storage.iter() }
    }

    /// This implementation allows the list to be used in a for loop directly.
    impl<'a, T> IntoIterator for &'a PaginationList<T> {
        type Item = &'a T;
        type IntoIter = std::slice::Iter<'a, T>;

        fn into_iter(self) -> Self::IntoIter { self.iter() }
    }
}

mod paging {
    use super::*;

    impl<T> PaginationList<T> {
        /// Number of pages, `0` for an empty list.
        #[must_use]
        pub fn pages(&self) -> usize {
            self.internal_storage.len().div_ceil(self.items_per_page)
        }

        /// Index of the first item on `page`.
        ///
        /// # Errors
        ///
        /// Returns [`CommonErrorType::InvalidArguments`] if `page >= self.pages()`. This
        /// includes every page of an empty list.
        pub fn page_start(&self, page: usize) -> CommonResult<usize> {
            self.check_page_in_bounds(page)?;
            Ok(page * self.items_per_page)
        }

        /// Index one past the last item on `page`. Only the last page can be short.
        ///
        /// # Errors
        ///
        /// Returns [`CommonErrorType::InvalidArguments`] if `page >= self.pages()`.
        pub fn page_end(&self, page: usize) -> CommonResult<usize> {
            self.check_page_in_bounds(page)?;
            let end = (page * self.items_per_page).saturating_add(self.items_per_page);
            Ok(end.min(self.internal_storage.len()))
        }

        /// The items on `page`, borrowed from the list. An empty list has no pages, but
        /// asking it for any page yields an empty slice rather than an error.
        ///
        /// # Errors
        ///
        /// Returns [`CommonErrorType::InvalidArguments`] if the list is not empty and
        /// `page >= self.pages()`.
        pub fn page(&self, page: usize) -> CommonResult<&[T]> {
            if self.internal_storage.is_empty() {
                return Ok(&[]);
            }

            let start = self.page_start(page)?;
            let end = self.page_end(page)?;
            tracing::trace!(page, start, end, "pagination page lookup");
            Ok(&self.internal_storage[start..end])
        }

        fn check_page_in_bounds(&self, page: usize) -> CommonResult<()> {
            let pages = self.pages();
            if page >= pages {
                return CommonError::new_error_result(
                    CommonErrorType::InvalidArguments,
                    &format!(
                        "The page number {page} is out of bounds of the available pages ({pages})"
                    ),
                );
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, assert_err_type};

    fn one_to_six() -> PaginationList<i32> {
        PaginationList::try_from_vec(2, (1..=6).collect()).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_page_size() {
        assert_err_type!(
            PaginationList::<i32>::new(0),
            CommonErrorType::InvalidArguments
        );
        assert_err_type!(
            PaginationList::try_from_vec(0, vec![1]),
            CommonErrorType::InvalidArguments
        );
    }

    #[test]
    fn test_page_calculation_follows_length() {
        let mut list = one_to_six();
        assert_eq2!(list.pages(), 3);
        list.push(7);
        assert_eq2!(list.pages(), 4);
        list.push(8);
        assert_eq2!(list.pages(), 4);
        list.truncate(1);
        assert_eq2!(list.pages(), 1);
        list.clear();
        assert_eq2!(list.pages(), 0);
    }

    #[test]
    fn test_page_contents() {
        let list = one_to_six();
        assert_eq2!(list.page(0).unwrap(), &[1, 2]);
        assert_eq2!(list.page(1).unwrap(), &[3, 4]);
        assert_eq2!(list.page(2).unwrap(), &[5, 6]);
    }

    #[test]
    fn test_too_big_page() {
        let list = one_to_six();
        assert_err_type!(list.page(3), CommonErrorType::InvalidArguments);
        assert_err_type!(list.page(4), CommonErrorType::InvalidArguments);
    }

    #[test]
    fn test_ten_items_three_per_page() {
        let list = PaginationList::try_from_vec(3, (0..10).collect::<Vec<u8>>()).unwrap();
        assert_eq2!(list.pages(), 4);
        assert_eq2!(list.page_start(3).unwrap(), 9);
        assert_eq2!(list.page_end(3).unwrap(), 10);
        assert_eq2!(list.page(3).unwrap(), &[9]);
        assert_err_type!(list.page_start(4), CommonErrorType::InvalidArguments);
        assert_err_type!(list.page_end(4), CommonErrorType::InvalidArguments);
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(usize::MAX)]
    fn test_empty_list(page: usize) {
        let list = PaginationList::<String>::new(5).unwrap();
        assert_eq2!(list.pages(), 0);
        assert!(list.page(page).unwrap().is_empty());
        assert_err_type!(list.page_start(page), CommonErrorType::InvalidArguments);
        assert_err_type!(list.page_end(page), CommonErrorType::InvalidArguments);
    }

    #[test]
    fn test_mutators() {
        let mut list = one_to_six();
        list.insert(0, 0).unwrap();
        assert_eq2!(list.page(0).unwrap(), &[0, 1]);
        assert_err_type!(list.insert(100, 0), CommonErrorType::IndexOutOfBounds);
        assert_eq2!(list.remove(0), Some(0));
        assert_eq2!(list.remove(100), None);
        assert_eq2!(list.pop(), Some(6));
        assert_eq2!(list.page(2).unwrap(), &[5]);
        assert_eq2!(list.len(), 5);
        assert_eq2!(list.items_per_page(), 2);
        assert_eq2!(list.get(4), Some(&5));
        assert_eq2!(list.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq2!((&list).into_iter().count(), 5);
    }
}
