//! Orderings used by the queues.
//!
//! A queue always holds a `Comparator`. When it was built without an explicit one, the
//! comparator wraps the element type's `NaturalOrder`, and the queue's `comparator()`
//! accessor reports `None`.

use core::cmp::Ordering;
use std::sync::Arc;

/// The intrinsic order of an element type, used when no comparator is supplied.
///
/// Floating point types use `total_cmp`, so `-0.0 < 0.0` and NaN sorts above every
/// other value.
pub trait NaturalOrder {
    fn natural_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! natural_order_via_ord {
    ($($t:ty),*) => {
        $(
            impl NaturalOrder for $t {
                fn natural_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    }
}

natural_order_via_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, (), str,
    String
);

impl NaturalOrder for f32 {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl NaturalOrder for f64 {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl<T: NaturalOrder + ?Sized> NaturalOrder for &T {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        (**self).natural_cmp(*other)
    }
}

type CompareFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

enum Order<T> {
    Natural(fn(&T, &T) -> Ordering),
    Custom(Arc<CompareFn<T>>),
}

/// A two-argument order function. `compare(a, b) == Less` means `a` leaves the queue
/// before `b`.
///
/// Comparators are immutable. Cloning one shares the underlying function.
pub struct Comparator<T> {
    order: Order<T>,
}

impl<T> Comparator<T> {
    pub fn natural() -> Self
    where
        T: NaturalOrder,
    {
        Self {
            order: Order::Natural(T::natural_cmp),
        }
    }

    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            order: Order::Custom(Arc::new(f)),
        }
    }

    /// Returns a comparator with the opposite order. Reversing the natural order turns a
    /// min-queue into a max-queue.
    pub fn reversed(&self) -> Self
    where
        T: 'static,
    {
        match &self.order {
            Order::Natural(f) => {
                let f = *f;
                Self::from_fn(move |a: &T, b: &T| f(b, a))
            }
            Order::Custom(f) => {
                let f = Arc::clone(f);
                Self::from_fn(move |a: &T, b: &T| f(b, a))
            }
        }
    }

    pub fn is_natural(&self) -> bool {
        match self.order {
            Order::Natural(_) => true,
            Order::Custom(_) => false,
        }
    }

    /// `Some(self)` for an explicit comparator, `None` for natural order.
    pub fn as_custom(&self) -> Option<&Self> {
        if self.is_natural() {
            None
        } else {
            Some(self)
        }
    }

    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match &self.order {
            Order::Natural(f) => f(a, b),
            Order::Custom(f) => f(a, b),
        }
    }

    /// True if `a` is strictly more extreme than `b`, that is, `a` must leave first.
    #[inline]
    pub fn precedes(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        let order = match &self.order {
            Order::Natural(f) => Order::Natural(*f),
            Order::Custom(f) => Order::Custom(Arc::clone(f)),
        };
        Self { order }
    }
}

impl<T: NaturalOrder> Default for Comparator<T> {
    fn default() -> Self {
        Self::natural()
    }
}

use core::fmt::{Debug, Formatter};
impl<T> Debug for Comparator<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        match self.order {
            Order::Natural(_) => write!(fmt, "Comparator(natural)"),
            Order::Custom(_) => write!(fmt, "Comparator(custom)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order() {
        let c = Comparator::<i32>::natural();
        assert!(c.is_natural());
        assert!(c.as_custom().is_none());
        assert_eq!(c.compare(&1, &2), Ordering::Less);
        assert_eq!(c.compare(&2, &2), Ordering::Equal);
        assert!(c.precedes(&-5, &0));
        assert!(!c.precedes(&0, &0));
    }

    #[test]
    fn float_natural_order() {
        let c = Comparator::<f64>::natural();
        assert_eq!(c.compare(&-0.0, &0.0), Ordering::Less);
        assert_eq!(c.compare(&f64::NAN, &f64::INFINITY), Ordering::Greater);
        assert_eq!(c.compare(&1.5, &1.5), Ordering::Equal);
    }

    #[test]
    fn reversed_and_custom() {
        let natural = Comparator::<u32>::natural();
        let reversed = natural.reversed();
        assert!(!reversed.is_natural());
        assert!(reversed.as_custom().is_some());
        assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
        assert_eq!(reversed.reversed().compare(&1, &2), Ordering::Less);

        let by_abs = Comparator::from_fn(|a: &i64, b: &i64| a.abs().cmp(&b.abs()));
        assert!(by_abs.precedes(&-1, &2));
        assert_eq!(by_abs.clone().compare(&-3, &3), Ordering::Equal);
    }

    #[test]
    fn str_order() {
        let c = Comparator::<&str>::natural();
        assert!(c.precedes(&"apple", &"banana"));
        let c = Comparator::<String>::natural();
        assert!(c.precedes(&"a".to_string(), &"b".to_string()));
    }
}
