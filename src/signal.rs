//! Read-only taps on externally owned circuit state.
//!
//! The driver never writes to a source; it only samples the current value when
//! it decodes or redraws.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU16, AtomicU32, AtomicU8, Ordering};
use std::sync::Arc;

pub trait SignalSource {
    /// Current value of the signal, zero-extended.
    fn read(&self) -> u32;
}

macro_rules! cell_source {
    ($($ty:ty),*) => {
        $(
            impl SignalSource for Cell<$ty> {
                fn read(&self) -> u32 {
                    self.get() as u32
                }
            }
        )*
    };
}

macro_rules! atomic_source {
    ($($ty:ty),*) => {
        $(
            impl SignalSource for $ty {
                fn read(&self) -> u32 {
                    self.load(Ordering::Relaxed) as u32
                }
            }
        )*
    };
}

cell_source!(u8, u16, u32);
atomic_source!(AtomicU8, AtomicU16, AtomicU32);

impl<T: SignalSource + ?Sized> SignalSource for &T {
    fn read(&self) -> u32 {
        (**self).read()
    }
}

impl<T: SignalSource + ?Sized> SignalSource for Rc<T> {
    fn read(&self) -> u32 {
        (**self).read()
    }
}

impl<T: SignalSource + ?Sized> SignalSource for Arc<T> {
    fn read(&self) -> u32 {
        (**self).read()
    }
}

impl<T: SignalSource + ?Sized> SignalSource for Box<T> {
    fn read(&self) -> u32 {
        (**self).read()
    }
}

/// Adapts a closure into a signal.
pub struct FnSignal<F>(F);

impl<F: Fn() -> u32> SignalSource for FnSignal<F> {
    fn read(&self) -> u32 {
        (self.0)()
    }
}

pub fn from_fn<F: Fn() -> u32>(f: F) -> FnSignal<F> {
    FnSignal(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_cell_reads_latest_value() {
        let segments = Rc::new(Cell::new(0u8));
        let tap: Box<dyn SignalSource> = Box::new(Rc::clone(&segments));
        assert_eq!(tap.read(), 0);
        segments.set(0x5a);
        assert_eq!(tap.read(), 0x5a);
    }

    #[test]
    fn test_atomic_and_closure_sources() {
        let control = Arc::new(AtomicU16::new(0xbeef));
        assert_eq!(control.read(), 0xbeef);

        let constant = from_fn(|| 7);
        assert_eq!(constant.read(), 7);
    }
}
