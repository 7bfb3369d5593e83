//! Single-writer shared signal values.
//!
//! The sampler that produces a signal keeps the unique [`SignalWriter`];
//! every consumer reads through cheap clones of [`SharedSignal`]. The writer
//! half is deliberately not `Clone`, so one sampler is the only mutator and
//! all readers within a frame observe one consistent snapshot.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
pub struct SharedSignal<T: Copy> {
    inner: Rc<RefCell<T>>,
}

impl<T: Copy> Clone for SharedSignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Copy> SharedSignal<T> {
    /// Create a signal seeded with `initial`, returning the writing half and
    /// a reader handle.
    pub fn new(initial: T) -> (SignalWriter<T>, SharedSignal<T>) {
        let inner = Rc::new(RefCell::new(initial));
        (
            SignalWriter {
                inner: Rc::clone(&inner),
            },
            SharedSignal { inner },
        )
    }

    #[inline]
    pub fn get(&self) -> T {
        *self.inner.borrow()
    }
}

#[derive(Debug)]
pub struct SignalWriter<T: Copy> {
    inner: Rc<RefCell<T>>,
}

impl<T: Copy> SignalWriter<T> {
    #[inline]
    pub fn set(&self, value: T) {
        *self.inner.borrow_mut() = value;
    }

    #[inline]
    pub fn get(&self) -> T {
        *self.inner.borrow()
    }

    /// Another reader handle onto this signal.
    pub fn reader(&self) -> SharedSignal<T> {
        SharedSignal {
            inner: Rc::clone(&self.inner),
        }
    }
}
