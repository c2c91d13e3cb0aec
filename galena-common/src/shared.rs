use std::cell::Cell;
use std::rc::Rc;

/// Cell shared between an emulated device and the component that consumes
/// its outputs. The single execution context driving the system serializes
/// every access, so a plain `Cell` behind an `Rc` is enough.
#[repr(transparent)]
#[derive(Debug)]
pub struct Shared<T: Copy>(Rc<Cell<T>>);

impl<T: Copy> Shared<T> {
    pub fn new(val: T) -> Self {
        Self(Rc::new(Cell::new(val)))
    }

    pub fn get(&self) -> T {
        self.0.get()
    }

    pub fn set(&self, val: T) {
        self.0.set(val)
    }
}

impl<T: Copy> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Copy + Default> Default for Shared<T> {
    fn default() -> Self {
        Shared::new(T::default())
    }
}
