use std::cell::Cell;
use std::rc::Rc;

/// Iterator wrapper recording how many elements were pulled from it.
pub struct Counted<I> {
    inner: I,
    pulled: Rc<Cell<usize>>,
}

impl<I> Counted<I> {
    pub fn new(inner: I) -> (Self, Rc<Cell<usize>>) {
        let pulled = Rc::new(Cell::new(0));
        (
            Self {
                inner,
                pulled: Rc::clone(&pulled),
            },
            pulled,
        )
    }
}

impl<I: Iterator> Iterator for Counted<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.next();
        if next.is_some() {
            self.pulled.set(self.pulled.get() + 1);
        }
        next
    }
}

#[allow(dead_code)]
pub fn fruit() -> Vec<&'static str> {
    vec!["apple", "banana", "avocado", "cherry", "blueberry", "apricot"]
}
