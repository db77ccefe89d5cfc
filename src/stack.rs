use crate::definitions::N_ITEMS_ON_STACK;
use smallvec::SmallVec;

/// Last-in-first-out container the parser keeps pending operators and finished
/// sub-expressions in.
///
/// Items live inline until more than a handful are pushed, so parsing a typical
/// calculator line does not allocate for its stacks.
///
/// ```rust
/// use calcex::Stack;
/// let mut stack = Stack::new();
/// stack.push('(');
/// stack.push('+');
/// assert_eq!(stack.top(), Some(&'+'));
/// assert_eq!(stack.pop(), Some('+'));
/// assert_eq!(stack.size(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Stack<T> {
    items: SmallVec<[T; N_ITEMS_ON_STACK]>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            items: SmallVec::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes the top item and hands it over, `None` if there is nothing left.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Borrows the top item without removing it.
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
