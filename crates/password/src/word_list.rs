/// Ordered collection of tokens used to assemble passwords.
///
/// Implementations must only contain non-empty tokens; the
/// list itself is only ever borrowed immutably so it can be
/// shared between generators without synchronization.
pub trait WordList {
    /// Token type.
    type Token: AsRef<str>;

    /// Tokens in the list.
    fn tokens(&self) -> &[Self::Token];

    /// Number of tokens in the list.
    fn count(&self) -> usize {
        self.tokens().len()
    }

    /// Determine if the list has no tokens.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl<T: AsRef<str>> WordList for [T] {
    type Token = T;

    fn tokens(&self) -> &[T] {
        self
    }
}

impl<T: AsRef<str>, const N: usize> WordList for [T; N] {
    type Token = T;

    fn tokens(&self) -> &[T] {
        self
    }
}

impl<T: AsRef<str>> WordList for Vec<T> {
    type Token = T;

    fn tokens(&self) -> &[T] {
        self
    }
}
