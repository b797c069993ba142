use super::{Branch, match_first, otherwise, when, when_some};
use crate::Vec;

/// Chained form of [`match_first`] over a single input.
///
/// Only [`Match::otherwise`] yields the output, so the default case cannot
/// be left out.
///
/// ```
/// use tenet_core::matching::Match;
///
/// let grade = Match::on(&87)
///     .when(|s| *s >= 90, |_| 'A')
///     .when(|s| *s >= 80, |_| 'B')
///     .otherwise(|_| 'C');
/// assert_eq!(grade, 'B');
/// ```
#[must_use]
pub struct Match<'a, I: ?Sized, O> {
    input: &'a I,
    branches: Vec<Branch<'a, O>>,
}

impl<'a, I: ?Sized, O> Match<'a, I, O> {
    pub fn on(input: &'a I) -> Self {
        Self {
            input,
            branches: Vec::new(),
        }
    }

    pub fn when<P, H>(mut self, predicate: P, handler: H) -> Self
    where
        P: FnOnce(&'a I) -> bool + 'a,
        H: FnOnce(&'a I) -> O + 'a,
    {
        self.branches.push(when(self.input, predicate, handler));
        self
    }

    pub fn when_some<M, N, H>(mut self, matcher: M, handler: H) -> Self
    where
        M: FnOnce(&'a I) -> Option<N> + 'a,
        H: FnOnce(N) -> O + 'a,
    {
        self.branches.push(when_some(self.input, matcher, handler));
        self
    }

    pub fn otherwise<H>(self, handler: H) -> O
    where
        H: FnOnce(&'a I) -> O + 'a,
    {
        match_first(self.branches, otherwise(self.input, handler))
    }
}
