//! First-match evaluation over lazy branches.
//!
//! Each branch pairs a test with a handler and is deferred until
//! [`match_first`] asks for it. Branches are tried in order, the first one
//! that matches supplies the result, and the branches after it are never
//! invoked. A [`Fallback`] is required, so a match without a default case
//! does not compile.
//!
//! ```
//! use tenet_core::matching::{match_first, otherwise, when};
//!
//! let n = 15;
//! let label = match_first(
//!     [
//!         when(&n, |n| n % 15 == 0, |_| "FizzBuzz".to_string()),
//!         when(&n, |n| n % 3 == 0, |_| "Fizz".to_string()),
//!         when(&n, |n| n % 5 == 0, |_| "Buzz".to_string()),
//!     ],
//!     otherwise(&n, |n| n.to_string()),
//! );
//! assert_eq!(label, "FizzBuzz");
//! ```

mod builder;


pub use builder::Match;

use crate::Box;

/// Result of probing a single branch.
///
/// `Unmatched` is its own variant, so it can never be confused with a
/// handler output, even one that is itself `None` or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Probe<O> {
    Matched(O),
    Unmatched,
}

impl<O> Probe<O> {
    pub fn is_matched(&self) -> bool {
        matches!(self, Probe::Matched(_))
    }

    pub fn into_option(self) -> Option<O> {
        match self {
            Probe::Matched(output) => Some(output),
            Probe::Unmatched => None,
        }
    }
}

/// A deferred conditional case. Nothing runs until [`Branch::probe`].
#[must_use]
pub struct Branch<'a, O> {
    thunk: Box<dyn FnOnce() -> Probe<O> + 'a>,
}

impl<'a, O> Branch<'a, O> {
    pub fn new(thunk: impl FnOnce() -> Probe<O> + 'a) -> Self {
        Self {
            thunk: Box::new(thunk),
        }
    }

    pub fn probe(self) -> Probe<O> {
        (self.thunk)()
    }
}

impl<O> core::fmt::Debug for Branch<'_, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Branch(..)")
    }
}

/// The deferred default case. It always produces an output.
#[must_use]
pub struct Fallback<'a, O> {
    thunk: Box<dyn FnOnce() -> O + 'a>,
}

impl<'a, O> Fallback<'a, O> {
    pub fn new(thunk: impl FnOnce() -> O + 'a) -> Self {
        Self {
            thunk: Box::new(thunk),
        }
    }

    pub fn resolve(self) -> O {
        (self.thunk)()
    }
}

impl<O> core::fmt::Debug for Fallback<'_, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Fallback(..)")
    }
}

/// Defer `handler(input)` behind `predicate(input)`.
pub fn when<'a, I, P, H, O>(input: &'a I, predicate: P, handler: H) -> Branch<'a, O>
where
    I: ?Sized,
    P: FnOnce(&'a I) -> bool + 'a,
    H: FnOnce(&'a I) -> O + 'a,
{
    Branch::new(move || {
        if predicate(input) {
            Probe::Matched(handler(input))
        } else {
            Probe::Unmatched
        }
    })
}

/// Like [`when`], but the matcher narrows the input and the handler gets
/// the narrowed value.
///
/// ```
/// use tenet_core::matching::{match_first, otherwise, when_some};
///
/// let input = "42";
/// let doubled = match_first(
///     [when_some(input, |s: &str| s.parse::<i64>().ok(), |n| n * 2)],
///     otherwise(input, |_| 0),
/// );
/// assert_eq!(doubled, 84);
/// ```
pub fn when_some<'a, I, M, N, H, O>(input: &'a I, matcher: M, handler: H) -> Branch<'a, O>
where
    I: ?Sized,
    M: FnOnce(&'a I) -> Option<N> + 'a,
    H: FnOnce(N) -> O + 'a,
{
    Branch::new(move || match matcher(input) {
        Some(narrowed) => Probe::Matched(handler(narrowed)),
        None => Probe::Unmatched,
    })
}

/// Defer the unconditional default `handler(input)`.
pub fn otherwise<'a, I, H, O>(input: &'a I, handler: H) -> Fallback<'a, O>
where
    I: ?Sized,
    H: FnOnce(&'a I) -> O + 'a,
{
    Fallback::new(move || handler(input))
}

/// Probe `branches` in order and return the first match, or the fallback's
/// output when none matches. Branches after the first match are dropped
/// without being invoked.
pub fn match_first<'a, O>(
    branches: impl IntoIterator<Item = Branch<'a, O>>,
    fallback: Fallback<'a, O>,
) -> O {
    for (index, branch) in branches.into_iter().enumerate() {
        if let Probe::Matched(output) = branch.probe() {
            tracing::trace!(index, "branch matched");
            return output;
        }
    }
    tracing::trace!("no branch matched, using fallback");
    fallback.resolve()
}
