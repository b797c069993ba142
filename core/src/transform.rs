//! Feeding a value through a sequence of functions.
//!
//! [`apply_transforms`] folds a value through stages that all share one
//! type. A [`Pipeline`] lets the type change from stage to stage: each
//! [`Pipeline::then`] must accept what the previous stage produced, so a
//! mismatched pipeline does not compile.
//!
//! ```
//! use tenet_core::transform::Pipeline;
//!
//! let digits = Pipeline::new(|n: u32| n.to_string())
//!     .then(|s: String| s.chars().collect::<Vec<_>>())
//!     .run(123);
//! assert_eq!(digits, vec!['1', '2', '3']);
//! ```
//!
//! ```compile_fail
//! use tenet_core::transform::Pipeline;
//!
//! let broken = Pipeline::new(|n: u32| n.to_string()).then(|n: u32| n + 1);
//! ```

use crate::Box;

/// Apply `transforms` left to right, starting from `input`.
pub fn apply_transforms<T>(input: T, transforms: &[&dyn Fn(T) -> T]) -> T {
    transforms
        .iter()
        .fold(input, |value, transform| transform(value))
}

/// A composed function from `A` to `B`.
#[must_use]
pub struct Pipeline<'a, A, B> {
    run: Box<dyn Fn(A) -> B + 'a>,
    stages: usize,
}

impl<'a, A: 'a, B: 'a> Pipeline<'a, A, B> {
    pub fn new(stage: impl Fn(A) -> B + 'a) -> Self {
        Self {
            run: Box::new(stage),
            stages: 1,
        }
    }

    /// Append a stage that consumes this pipeline's output.
    pub fn then<C: 'a>(self, stage: impl Fn(B) -> C + 'a) -> Pipeline<'a, A, C> {
        let head = self.run;
        Pipeline {
            run: Box::new(move |input: A| stage(head(input))),
            stages: self.stages + 1,
        }
    }

    pub fn run(&self, input: A) -> B {
        (self.run)(input)
    }

    /// Number of stages composed so far.
    pub fn stages(&self) -> usize {
        self.stages
    }
}

impl<A, B> core::fmt::Debug for Pipeline<'_, A, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages)
            .finish_non_exhaustive()
    }
}
