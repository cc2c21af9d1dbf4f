//! Two-stage predicate evaluation.
//!
//! A [`Predicate`] is written once over [`Number`]. [`Filter::evaluate`] runs
//! it on interval enclosures under upward rounding and, only when a
//! comparison comes out [`Inconclusive`], reruns it on exact rationals.
//! The rounding mode is restored before the exact stage starts.

use std::any::type_name;
use std::cell::Cell;

use crate::error::{Inconclusive, Uncertain};
use crate::filtered::{Approximation, Filtered};
use crate::number::Number;
use crate::rounding::Protector;

/// A decision over `N` numbers.
pub trait Predicate<const N: usize> {
    type Output;

    /// Evaluates the decision, failing only if some comparison is undecidable
    /// over `T`.
    fn eval<T: Number>(&self, args: [&T; N]) -> Uncertain<Self::Output>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Intervals first, exact arithmetic on failure.
    #[default]
    Filtered,
    /// Exact arithmetic only.
    ExactOnly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FilterConfig {
    pub strategy: Strategy,
}

impl FilterConfig {
    pub fn exact_only() -> Self {
        Self {
            strategy: Strategy::ExactOnly,
        }
    }
}

/// The stage that produced an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Path {
    Fast,
    Exact,
}

/// Per-thread count of answers by stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub fast: u64,
    pub exact: u64,
}

impl FilterStats {
    pub fn total(&self) -> u64 {
        self.fast + self.exact
    }
}

thread_local! {
    static STATS: Cell<FilterStats> = const { Cell::new(FilterStats { fast: 0, exact: 0 }) };
}

/// Answers counted on this thread since the last [`reset_stats`].
pub fn stats() -> FilterStats {
    STATS.with(Cell::get)
}

pub fn reset_stats() {
    STATS.with(|s| s.set(FilterStats::default()));
}

fn record(path: Path) {
    STATS.with(|s| {
        let mut stats = s.get();
        match path {
            Path::Fast => stats.fast += 1,
            Path::Exact => stats.exact += 1,
        }
        s.set(stats);
    });
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    config: FilterConfig,
}

impl Filter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Decides `pred` on `args`. Always definite.
    pub fn evaluate<P, A, const N: usize>(&self, pred: &P, args: [&Filtered<A>; N]) -> P::Output
    where
        P: Predicate<N>,
        A: Approximation,
    {
        self.evaluate_traced(pred, args).0
    }

    /// Like [`evaluate`](Self::evaluate), also reporting which stage answered.
    pub fn evaluate_traced<P, A, const N: usize>(
        &self,
        pred: &P,
        args: [&Filtered<A>; N],
    ) -> (P::Output, Path)
    where
        P: Predicate<N>,
        A: Approximation,
    {
        if self.config.strategy == Strategy::Filtered {
            if let Ok(out) = try_fast(pred, args) {
                record(Path::Fast);
                return (out, Path::Fast);
            }
            log::trace!("interval filter failed for {}", type_name::<P>());
        }
        record(Path::Exact);
        (exact(pred, args), Path::Exact)
    }
}

/// Decides `pred` on `args` with the default filter.
pub fn evaluate<P, A, const N: usize>(pred: &P, args: [&Filtered<A>; N]) -> P::Output
where
    P: Predicate<N>,
    A: Approximation,
{
    Filter::default().evaluate(pred, args)
}

/// The interval stage alone.
pub fn try_fast<P, A, const N: usize>(pred: &P, args: [&Filtered<A>; N]) -> Uncertain<P::Output>
where
    P: Predicate<N>,
    A: Approximation,
{
    let _guard = Protector::upward();
    pred.eval(args.map(Filtered::approx))
}

/// The exact stage alone.
pub fn exact<P, A, const N: usize>(pred: &P, args: [&Filtered<A>; N]) -> P::Output
where
    P: Predicate<N>,
    A: Approximation,
{
    match pred.eval(args.map(Filtered::exact)) {
        Ok(out) => out,
        Err(Inconclusive) => unreachable!(
            "exact evaluation of {} was inconclusive",
            type_name::<P>()
        ),
    }
}
