use std::{
    fmt,
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign},
};

use rand::{
    distributions::uniform::{SampleBorrow, SampleUniform, UniformInt, UniformSampler},
    Rng,
};

use serde::Serialize;

/// The length of a path segment between two landmarks.
///
/// Lengths are whole, non-negative units; a negative length is not
/// representable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cost(usize);

impl Cost {
    pub fn new(cost: usize) -> Self {
        Cost(cost)
    }

    pub fn as_float(&self) -> f64 {
        self.0 as f64
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl Add for Cost {
    type Output = Self;
    fn add(self, rhs: Cost) -> Self::Output {
        Cost(self.0 + rhs.0)
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, rhs: Cost) {
        *self = Cost(self.0 + rhs.0)
    }
}

impl Sum<Cost> for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::new(0), |a, b| a + b)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for Cost {
    fn from(cost: usize) -> Self {
        Cost::new(cost)
    }
}

/// The length of a route, or the absence of one.
///
/// The ordering puts `Unreachable` above every finite length, so the minimum
/// over a set of route lengths is a real route whenever one exists.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PathCost {
    Path(Cost),
    Unreachable,
}

impl PathCost {
    pub fn finite(&self) -> Option<Cost> {
        match self {
            PathCost::Path(cost) => Some(*cost),
            PathCost::Unreachable => None,
        }
    }
}

impl Add<Cost> for PathCost {
    type Output = Self;
    fn add(self, rhs: Cost) -> Self::Output {
        match self {
            PathCost::Path(cost) => PathCost::Path(cost + rhs),
            PathCost::Unreachable => PathCost::Unreachable,
        }
    }
}

impl From<Cost> for PathCost {
    fn from(cost: Cost) -> Self {
        PathCost::Path(cost)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct UniformCost(UniformInt<usize>);

impl UniformSampler for UniformCost {
    type X = Cost;
    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        UniformCost(UniformInt::<usize>::new(low.borrow().0, high.borrow().0))
    }
    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        UniformSampler::new(low, high)
    }
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        Cost::new(self.0.sample(rng))
    }
}

impl SampleUniform for Cost {
    type Sampler = UniformCost;
}
