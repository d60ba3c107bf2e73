mod distinct;

pub use distinct::DistinctUntilChanged;
