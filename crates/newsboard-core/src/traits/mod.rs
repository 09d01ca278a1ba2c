mod scorer;

pub use scorer::IFreshnessScorer;
