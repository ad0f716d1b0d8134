pub mod weight_lookup;

pub use weight_lookup::WeightLookup;
