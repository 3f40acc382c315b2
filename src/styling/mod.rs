//! Data-driven styling: choropleth fills and continent filters

pub mod choropleth;
mod continent_tables;
pub mod continents;

pub use choropleth::{color_for, ChoroplethScale, ChoroplethSpec};
pub use continents::{classify, filter_by_continents, Continent, ContinentSet};
