//! Document parsers.

mod yaml;

pub use yaml::YamlParser;
