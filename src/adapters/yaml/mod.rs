//! YAML quandary file adapter.

mod yaml_loader;

pub use yaml_loader::YamlQuandaryLoader;
