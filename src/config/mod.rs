pub mod biome;
pub mod jsonc;

pub use biome::{BiomeConfig, CONFIG_FILE_NAMES};
