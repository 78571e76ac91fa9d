pub mod paths;

pub use paths::{PackagePaths, PathUtils};
