pub mod diagnostics;
pub mod fixtures;
pub mod paths;
