pub mod cli;
pub mod frontmatter;
pub mod name;
pub mod render;
pub mod report;
pub mod scan;
pub mod vault;
