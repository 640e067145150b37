pub mod dump;
pub mod output;
pub mod report;
pub mod source;

pub use dump::run;
pub use source::{ArticleSource, SourceOptions, WikipediaSource};
