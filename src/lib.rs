pub mod chart;
pub mod cli;
pub mod commits;
pub mod error;
pub mod github;
pub mod lines;
pub mod model;
pub mod report;
pub mod run;
