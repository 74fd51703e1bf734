mod config;
mod pipeline;
mod scenarios;
