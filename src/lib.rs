pub mod config;
pub mod dictionary;
pub mod distance;
pub mod lemmatizer;
pub mod matcher;
pub mod query_parser;
