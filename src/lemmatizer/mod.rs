pub mod lemmatizer;
