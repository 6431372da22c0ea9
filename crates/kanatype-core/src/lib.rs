pub mod matcher;
pub mod romaji;
pub mod settings;
pub mod unicode;
pub mod word;
