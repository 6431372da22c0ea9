pub mod catalog_ops;
pub mod config_ops;
pub mod play_ops;

use std::path::Path;

use kanatype::{default_catalog, load_catalog, Word};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
pub(crate) use die;

/// Words from `file`, or the embedded sample catalog when no file is given.
pub(crate) fn read_words(file: Option<&str>) -> Vec<Word> {
    match file {
        Some(f) => die!(load_catalog(Path::new(f)), "Error: {}"),
        None => default_catalog(),
    }
}
