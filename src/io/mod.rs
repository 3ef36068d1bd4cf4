mod reader;

pub use reader::read_chain;

use crate::error::Error;
use crate::model::chain::HpChain;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Opens `path` and reads the model it contains. The file handle is
/// dropped on every exit path, including parse errors.
pub fn read_chain_file(path: &Path) -> Result<HpChain, Error> {
    let file = File::open(path)?;
    read_chain(BufReader::new(file))
}
