use std::{
    fs::File,
    io::{BufReader, Read},
};

use xz2::read::XzDecoder;

use crate::config_io::Source;

/// The text of a problem, read from its source.
pub fn read_problem(source: &Source) -> std::io::Result<String> {
    let mut text = String::default();

    match source {
        Source::Expression(expression) => text.push_str(expression),

        Source::File(path) => {
            let file = File::open(path)?;
            match &path.extension() {
                Some(extension) if *extension == "xz" => {
                    BufReader::new(XzDecoder::new(&file)).read_to_string(&mut text)?;
                }
                _ => {
                    BufReader::new(&file).read_to_string(&mut text)?;
                }
            }
        }

        Source::Stdin => {
            std::io::stdin().lock().read_to_string(&mut text)?;
        }
    }

    Ok(text)
}
