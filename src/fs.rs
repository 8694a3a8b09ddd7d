use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file() {
        assert!(read_file("levels/does-not-exist.txt").is_err());
    }

    #[test]
    fn level_file() {
        let contents = read_file("levels/custom/01-simplest-xsb.txt").unwrap();
        assert!(contents.contains('@'));
    }
}
