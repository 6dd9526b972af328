use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    error::{CatalogError, Result},
    item::Item,
};

/// Writes `items` as a pretty-printed json array to `path`.
///
/// The json goes to a temporary file next to `path` which replaces `path`
/// only once fully written, so a failed run leaves no partial catalog. The
/// parent directory must already exist.
pub fn write_catalog(path: &Path, items: &[Item]) -> Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file =
        tempfile::NamedTempFile::new_in(directory).map_err(|e| CatalogError::io(directory, e))?;

    {
        let mut writer = BufWriter::new(file.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, items)?;
        writer.write_all(b"\n").map_err(|e| CatalogError::io(path, e))?;
        writer.flush().map_err(|e| CatalogError::io(path, e))?;
    }

    file.persist(path).map_err(|e| CatalogError::io(path, e.error))?;
    log::info!("wrote {} items to {}", items.len(), path.display());
    Ok(())
}

pub fn read_catalog(path: &Path) -> Result<Vec<Item>> {
    let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::assemble, item_generator::ItemGenerator, seed_items::seed_items};

    #[test]
    fn catalog_round_trips_through_the_file() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("items.json");
        let catalog = assemble(seed_items().unwrap(), 300, &mut ItemGenerator::new(17)).unwrap();

        write_catalog(&path, catalog.items()).unwrap();
        let read = read_catalog(&path).unwrap();
        assert_eq!(read.len(), catalog.items().len());
        assert_eq!(read, catalog.items());
    }

    #[test]
    fn output_uses_two_space_indent_and_key_order() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("items.json");
        let items = &seed_items().unwrap()[..1];

        write_catalog(&path, items).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            concat!(
                "[\n",
                "  {\n",
                "    \"name\": \"MacBook Pro 16\\\"\",\n",
                "    \"description\": \"Apple MacBook Pro with M3 Max chip, 36GB RAM, 1TB SSD\",\n",
                "    \"category\": \"Electronics\",\n",
                "    \"quantity\": 15,\n",
                "    \"price\": 3499.99\n",
                "  }\n",
                "]\n",
            )
        );
    }

    #[test]
    fn existing_output_is_replaced() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("items.json");
        std::fs::write(&path, "stale").unwrap();

        write_catalog(&path, &[]).unwrap();
        assert!(read_catalog(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error_and_writes_nothing() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("absent").join("items.json");

        let err = write_catalog(&path, &seed_items().unwrap()).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(directory.path()).unwrap().count(), 0);
    }
}
