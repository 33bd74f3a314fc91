use super::*;
use agglo_core::*;
use std::io::Write;
use std::path::Path;

/// Writes records to a headered CSV on disk, one row per record.
///
/// Columns are [`ID_COLUMN`] followed by [`ATTRIBUTES`]. Returns the
/// number of rows written. The output reads back with [`load`].
pub fn export<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    path: impl AsRef<Path>,
) -> Result<usize, RecordError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|e| RecordError::io(path, e))?;
    let n = write(records, file)?;
    log::info!("{:<32}{:<32}", "exported records", format!("{} -> {}", n, path.display()));
    Ok(n)
}

/// Writes records as headered CSV to any writer. See [`export`].
pub fn write<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    writer: impl Write,
) -> Result<usize, RecordError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(std::iter::once(ID_COLUMN).chain(ATTRIBUTES))?;
    let mut n = 0;
    for record in records {
        writer.write_record(
            std::iter::once(record.id().to_string())
                .chain(record.attributes().iter().map(|x| x.to_string())),
        )?;
        n += 1;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn grocery(id: Id, seed: u32) -> Record {
        Record::new(
            id,
            (0..N_ATTRIBUTES as u32)
                .map(|k| Energy::from((seed * 7 + k * 3) % 11))
                .collect(),
        )
    }

    #[test]
    fn header_comes_first() {
        let ref mut buffer = Vec::<u8>::new();
        let n = write(&[grocery(3, 1)], &mut *buffer).unwrap();
        assert_eq!(n, 1);
        let text = String::from_utf8(buffer.clone()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("ID,Milk,PetFood,Veggies,Cereal,Nuts,Rice,Meat,Eggs,Yogurt,Chips,Cola,Fruit")
        );
        assert!(lines.next().unwrap().starts_with("3,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn export_then_load_preserves_rows() {
        let records = vec![grocery(10, 1), grocery(4, 2), grocery(25, 3)];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cluster1.csv");
        assert_eq!(export(&records, &path).unwrap(), 3);
        let loaded = load(&path).unwrap();
        let expected = records
            .iter()
            .map(|r| (r.id(), r.attributes().to_vec()))
            .collect::<BTreeMap<_, _>>();
        let actual = loaded
            .iter()
            .map(|r| (r.id(), r.attributes().to_vec()))
            .collect::<BTreeMap<_, _>>();
        assert_eq!(expected, actual);
    }

    #[test]
    fn fractional_values_survive() {
        let mut attributes = vec![0.0; N_ATTRIBUTES];
        attributes[0] = 0.1;
        attributes[5] = 1.0 / 3.0;
        let record = Record::new(1, attributes);
        let ref mut buffer = Vec::<u8>::new();
        write(std::iter::once(&record), &mut *buffer).unwrap();
        let loaded = read(buffer.as_slice()).unwrap();
        assert_eq!(loaded, vec![record]);
    }
}
