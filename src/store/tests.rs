//! Store Module Tests
//!
//! Validates dataset parsing and the record conversion rules.
//!
//! ## Test Scopes
//! - **XML parsing**: Row layout, ignored elements, malformed input.
//! - **Record conversion**: Name concatenation and field mapping.
//! - **Loading**: Reading the bundled dataset from disk.

#[cfg(test)]
mod tests {
    use crate::store::memory::RecordStore;
    use crate::store::types::{Record, Row};

    const TWO_ROWS: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<root>
  <row>
    <id>10</id>
    <guid>ignored</guid>
    <age>31</age>
    <first_name>Ada</first_name>
    <last_name>Lovelace</last_name>
    <gender>female</gender>
    <about>Wrote the first program.</about>
  </row>
  <row>
    <id>11</id>
    <age>40</age>
    <first_name>Alan</first_name>
    <last_name>Turing</last_name>
    <gender>male</gender>
    <about>Broke ciphers.</about>
  </row>
</root>"#;

    // ============================================================
    // XML PARSING TESTS
    // ============================================================

    #[test]
    fn test_from_xml_str_parses_rows_in_order() {
        let store = RecordStore::from_xml_str(TWO_ROWS).expect("valid xml");

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].id, 10);
        assert_eq!(store.records()[1].id, 11);
    }

    #[test]
    fn test_from_xml_str_maps_fields() {
        let store = RecordStore::from_xml_str(TWO_ROWS).unwrap();
        let ada = &store.records()[0];

        assert_eq!(ada.name, "AdaLovelace");
        assert_eq!(ada.age, 31);
        assert_eq!(ada.gender, "female");
        assert_eq!(ada.about, "Wrote the first program.");
    }

    #[test]
    fn test_from_xml_str_empty_root() {
        let store = RecordStore::from_xml_str("<root></root>").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_xml_str_rejects_non_integer_id() {
        let xml = "<root><row><id>abc</id><age>1</age></row></root>";
        assert!(RecordStore::from_xml_str(xml).is_err());
    }

    #[test]
    fn test_from_xml_str_rejects_garbage() {
        assert!(RecordStore::from_xml_str("<root><row>").is_err());
    }

    // ============================================================
    // RECORD CONVERSION TESTS
    // ============================================================

    #[test]
    fn test_record_from_row_concatenates_name_without_separator() {
        let row = Row {
            id: 1,
            age: 2,
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            about: String::new(),
            gender: "male".to_string(),
        };

        let record = Record::from(row);
        assert_eq!(record.name, "JohnSmith");
    }

    #[test]
    fn test_record_serializes_with_pascal_case_keys() {
        let record = Record {
            id: 7,
            name: "JohnSmith".to_string(),
            age: 33,
            about: "about".to_string(),
            gender: "male".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["Id"], 7);
        assert_eq!(value["Name"], "JohnSmith");
        assert_eq!(value["Age"], 33);
        assert_eq!(value["About"], "about");
        assert_eq!(value["Gender"], "male");
    }

    // ============================================================
    // LOADING TESTS
    // ============================================================

    #[test]
    fn test_load_bundled_dataset() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/dataset.xml");
        let store = RecordStore::load(path).expect("bundled dataset should load");

        assert_eq!(store.len(), 8);
        assert_eq!(store.records()[0].name, "BoydWolf");
        assert!(store.iter().all(|r| !r.gender.is_empty()));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = RecordStore::load("/definitely/not/here.xml");
        assert!(result.is_err());
    }
}
