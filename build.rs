use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/fungi.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let records = catalog.get("records").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'records' field\n\
             The catalog must have a top-level 'records' array.\n"
        );
    });

    let records = records.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'records' must be an array\n\
             Got: {records}\n"
        );
    });

    for (i, record) in records.iter().enumerate() {
        validate_record_fields(record, i);
    }
}

fn validate_record_fields(record: &serde_json::Value, index: usize) {
    for field in ["genus_name", "species_name"] {
        let value = record.get(field).and_then(serde_json::Value::as_str);
        assert!(
            value.is_some_and(|v| !v.trim().is_empty()),
            "\n\nCATALOG BUILD ERROR: Record at index {index} missing or empty '{field}' field\n"
        );
    }

    assert!(
        record.get("edibility").is_some(),
        "\n\nCATALOG BUILD ERROR: Record at index {index} missing 'edibility' field\n"
    );

    if let Some(names) = record.get("common_names") {
        assert!(
            names.is_array(),
            "\n\nCATALOG BUILD ERROR: Record at index {index} has non-array 'common_names'\n"
        );
    }
}

fn set_build_dependencies() {
    println!("cargo:rerun-if-changed=catalogs/fungi.json");
    println!("cargo:rerun-if-changed=build.rs");
}
