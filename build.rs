use std::collections::HashSet;
use std::path::Path;

/// Number of accessions the embedded chromosome table must carry.
const EXPECTED_ACCESSIONS: usize = 24;

fn main() {
    let table_path = Path::new("catalogs/chromosomes.json");
    validate_table_file(table_path);
    set_build_dependencies();
}

fn validate_table_file(table_path: &Path) {
    // Ensure the table exists at build time
    assert!(
        table_path.exists(),
        "\n\nCHROMOSOME TABLE BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the table file before building.\n",
        table_path.display()
    );

    let contents = std::fs::read_to_string(table_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCHROMOSOME TABLE BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            table_path.display()
        );
    });

    let table: serde_json::Value = serde_json::from_str(&contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCHROMOSOME TABLE BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            table_path.display()
        );
    });

    validate_table_structure(&table);
}

fn validate_table_structure(table: &serde_json::Value) {
    assert!(
        table.is_object(),
        "\n\nCHROMOSOME TABLE BUILD ERROR: Root must be a JSON object\n\
         Got: {table}\n"
    );

    assert!(
        table.get("version").and_then(|v| v.as_str()).is_some(),
        "\n\nCHROMOSOME TABLE BUILD ERROR: Missing 'version' string\n"
    );

    let accessions = table
        .get("accessions")
        .and_then(|a| a.as_array())
        .unwrap_or_else(|| {
            panic!(
                "\n\nCHROMOSOME TABLE BUILD ERROR: Missing 'accessions' array\n\
                 The table must have a top-level 'accessions' array.\n"
            );
        });

    assert!(
        accessions.len() == EXPECTED_ACCESSIONS,
        "\n\nCHROMOSOME TABLE BUILD ERROR: Expected {EXPECTED_ACCESSIONS} accessions, found {}\n",
        accessions.len()
    );

    let mut seen = HashSet::new();
    for (i, accession) in accessions.iter().enumerate() {
        let accession = accession.as_str().unwrap_or_else(|| {
            panic!("\n\nCHROMOSOME TABLE BUILD ERROR: Accession at index {i} is not a string\n");
        });
        assert!(
            !accession.trim().is_empty(),
            "\n\nCHROMOSOME TABLE BUILD ERROR: Accession at index {i} is empty\n"
        );
        assert!(
            seen.insert(accession.to_string()),
            "\n\nCHROMOSOME TABLE BUILD ERROR: Duplicate accession '{accession}' at index {i}\n"
        );
    }

    println!(
        "cargo:warning=Validated chromosome table: {} accessions",
        accessions.len()
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the table changes
    println!("cargo:rerun-if-changed=catalogs/chromosomes.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
