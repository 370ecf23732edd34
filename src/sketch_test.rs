use super::*;

// =========================================================================
// category_name
// =========================================================================

#[test]
fn test_category_name_drops_ordinal() {
    assert_eq!(category_name("03_Shaders_Basics"), "Shaders Basics");
}

#[test]
fn test_category_name_single_word() {
    assert_eq!(category_name("00_Structure"), "Structure");
}

#[test]
fn test_category_name_without_underscore_is_empty() {
    assert_eq!(category_name("assets"), "");
}

#[test]
fn test_category_from_entry_discards_empty() {
    assert!(Category::from_entry("assets", "https://api.test/assets").is_none());
    assert!(Category::from_entry("07_", "https://api.test/07").is_none());
}

#[test]
fn test_category_from_entry_keeps_url() {
    let category = Category::from_entry("11_Instance_Mode", "https://api.test/11").unwrap();
    assert_eq!(category.name, "Instance Mode");
    assert_eq!(category.url, "https://api.test/11");
}

// =========================================================================
// project_name
// =========================================================================

#[test]
fn test_project_name_strips_ordinal_and_extension() {
    assert_eq!(
        project_name("Shaders Basics", "01_Simple.js"),
        "Shaders Basics: Simple"
    );
}

#[test]
fn test_project_name_joins_words() {
    assert_eq!(
        project_name("Instance Mode", "02_Instance_Container"),
        "Instance Mode: Instance Container"
    );
}

#[test]
fn test_project_name_without_ordinal() {
    assert_eq!(project_name("Structure", "Coordinates.js"), "Structure: Coordinates");
}

#[test]
fn test_project_name_trailing_underscore_falls_back() {
    assert_eq!(project_name("Structure", "05_"), "Structure: 05_");
}

#[test]
fn test_descriptor_starts_unresolved() {
    let category = Category::from_entry("03_Shaders_Basics", "https://api.test/03").unwrap();
    let descriptor = SketchDescriptor::new(&category, "01_Simple", "https://api.test/03/01");
    assert_eq!(descriptor.category_name, "Shaders Basics");
    assert_eq!(descriptor.project_name, "Shaders Basics: Simple");
    assert!(descriptor.download_url.is_none());
    assert!(descriptor.content.is_none());
}
