use super::*;
use crate::catalog::mock::MockCatalog;
use crate::error::ErrorKind;
use crate::sketch::Category;

const SCRIPT: &str = "https://p5code.jb1.io/p5skia/0.74/p5skia.js";

fn descriptor(category: &str, file: &str, download_url: Option<&str>) -> SketchDescriptor {
    let category = Category::from_entry(category, "https://api.test/c").unwrap();
    let mut descriptor = SketchDescriptor::new(&category, file, "https://api.test/c/s");
    descriptor.download_url = download_url.map(str::to_string);
    descriptor
}

#[tokio::test]
async fn test_fetch_normal_keeps_raw_text() {
    let catalog = MockCatalog::new();
    catalog.add_text("https://raw.test/simple.js", "function setup() {}\n// p5.js\n");
    let fetcher = ContentFetcher::new(Arc::new(catalog), SCRIPT);
    let mut sketch = descriptor(
        "03_Shaders_Basics",
        "01_Simple",
        Some("https://raw.test/simple.js"),
    );

    assert!(fetcher.fetch(&mut sketch).await.unwrap());
    assert_eq!(
        sketch.content.as_deref(),
        Some("function setup() {}\n// p5.js\n")
    );
}

#[tokio::test]
async fn test_fetch_instance_container_is_remapped() {
    let catalog = MockCatalog::new();
    catalog.add_text(
        "https://raw.test/container.js",
        "/* @name Instance Container */<html><script src=\"p5.js\"></script>",
    );
    let fetcher = ContentFetcher::new(Arc::new(catalog), SCRIPT);
    let mut sketch = descriptor(
        "11_Instance_Mode",
        "02_Instance_Container_2",
        Some("https://raw.test/container.js"),
    );

    fetcher.fetch(&mut sketch).await.unwrap();
    assert_eq!(
        sketch.content.unwrap(),
        format!("<html><script src=\"{SCRIPT}\"></script></html>\n")
    );
}

#[tokio::test]
async fn test_fetch_skips_unresolved_descriptor() {
    let catalog = Arc::new(MockCatalog::new());
    let fetcher = ContentFetcher::new(catalog.clone(), SCRIPT);
    let mut sketch = descriptor("03_Shaders_Basics", "01_Simple", None);

    assert!(!fetcher.fetch(&mut sketch).await.unwrap());
    assert!(sketch.content.is_none());
    assert!(catalog.requests().is_empty());
}

#[tokio::test]
async fn test_fetch_failure_is_fatal() {
    let fetcher = ContentFetcher::new(Arc::new(MockCatalog::new()), SCRIPT);
    let mut sketch = descriptor(
        "03_Shaders_Basics",
        "01_Simple",
        Some("https://raw.test/missing.js"),
    );

    let err = fetcher.fetch(&mut sketch).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransientNetwork);
    assert!(err.is_fatal());
}
