use super::*;

fn document_with_root() -> (ProjectDocument, String) {
    let root = FileNode::folder("root");
    let root_id = root.id.clone();
    let document = ProjectDocument {
        id: new_id(),
        name: "Structure: Coordinates".to_string(),
        owner_user_id: "user-1".to_string(),
        files: vec![root],
    };
    (document, root_id)
}

#[test]
fn test_new_id_is_unique() {
    assert_ne!(new_id(), new_id());
}

#[test]
fn test_inline_node_has_content_only() {
    let node = FileNode::inline("shader.vert", "void main() {}");
    assert_eq!(node.file_type, FileType::File);
    assert_eq!(node.content.as_deref(), Some("void main() {}"));
    assert!(node.url.is_none());
    assert!(!node.is_selected_file);
}

#[test]
fn test_linked_node_has_url_only() {
    let node = FileNode::linked("moon.png", "https://assets.test/moon.png");
    assert_eq!(node.file_type, FileType::File);
    assert!(node.content.is_none());
    assert_eq!(node.url.as_deref(), Some("https://assets.test/moon.png"));
}

#[test]
fn test_attach_registers_child() {
    let (mut document, root_id) = document_with_root();
    let child_id = document
        .attach(&root_id, FileNode::inline("sketch.js", ""))
        .unwrap();

    assert_eq!(document.files.len(), 2);
    assert_eq!(document.find(&root_id).unwrap().children, vec![child_id.clone()]);
    assert_eq!(document.children_of(&root_id)[0].id, child_id);
}

#[test]
fn test_attach_unknown_parent_is_noop() {
    let (mut document, _) = document_with_root();
    assert!(document
        .attach("missing", FileNode::inline("sketch.js", ""))
        .is_none());
    assert_eq!(document.files.len(), 1);
}

#[test]
fn test_serialize_uses_camel_case() {
    let node = FileNode::inline("sketch.js", "draw()").selected();
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(json["fileType"], "file");
    assert_eq!(json["isSelectedFile"], true);
    assert!(json.get("url").is_none());
}
