use super::*;
use proptest::prelude::*;

/// 単語（英字始まり、数字を含まない）
fn word_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z]{0,9}".prop_map(|s| s)
}

proptest! {
    /// カテゴリ名は空でなく、先頭の序数を除いた残りを空白で連結したもの
    #[test]
    fn prop_category_name_is_space_joined_tail(
        ordinal in 0u32..100,
        words in prop::collection::vec(word_strategy(), 1..4)
    ) {
        let source = format!("{:02}_{}", ordinal, words.join("_"));
        let category = Category::from_entry(&source, "https://api.test/c").unwrap();

        prop_assert!(!category.name.is_empty());
        prop_assert_eq!(category.name, words.join(" "));
    }

    /// プロジェクト名にファイル名の数値序数は残らない
    #[test]
    fn prop_project_name_has_no_ordinal_prefix(
        ordinal in 0u32..100,
        words in prop::collection::vec(word_strategy(), 1..4)
    ) {
        let file_name = format!("{:02}_{}.js", ordinal, words.join("_"));
        let name = project_name("Category", &file_name);
        let expected = format!("Category: {}", words.join(" "));

        let prefix = format!("{:02}_", ordinal);
        prop_assert_eq!(&name, &expected);
        prop_assert!(!name.contains(&prefix));
        prop_assert!(!name.ends_with(".js"));
    }
}
