// Shared benchmark helpers
// Functions here are used across different benchmark files
#![allow(dead_code)]

/// Generate a markdown document with `sections` sections mixing prose,
/// lists, code fences, tables and links
pub fn generate_document(sections: usize) -> String {
    let mut doc = String::from("# Reference Manual\n\n");

    for i in 0..sections {
        doc.push_str(&format!("## Section {}\n\n", i));
        doc.push_str(&format!(
            "Paragraph {} explains **important** details with `inline_{}` code \
             and a [link](https://example.com/{}).\n\n",
            i, i, i
        ));
        doc.push_str("- first item\n- second item\n- third item\n\n");

        if i % 3 == 0 {
            doc.push_str("```rust\n");
            for line in 0..20 {
                doc.push_str(&format!("let value_{} = compute({});\n", line, line));
            }
            doc.push_str("```\n\n");
        }
        if i % 4 == 0 {
            doc.push_str("| Key | Value |\n|-----|-------|\n");
            for row in 0..10 {
                doc.push_str(&format!("| key_{} | {} |\n", row, row * i));
            }
            doc.push('\n');
        }
        if i % 5 == 0 {
            doc.push_str(":::note\nRemember to check the output.\n:::\n\n---\n\n");
        }
    }
    doc
}

/// Japanese document, for character counting on multi-byte text
pub fn generate_japanese_document(sections: usize) -> String {
    let mut doc = String::from("# リファレンスマニュアル\n\n");

    for i in 0..sections {
        doc.push_str(&format!("## セクション {}\n\n", i));
        doc.push_str("この段落では**重要な**詳細と[リンク](https://example.com)を説明します。\n\n");
        doc.push_str("- 最初の項目\n- 二番目の項目\n\n");
    }
    doc
}
