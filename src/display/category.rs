//! Category display formatting

use crate::models::category::{self, CategoryInfo};

/// Format the category registry as a table, in registry order
pub fn format_category_list(categories: &[CategoryInfo]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.id.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<8}  {}\n",
        "Category",
        "Color",
        "Description",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<8}  {:-<11}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for info in categories {
        output.push_str(&format!(
            "{:<name_width$}  {:<8}  {}\n",
            info.id,
            info.color,
            info.description,
            name_width = name_width,
        ));
    }

    output
}

/// Format the distinct categories used in a ledger, marking unknown ones
pub fn format_used_categories(used: &[String]) -> String {
    if used.is_empty() {
        return "No categories used yet.\n".to_string();
    }

    let mut output = String::from("Used in ledger:\n");
    for id in used {
        let marker = if category::is_known(id) { "" } else { " (not in registry)" };
        output.push_str(&format!("  {}{}\n", id, marker));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_listing() {
        let output = format_category_list(category::entries());

        assert!(output.starts_with("Category"));
        assert!(output.contains("🍔 Food"));
        assert!(output.contains("#B5BAC7"));
        assert_eq!(output.lines().count(), category::entries().len() + 2);
    }

    #[test]
    fn test_empty_listing() {
        assert_eq!(format_category_list(&[]), "No categories found.");
    }

    #[test]
    fn test_used_categories_marks_unknown() {
        let output =
            format_used_categories(&["🍔 Food".to_string(), "🍕 Pizza".to_string()]);
        assert!(output.contains("  🍔 Food\n"));
        assert!(output.contains("🍕 Pizza (not in registry)"));
    }
}
