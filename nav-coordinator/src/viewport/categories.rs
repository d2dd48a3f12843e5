use serde::{Deserialize, Serialize};

/// Sidebar category read model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub team_id: String,
    pub display_name: String,
    pub sort_order: i64,
}

/// A section of the direct-messages list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySection {
    Unreads,
    Category(Category),
}

/// Sections rendered by the direct-messages list.
///
/// Without unreads on top and without the unreads filter only the third
/// category by sort order is shown, and nothing when there are fewer than
/// three.
pub fn categories_to_show(categories: &[Category], only_unreads: bool, unreads_on_top: bool) -> Vec<CategorySection> {
    if only_unreads && !unreads_on_top {
        return vec![CategorySection::Unreads];
    }

    let mut ordered = categories.to_vec();
    ordered.sort_by_key(|c| c.sort_order);

    if unreads_on_top {
        return std::iter::once(CategorySection::Unreads)
            .chain(ordered.into_iter().map(CategorySection::Category))
            .collect();
    }

    ordered
        .into_iter()
        .nth(2)
        .map(CategorySection::Category)
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, sort_order: i64) -> Category {
        Category {
            id: id.to_string(),
            team_id: "team".to_string(),
            display_name: id.to_uppercase(),
            sort_order,
        }
    }

    fn sample() -> Vec<Category> {
        vec![
            category("dms", 30),
            category("favorites", 0),
            category("channels", 10),
            category("custom", 20),
        ]
    }

    fn ids(sections: &[CategorySection]) -> Vec<&str> {
        sections
            .iter()
            .map(|s| match s {
                CategorySection::Unreads => "UNREADS",
                CategorySection::Category(c) => c.id.as_str(),
            })
            .collect()
    }

    #[test]
    fn test_only_unreads() {
        assert_eq!(categories_to_show(&sample(), true, false), vec![CategorySection::Unreads]);
    }

    #[test]
    fn test_unreads_on_top_sorts_categories() {
        let sections = categories_to_show(&sample(), false, true);
        assert_eq!(ids(&sections), vec!["UNREADS", "favorites", "channels", "custom", "dms"]);

        // The filter does not win over unreads on top
        assert_eq!(categories_to_show(&sample(), true, true), sections);
    }

    #[test]
    fn test_default_shows_third_by_sort_order() {
        assert_eq!(ids(&categories_to_show(&sample(), false, false)), vec!["custom"]);
    }

    #[test]
    fn test_default_with_fewer_than_three_is_empty() {
        let two = vec![category("a", 1), category("b", 2)];
        assert!(categories_to_show(&two, false, false).is_empty());
        assert!(categories_to_show(&[], false, false).is_empty());
    }
}
