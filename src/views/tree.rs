//! Menu item trees. Roots are the items without a parent; nesting comes only
//! from each item's pre-attached `children`, never from the flat list.

use novacore_api_types::cms::CmsMenuItem;
use novacore_api_types::dashboard::DashboardMenuItem;

pub trait TreeItem: Sized {
    fn id(&self) -> i64;
    fn label(&self) -> &str;
    fn url(&self) -> &str;
    fn parent_id(&self) -> Option<i64>;
    fn children(&self) -> &[Self];

    fn is_visible(&self) -> bool {
        true
    }
}

impl TreeItem for DashboardMenuItem {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn parent_id(&self) -> Option<i64> {
        self.parent_id
    }

    fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or_default()
    }

    fn is_visible(&self) -> bool {
        self.is_visible
    }
}

impl TreeItem for CmsMenuItem {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn parent_id(&self) -> Option<i64> {
        self.parent_id
    }

    fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or_default()
    }
}

#[derive(Debug)]
pub struct TreeRow<'a, T> {
    pub depth: usize,
    pub item: &'a T,
}

/// Depth-first rows: each root in list order, followed by its descendants.
pub fn flatten<T: TreeItem>(items: &[T]) -> Vec<TreeRow<'_, T>> {
    fn push<'a, T: TreeItem>(item: &'a T, depth: usize, rows: &mut Vec<TreeRow<'a, T>>) {
        rows.push(TreeRow { depth, item });
        for child in item.children() {
            push(child, depth + 1, rows);
        }
    }

    let mut rows = Vec::new();
    for root in items.iter().filter(|item| item.parent_id().is_none()) {
        push(root, 0, &mut rows);
    }
    rows
}

/// Ids of every item in display order, descendants included.
pub fn ids_in_order<T: TreeItem>(items: &[T]) -> Vec<i64> {
    flatten(items).iter().map(|row| row.item.id()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, parent_id: Option<i64>, children: Vec<CmsMenuItem>) -> CmsMenuItem {
        CmsMenuItem {
            id,
            label: format!("item-{id}"),
            url: format!("/{id}"),
            order: 0,
            parent_id,
            children: (!children.is_empty()).then_some(children),
        }
    }

    #[test]
    fn nests_only_through_attached_children() {
        // Item 3 claims parent 1 but is listed flat; it must not be rendered,
        // since only roots and their attached children are walked.
        let items = vec![
            item(1, None, vec![item(2, Some(1), vec![item(4, Some(2), vec![])])]),
            item(3, Some(1), vec![]),
            item(5, None, vec![]),
        ];

        let rows: Vec<(i64, usize)> = flatten(&items)
            .iter()
            .map(|row| (row.item.id(), row.depth))
            .collect();
        assert_eq!(rows, vec![(1, 0), (2, 1), (4, 2), (5, 0)]);
    }

    #[test]
    fn empty_list_has_no_rows() {
        let items: Vec<DashboardMenuItem> = Vec::new();
        assert!(flatten(&items).is_empty());
        assert!(ids_in_order(&items).is_empty());
    }
}
