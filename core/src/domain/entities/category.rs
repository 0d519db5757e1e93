//! Category entity forming a self-referencing hierarchy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product category, optionally nested under a parent category
///
/// The parent links form a forest: the graph restricted to non-null parents
/// must stay acyclic with no self-loops. Mutations that change `parent_id`
/// go through the hierarchy validation in the category service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: Uuid,

    /// Unique display name
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Optional image URL
    pub image: Option<String>,

    /// Sort order within a listing
    pub display_order: i32,

    /// Whether the category is visible
    pub is_active: bool,

    /// Optional parent category
    pub parent_id: Option<Uuid>,

    /// Timestamp when the category was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the category was last updated
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Creates a new active category
    pub fn new(name: String, parent_id: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description: None,
            image: None,
            display_order: 0,
            is_active: true,
            parent_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this category sits at the top of the hierarchy
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Reassigns the parent link; hierarchy validation happens in the service
    pub fn set_parent(&mut self, parent_id: Option<Uuid>) {
        self.parent_id = parent_id;
        self.updated_at = Utc::now();
    }

    /// Deactivates the category
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

/// A category with its recursively loaded children, used for tree responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryNode {
    /// The category itself
    #[serde(flatten)]
    pub category: Category,

    /// Active children, ordered by display order then name
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// Wraps a category as a leaf node
    pub fn leaf(category: Category) -> Self {
        Self {
            category,
            children: Vec::new(),
        }
    }

    /// Total number of nodes in this subtree, including self
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(CategoryNode::len).sum::<usize>()
    }

    /// Whether the subtree consists of this node alone
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_is_active_root() {
        let category = Category::new("Electronics".to_string(), None);

        assert!(category.is_root());
        assert!(category.is_active);
        assert_eq!(category.display_order, 0);
    }

    #[test]
    fn test_set_parent() {
        let parent = Category::new("Electronics".to_string(), None);
        let mut child = Category::new("Laptops".to_string(), None);

        child.set_parent(Some(parent.id));

        assert!(!child.is_root());
        assert_eq!(child.parent_id, Some(parent.id));
    }

    #[test]
    fn test_tree_node_len() {
        let root = Category::new("Electronics".to_string(), None);
        let child = Category::new("Laptops".to_string(), Some(root.id));
        let grandchild = Category::new("Gaming Laptops".to_string(), Some(child.id));

        let tree = CategoryNode {
            category: root,
            children: vec![CategoryNode {
                category: child,
                children: vec![CategoryNode::leaf(grandchild)],
            }],
        };

        assert_eq!(tree.len(), 3);
        assert!(!tree.is_empty());
    }
}
