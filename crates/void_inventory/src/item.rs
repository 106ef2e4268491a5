//! Item definitions and stacks

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Instance-data key holding block-entity data to apply when the item is placed
pub const BLOCK_ENTITY_TAG: &str = "block_entity_tag";

/// Item property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemProperty {
    /// String value
    String(String),
    /// Array of values
    Array(Vec<ItemProperty>),
}

impl ItemProperty {
    /// Get as string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Get as array
    pub fn as_array(&self) -> Option<&[ItemProperty]> {
        match self {
            Self::Array(v) => Some(v),
            _ => None,
        }
    }
}

/// Item definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Maximum stack size (1 = not stackable)
    pub max_stack: u32,
}

impl ItemDefinition {
    /// Create a new item definition
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_stack: 64,
        }
    }

    /// Set max stack size
    pub fn with_max_stack(mut self, max: u32) -> Self {
        self.max_stack = max.max(1);
        self
    }

    /// A stack of this item
    pub fn stack(&self, quantity: u32) -> ItemStack {
        ItemStack::new(self.id.clone(), quantity.min(self.max_stack))
    }
}

/// A stack of items held by a player
///
/// A quantity of zero means the stack has been used up; the holder is
/// expected to clear the slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Item ID (references ItemDefinition)
    pub item_id: String,
    /// Quantity
    pub quantity: u32,
    /// Instance-specific properties
    pub instance_data: HashMap<String, ItemProperty>,
}

impl ItemStack {
    /// Create a new item stack
    pub fn new(item_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity: quantity.max(1),
            instance_data: HashMap::new(),
        }
    }

    /// Create a single item
    pub fn single(item_id: impl Into<String>) -> Self {
        Self::new(item_id, 1)
    }

    /// Set instance data
    pub fn with_data(mut self, key: impl Into<String>, value: ItemProperty) -> Self {
        self.instance_data.insert(key.into(), value);
        self
    }

    /// Attach block-entity data to apply on placement
    pub fn with_block_entity_tag(self, tag: ItemProperty) -> Self {
        self.with_data(BLOCK_ENTITY_TAG, tag)
    }

    /// Block-entity data carried by this stack
    pub fn block_entity_tag(&self) -> Option<&ItemProperty> {
        self.instance_data.get(BLOCK_ENTITY_TAG)
    }

    /// Check if this stack is empty
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }

    /// Remove from this stack (returns amount actually removed)
    pub fn remove(&mut self, amount: u32) -> u32 {
        let to_remove = amount.min(self.quantity);
        self.quantity -= to_remove;
        to_remove
    }

    /// Use up one item
    pub fn consume_one(&mut self) -> bool {
        self.remove(1) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_caps_stack() {
        let item = ItemDefinition::new("sign", "Sign").with_max_stack(16);
        assert_eq!(item.stack(100).quantity, 16);
        assert_eq!(item.stack(0).quantity, 1);
        assert_eq!(ItemDefinition::new("sign", "Sign").with_max_stack(0).max_stack, 1);
    }

    #[test]
    fn test_remove_saturates() {
        let mut stack = ItemStack::new("sign", 5);
        assert_eq!(stack.remove(3), 3);
        assert_eq!(stack.remove(10), 2);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_consume_one_until_empty() {
        let mut stack = ItemStack::new("sign", 2);
        assert!(stack.consume_one());
        assert!(stack.consume_one());
        assert!(stack.is_empty());
        assert!(!stack.consume_one());
        assert_eq!(stack.quantity, 0);
    }

    #[test]
    fn test_block_entity_tag() {
        let stack = ItemStack::single("sign").with_block_entity_tag(ItemProperty::Array(vec![
            ItemProperty::String("line".into()),
        ]));

        let tag = stack.block_entity_tag().and_then(ItemProperty::as_array);
        assert_eq!(tag.map(|lines| lines.len()), Some(1));
        assert!(ItemStack::single("sign").block_entity_tag().is_none());
    }
}
