//! The sign item

use crate::item::ItemDefinition;

/// Item id of the placeable sign
pub const SIGN_ITEM_ID: &str = "sign";

/// Signs stack to 16
pub const SIGN_MAX_STACK: u32 = 16;

/// Definition of the sign item
pub fn sign_item() -> ItemDefinition {
    ItemDefinition::new(SIGN_ITEM_ID, "Sign").with_max_stack(SIGN_MAX_STACK)
}
