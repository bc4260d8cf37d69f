//! Sample armory shared by the binary and the integration tests.

use armory_inventory::{Inventory, Item};

use crate::error::ReportError;

/// Four-piece armory: one broken bow among three usable weapons.
pub fn armory() -> Result<Inventory, ReportError> {
    Ok(Inventory::from_items(vec![
        Item::new("Sword", 10)?,
        Item::new("Shield", 5)?,
        Item::broken("Bow", 8)?,
        Item::new("Axe", 12)?,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_armory_matches_the_worked_example() {
        let armory = armory().unwrap();
        assert_eq!(armory.len(), 4);
        assert_eq!(armory.total_power(), 35);
        assert_eq!(armory.first_broken_index(), Some(2));
    }
}
