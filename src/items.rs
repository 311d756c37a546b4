#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Weapon,
    Armor,
    Potion,
    Material,
}

impl ItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Weapon => "Weapon",
            ItemKind::Armor => "Armor",
            ItemKind::Potion => "Potion",
            ItemKind::Material => "Material",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

#[derive(Debug, Clone)]
pub struct InventoryItem {
    pub id: u32,
    pub name: &'static str,
    pub kind: ItemKind,
    pub icon: &'static str,
    pub equipped: bool,
    pub rarity: Rarity,
}

/// The fixed session inventory. Display only; nothing mutates it.
pub fn starting_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: 1,
            name: "Hero's Sword",
            kind: ItemKind::Weapon,
            icon: "🗡",
            equipped: true,
            rarity: Rarity::Epic,
        },
        InventoryItem {
            id: 2,
            name: "Iron Armor",
            kind: ItemKind::Armor,
            icon: "🛡",
            equipped: true,
            rarity: Rarity::Rare,
        },
        InventoryItem {
            id: 3,
            name: "Health Potion",
            kind: ItemKind::Potion,
            icon: "❤",
            equipped: false,
            rarity: Rarity::Common,
        },
        InventoryItem {
            id: 4,
            name: "Mana Potion",
            kind: ItemKind::Potion,
            icon: "✨",
            equipped: false,
            rarity: Rarity::Common,
        },
        InventoryItem {
            id: 5,
            name: "Magic Crystal",
            kind: ItemKind::Material,
            icon: "💎",
            equipped: false,
            rarity: Rarity::Legendary,
        },
        InventoryItem {
            id: 6,
            name: "Wood",
            kind: ItemKind::Material,
            icon: "🌲",
            equipped: false,
            rarity: Rarity::Common,
        },
    ]
}
