/// The fixed set of view tabs. Purely presentational state; switching tabs
/// has no side effects beyond re-rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Battle,
    Inventory,
    Guilds,
    Dungeons,
    Trade,
}

impl Tab {
    pub fn all() -> [Tab; 5] {
        [
            Tab::Battle,
            Tab::Inventory,
            Tab::Guilds,
            Tab::Dungeons,
            Tab::Trade,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Battle => "Battle",
            Tab::Inventory => "Inventory",
            Tab::Guilds => "Guilds",
            Tab::Dungeons => "Dungeons",
            Tab::Trade => "Trade",
        }
    }

    /// Digit key that selects this tab directly.
    pub fn key_hint(&self) -> char {
        match self {
            Tab::Battle => '1',
            Tab::Inventory => '2',
            Tab::Guilds => '3',
            Tab::Dungeons => '4',
            Tab::Trade => '5',
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Battle => 0,
            Tab::Inventory => 1,
            Tab::Guilds => 2,
            Tab::Dungeons => 3,
            Tab::Trade => 4,
        }
    }

    pub fn next(&self) -> Tab {
        let all = Tab::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(&self) -> Tab {
        let all = Tab::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }

    pub fn from_digit(ch: char) -> Option<Tab> {
        Tab::all().into_iter().find(|tab| tab.key_hint() == ch)
    }
}
