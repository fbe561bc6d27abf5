//! Request lists: the built-in cooking shopping list and item-list files.

use anyhow::{Context, Result};
use std::path::Path;

/// Default request list: meals at every enchantment level followed by their
/// ingredients.
pub const DEFAULT_ITEMS: &[&str] = &[
    "Avalonian Pork Omelette",
    "Avalonian Pork Omelette@1",
    "Avalonian Pork Omelette@2",
    "Avalonian Pork Omelette@3",
    "Dusthole Crab Omelette",
    "Dusthole Crab Omelette@1",
    "Dusthole Crab Omelette@2",
    "Dusthole Crab Omelette@3",
    "Pork Omelette",
    "Pork Omelette@1",
    "Pork Omelette@2",
    "Pork Omelette@3",
    "Frostpeak Deadeye Pie",
    "Frostpeak Deadeye Pie@1",
    "Frostpeak Deadeye Pie@2",
    "Frostpeak Deadeye Pie@3",
    "Pork Pie",
    "Pork Pie@1",
    "Pork Pie@2",
    "Pork Pie@3",
    "Deepwater Kraken Salad",
    "Deepwater Kraken Salad@1",
    "Deepwater Kraken Salad@2",
    "Deepwater Kraken Salad@3",
    "Potato Salad",
    "Potato Salad@1",
    "Potato Salad@2",
    "Potato Salad@3",
    "Avalonian Mutton Sandwich",
    "Avalonian Mutton Sandwich@1",
    "Avalonian Mutton Sandwich@2",
    "Avalonian Mutton Sandwich@3",
    "Beef Sandwich",
    "Beef Sandwich@1",
    "Beef Sandwich@2",
    "Beef Sandwich@3",
    "Thunderfall Lurcher Sandwich",
    "Thunderfall Lurcher Sandwich@1",
    "Thunderfall Lurcher Sandwich@2",
    "Thunderfall Lurcher Sandwich@3",
    "Blackbog Clam Soup",
    "Blackbog Clam Soup@1",
    "Blackbog Clam Soup@2",
    "Blackbog Clam Soup@3",
    "Avalonian Beef Stew",
    "Avalonian Beef Stew@1",
    "Avalonian Beef Stew@2",
    "Avalonian Beef Stew@3",
    "Beef Stew",
    "Beef Stew@1",
    "Beef Stew@2",
    "Beef Stew@3",
    "Deadwater Eel Stew",
    "Deadwater Eel Stew@1",
    "Deadwater Eel Stew@2",
    "Deadwater Eel Stew@3",
    "Roast Pork",
    "Roast Pork@1",
    "Roast Pork@2",
    "Roast Pork@3",
    "Roasted Puremist Snapper",
    "Roasted Puremist Snapper@1",
    "Roasted Puremist Snapper@2",
    "Roasted Puremist Snapper@3",
    "Cow's Milk",
    "Raw Pork",
    "Goose Eggs",
    "Avalonian Energy",
    "Dusthole Crab",
    "Bundle of Corn",
    "Firetouched Mullein",
    "Frostpeak Deadeye",
    "Flour",
    "Sheep's Milk",
    "Basic Fish Sauce",
    "Fancy Fish Sauce",
    "Special Fish Sauce",
    "Deepwater Kraken",
    "Potatoes",
    "Raw Mutton",
    "Cabbage",
    "Raw Beef",
    "Cow's Butter",
    "Pumpkin",
    "Ghoul Yarrow",
    "Raw Goose",
    "Dragon Teasel",
    "Bread",
    "Puremist Snapper",
    "Deadwater Eel",
    "Blackbog Clam",
    "Thunderfall Lurcher",
    "Elusive Foxglove",
];

/// Owned copy of [`DEFAULT_ITEMS`].
pub fn default_items() -> Vec<String> {
    DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect()
}

/// Parses an item list: one display name per line, trimmed. Blank lines and
/// lines starting with `#` are ignored. Order is kept and duplicates are not
/// removed.
pub fn parse_item_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Reads an item list file (see [`parse_item_list`]).
pub fn load_item_list(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read item list: {}", path.display()))?;
    let items = parse_item_list(&text);
    tracing::debug!(path = %path.display(), count = items.len(), "item list loaded");
    Ok(items)
}
