/// Built-in source list that round pools are sampled from.
pub const WORD_LIST: [&str; 110] = [
    "Apple", "Anchor", "Arrow", "Autumn", "Badge", "Balloon", "Bamboo", "Basket",
    "Beacon", "Blanket", "Bridge", "Bucket", "Butter", "Cabin", "Camera", "Candle",
    "Canyon", "Carpet", "Castle", "Cherry", "Circle", "Cliff", "Clock", "Cloud",
    "Comet", "Copper", "Cotton", "Crayon", "Crown", "Dagger", "Desert", "Diamond",
    "Dolphin", "Dragon", "Drum", "Eagle", "Engine", "Feather", "Fence", "Forest",
    "Fossil", "Fountain", "Garden", "Ginger", "Glacier", "Globe", "Hammer", "Harbor",
    "Helmet", "Honey", "Island", "Jacket", "Jungle", "Kettle", "Kitten", "Ladder",
    "Lantern", "Lemon", "Magnet", "Marble", "Meadow", "Mirror", "Monkey", "Needle",
    "Nickel", "Ocean", "Orchid", "Oyster", "Paddle", "Parrot", "Pebble", "Pencil",
    "Pepper", "Pillow", "Planet", "Pocket", "Puzzle", "Quartz", "Rabbit", "Rainbow",
    "River", "Rocket", "Saddle", "Salmon", "Shadow", "Shovel", "Silver", "Spider",
    "Sponge", "Statue", "Summer", "Sunset", "Temple", "Thunder", "Ticket", "Tiger",
    "Tower", "Trumpet", "Tunnel", "Umbrella", "Valley", "Velvet", "Violin", "Wagon",
    "Walnut", "Window", "Winter", "Wizard", "Yogurt", "Zipper",
];

/// Normalizes a raw word list: trims, lowercases, drops blanks and duplicates.
/// First occurrence wins so the original order is kept.
pub fn normalize<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Parses a plain-text word list: one word per line, `#` starts a comment line.
pub fn parse_word_list(text: &str) -> Vec<String> {
    normalize(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('#')),
    )
}

/// The built-in list, normalized.
pub fn default_words() -> Vec<String> {
    normalize(WORD_LIST)
}
