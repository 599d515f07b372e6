//! Workload generation and card interactions

use rand::Rng;

/// Categories a generated card can land in.
pub const CATEGORIES: [&str; 6] = [
    "Technology",
    "Design",
    "Business",
    "Science",
    "Art",
    "Sports",
];

/// One card in the benchmark grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    /// Stable identity within one workload
    pub id: u64,
    /// Display title, one-based
    pub title: String,
    /// Filler body text
    pub description: String,
    /// Highlight state toggled by interactions
    pub is_active: bool,
    /// Counter bumped on every single-card interaction
    pub value: u32,
    /// One of [`CATEGORIES`]
    pub category: &'static str,
}

/// Generate a randomized workload of `count` cards.
pub fn generate_items(count: u64) -> Vec<CardItem> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|i| CardItem {
            id: i,
            title: format!("Card Item {}", i + 1),
            description: format!(
                "Benchmark card with ID {} for render and interaction timing",
                i + 1
            ),
            is_active: rng.gen_bool(0.5),
            value: rng.gen_range(0..100),
            category: CATEGORIES[rng.gen_range(0..CATEGORIES.len())],
        })
        .collect()
}

/// Single-card interaction: flip the highlight and bump the counter.
///
/// Returns whether a card with the given id was found.
pub fn toggle_item(items: &mut [CardItem], id: u64) -> bool {
    match items.iter_mut().find(|c| c.id == id) {
        Some(card) => {
            card.is_active = !card.is_active;
            card.value = card.value.saturating_add(1);
            true
        }
        None => false,
    }
}

/// Bulk interaction: flip the highlight on every card.
pub fn toggle_all(items: &mut [CardItem]) {
    for card in items.iter_mut() {
        card.is_active = !card.is_active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_items_count_and_fields() {
        let items = generate_items(25);

        assert_eq!(items.len(), 25);
        assert_eq!(items[0].id, 0);
        assert_eq!(items[0].title, "Card Item 1");
        assert_eq!(items[24].title, "Card Item 25");
        assert!(items.iter().all(|c| c.value < 100));
        assert!(items.iter().all(|c| CATEGORIES.contains(&c.category)));
    }

    #[test]
    fn test_toggle_item_flips_and_bumps() {
        let mut items = generate_items(10);
        let was_active = items[3].is_active;
        let old_value = items[3].value;

        assert!(toggle_item(&mut items, 3));

        assert_eq!(items[3].is_active, !was_active);
        assert_eq!(items[3].value, old_value + 1);
    }

    #[test]
    fn test_toggle_item_missing_id() {
        let mut items = generate_items(10);
        let before = items.clone();

        assert!(!toggle_item(&mut items, 99));
        assert_eq!(items, before);
    }

    #[test]
    fn test_toggle_all_flips_every_card() {
        let mut items = generate_items(10);
        let before: Vec<bool> = items.iter().map(|c| c.is_active).collect();

        toggle_all(&mut items);

        for (card, was_active) in items.iter().zip(before) {
            assert_eq!(card.is_active, !was_active);
        }
    }
}
