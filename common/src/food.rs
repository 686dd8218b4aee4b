//! Shared food item model and the static sample records.

use serde::{Deserialize, Serialize};

/// One food record as shown in the list view. Nutrient values are given
/// for the reference amount in `amount`/`unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: String,
    pub name: String,
    pub energy: u32,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrate: f64,
    pub amount: u32,
    pub unit: String,
}

/// Static placeholder records for the food list. Not backed by any store;
/// the list page renders exactly these rows.
pub fn sample_foods() -> Vec<Food> {
    vec![
        Food {
            id: "1".to_string(),
            name: "Apple".to_string(),
            energy: 52,
            protein: 0.26,
            fat: 0.17,
            carbohydrate: 14.0,
            amount: 100,
            unit: "g".to_string(),
        },
        Food {
            id: "2".to_string(),
            name: "Banana".to_string(),
            energy: 89,
            protein: 1.09,
            fat: 0.33,
            carbohydrate: 23.0,
            amount: 100,
            unit: "g".to_string(),
        },
        Food {
            id: "3".to_string(),
            name: "Mandarin".to_string(),
            energy: 47,
            protein: 0.8,
            fat: 0.2,
            carbohydrate: 9.8,
            amount: 100,
            unit: "g".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_food_ids_are_unique_and_nonempty() {
        let foods = sample_foods();
        assert!(!foods.is_empty());
        let mut ids: Vec<&str> = foods.iter().map(|f| f.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), foods.len());
        for food in &foods {
            assert!(!food.id.is_empty());
            assert!(!food.name.is_empty());
        }
    }
}
