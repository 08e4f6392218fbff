use crate::models::{Impact, Recipe, RecipeId};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The recipes shipped with EcoPlate.
pub fn builtin_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: RecipeId(1),
            name: "Seasonal Vegetable Stir Fry".to_string(),
            impact: Impact::new(0.5, 300.0, 0.2),
            ingredients: strings(&[
                "Bell peppers",
                "Broccoli",
                "Carrots",
                "Brown rice",
                "Tofu",
                "Ginger",
                "Garlic",
                "Soy sauce",
            ]),
            instructions: "1. Prepare rice according to package directions.\n\
                           2. Cube tofu and press to remove excess water.\n\
                           3. Sauté tofu until golden.\n\
                           4. Add chopped vegetables and stir fry for 5 minutes.\n\
                           5. Add minced garlic and ginger, cook for 1 minute.\n\
                           6. Add soy sauce and serve over rice."
                .to_string(),
            season: "Spring".to_string(),
        },
        Recipe {
            id: RecipeId(2),
            name: "Lentil and Root Vegetable Soup".to_string(),
            impact: Impact::new(0.3, 200.0, 0.1),
            ingredients: strings(&[
                "Red lentils",
                "Onion",
                "Carrots",
                "Celery",
                "Sweet potato",
                "Vegetable broth",
                "Thyme",
                "Bay leaf",
            ]),
            instructions: "1. Sauté diced onion, carrot, and celery.\n\
                           2. Add sweet potato cubes and cook for 2 minutes.\n\
                           3. Add rinsed lentils, broth, and herbs.\n\
                           4. Simmer for 25 minutes until lentils and vegetables are tender.\n\
                           5. Season to taste and serve."
                .to_string(),
            season: "Fall/Winter".to_string(),
        },
        Recipe {
            id: RecipeId(3),
            name: "Mediterranean Chickpea Salad".to_string(),
            impact: Impact::new(0.4, 250.0, 0.2),
            ingredients: strings(&[
                "Chickpeas",
                "Cucumber",
                "Cherry tomatoes",
                "Red onion",
                "Feta cheese",
                "Olives",
                "Lemon juice",
                "Olive oil",
            ]),
            instructions: "1. Rinse and drain chickpeas.\n\
                           2. Dice cucumber, halve tomatoes, and finely dice red onion.\n\
                           3. Combine in a bowl with crumbled feta and olives.\n\
                           4. Dress with lemon juice, olive oil, salt, and pepper.\n\
                           5. Toss well and serve."
                .to_string(),
            season: "Summer".to_string(),
        },
    ]
}
