//! Eingebaute Beispiel-Rezepte für den Demo-Stapel.

use crate::core::RecipeRecord;

/// Beispiel-Datensätze im JSON-Format der Rezept-API.
pub const SAMPLE_RECIPES_JSON: &str = r#"[
  {
    "recipeTitle": "Tomaten-Curry mit Kichererbsen",
    "recipePublishday": "2018/02/04",
    "recipeCost": "ca. 300 Yen",
    "recipeIndication": "ca. 30 Min.",
    "foodImageUrl": "https://picsum.photos/id/292/600/400",
    "recipeDescription": "Würziges Curry aus Dosentomaten und Kichererbsen, dazu Reis."
  },
  {
    "recipeTitle": "Ofengemüse mit Feta",
    "recipePublishday": "2018/02/05",
    "recipeCost": "ca. 500 Yen",
    "recipeIndication": "ca. 40 Min.",
    "foodImageUrl": "https://picsum.photos/id/312/600/400",
    "recipeDescription": "Kürbis, Paprika und Zwiebeln im Ofen rösten und mit Feta bestreuen."
  },
  {
    "recipeTitle": "Miso-Suppe",
    "recipePublishday": "2018/02/06",
    "recipeCost": "unter 100 Yen",
    "recipeIndication": "ca. 10 Min.",
    "foodImageUrl": "https://picsum.photos/id/225/600/400",
    "recipeDescription": "Dashi erhitzen, Tofu und Wakame zugeben, Miso einrühren."
  },
  {
    "recipeTitle": "Pfannkuchen",
    "recipePublishday": "2018/02/07",
    "recipeCost": "ca. 300 Yen",
    "recipeIndication": "ca. 15 Min.",
    "foodImageUrl": "https://picsum.photos/id/488/600/400",
    "recipeDescription": "Mehl, Milch und Eier verrühren und portionsweise ausbacken."
  },
  {
    "recipeTitle": "Brot ohne Bild",
    "recipePublishday": "2018/02/08",
    "recipeCost": "unter 100 Yen",
    "recipeIndication": "ca. 3 Std.",
    "foodImageUrl": "",
    "recipeDescription": "Einfaches Weißbrot aus Mehl, Wasser, Salz und Hefe."
  }
]"#;

/// Parst die eingebauten Beispiel-Rezepte.
pub fn sample_records() -> anyhow::Result<Vec<RecipeRecord>> {
    RecipeRecord::parse_list(SAMPLE_RECIPES_JSON)
}
