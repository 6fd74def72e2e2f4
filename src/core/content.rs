//! Inhalt einer Karte: Rezept-Datensatz und daraus gebundene Anzeigefelder.

use serde::{Deserialize, Serialize};

/// Rezept-Datensatz, wie ihn die Rezept-API als JSON liefert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    /// Titel des Rezepts
    pub recipe_title: String,
    /// Veröffentlichungsdatum (freier Text)
    pub recipe_publishday: String,
    /// Kostenangabe (freier Text)
    pub recipe_cost: String,
    /// Zubereitungszeit / Hinweis
    pub recipe_indication: String,
    /// URL des Rezeptbilds
    pub food_image_url: String,
    /// Beschreibung
    pub recipe_description: String,
}

impl RecipeRecord {
    /// Parst eine JSON-Liste von Datensätzen.
    pub fn parse_list(json: &str) -> anyhow::Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Bildreferenz einer Karte. Laden und Cachen übernimmt ein externer Loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    uri: String,
}

impl CardImage {
    /// Akzeptiert nur URIs mit Schema (`https://…`, `file://…`, `bytes://…`)
    /// und ohne Leerzeichen. Alles andere ergibt „kein Bild“.
    pub fn from_uri(uri: &str) -> Option<Self> {
        let uri = uri.trim();
        let (scheme, rest) = uri.split_once("://")?;
        let scheme_ok = !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !scheme_ok || rest.is_empty() || uri.chars().any(char::is_whitespace) {
            return None;
        }
        Some(Self {
            uri: uri.to_owned(),
        })
    }

    /// Die URI für den Bild-Loader.
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// Anzeigefelder einer Karte.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardContent {
    /// Titelzeile
    pub title: String,
    /// Datum und Kosten, z.B. `"2018/02/04 : 300円前後"`
    pub date_line: String,
    /// Bemerkung (Zubereitungszeit)
    pub remark: String,
    /// Bild, `None` wenn die URL unbrauchbar ist
    pub image: Option<CardImage>,
    /// Beschreibungstext
    pub description: String,
}

impl CardContent {
    /// Bindet einen Datensatz an die Anzeigefelder.
    pub fn from_record(record: &RecipeRecord) -> Self {
        Self {
            title: record.recipe_title.clone(),
            date_line: format!("{} : {}", record.recipe_publishday, record.recipe_cost),
            remark: record.recipe_indication.clone(),
            image: CardImage::from_uri(&record.food_image_url),
            description: record.recipe_description.clone(),
        }
    }
}
