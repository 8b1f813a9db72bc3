use deckview::{CardId, DeckRender, DeckView, TileStyle, Tone, ViewOptions};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmDeck {
    view: DeckView,
}

#[wasm_bindgen]
impl WasmDeck {
    #[wasm_bindgen(constructor)]
    pub fn new(show_names: bool) -> Result<WasmDeck, JsValue> {
        let options = ViewOptions::default()
            .with_strict_ids(true)
            .with_show_names(show_names);
        let view = DeckView::standard(options).map_err(js_err)?;
        Ok(Self { view })
    }

    pub fn toggle_card(&self, id: u32) -> Result<bool, JsValue> {
        self.view.toggle_card(CardId(id)).map_err(js_err)
    }

    pub fn hide_used_cards(&self) {
        self.view.hide_used_cards();
    }

    pub fn reset_game(&self) {
        self.view.reset_game();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            sections: JsSection::from_render(&self.view.render()),
            clicked_cards: ids_to_js(self.view.clicked_cards()),
            cards_to_hide: ids_to_js(self.view.cards_to_hide()),
            hide_clicked_cards: self.view.is_hiding(),
            visible_count: self.view.visible_count() as u32,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    sections: Vec<JsSection>,
    clicked_cards: Vec<u32>,
    cards_to_hide: Vec<u32>,
    hide_clicked_cards: bool,
    visible_count: u32,
}

#[derive(Serialize)]
struct JsSection {
    suit: String,
    symbol: String,
    title: &'static str,
    tone: &'static str,
    tiles: Vec<JsTile>,
}

impl JsSection {
    fn from_render(render: &DeckRender) -> Vec<Self> {
        render
            .sections
            .iter()
            .map(|section| Self {
                suit: section.heading.suit.to_string(),
                symbol: section.heading.symbol.to_string(),
                title: section.heading.title,
                tone: tone_to_str(section.heading.tone),
                tiles: section
                    .tiles
                    .iter()
                    .map(|tile| JsTile {
                        id: tile.id.0,
                        rank: tile.rank,
                        symbol: tile.symbol.to_string(),
                        clicked: tile.style == TileStyle::Clicked,
                        tone: tone_to_str(tile.tone),
                        name: tile.name.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[derive(Serialize)]
struct JsTile {
    id: u32,
    rank: &'static str,
    symbol: String,
    clicked: bool,
    tone: &'static str,
    name: Option<String>,
}

fn tone_to_str(tone: Tone) -> &'static str {
    match tone {
        Tone::Red => "red",
        Tone::Neutral => "neutral",
        Tone::Muted => "muted",
    }
}

fn ids_to_js(ids: Vec<CardId>) -> Vec<u32> {
    ids.into_iter().map(|id| id.0).collect()
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
