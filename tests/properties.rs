//! Property tests over arbitrary click/hide/reset sequences.

use std::collections::BTreeSet;

use deckview::{CardId, DeckView, TileStyle, ViewOptions};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    Toggle(u32),
    Hide,
    Reset,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        8 => (1u32..=52).prop_map(Action::Toggle),
        1 => Just(Action::Hide),
        1 => Just(Action::Reset),
    ]
}

fn apply(view: &DeckView, actions: &[Action]) {
    for action in actions {
        match action {
            Action::Toggle(id) => {
                view.toggle_card(CardId(*id)).unwrap();
            }
            Action::Hide => view.hide_used_cards(),
            Action::Reset => view.reset_game(),
        }
    }
}

fn fresh_view() -> DeckView {
    DeckView::standard(ViewOptions::default()).unwrap()
}

proptest! {
    #[test]
    fn toggle_twice_restores_session(actions in prop::collection::vec(action(), 0..40), id in 1u32..=52) {
        let view = fresh_view();
        apply(&view, &actions);
        let before = view.session();

        view.toggle_card(CardId(id)).unwrap();
        view.toggle_card(CardId(id)).unwrap();
        prop_assert_eq!(view.session(), before);
    }

    #[test]
    fn clicks_after_hide_do_not_change_visibility(
        actions in prop::collection::vec(action(), 0..40),
        later in prop::collection::vec(1u32..=52, 0..20),
    ) {
        let view = fresh_view();
        apply(&view, &actions);
        view.hide_used_cards();
        let visible = view.render().visible_ids();

        for id in later {
            view.toggle_card(CardId(id)).unwrap();
        }
        prop_assert_eq!(view.render().visible_ids(), visible);
    }

    #[test]
    fn reset_clears_everything(actions in prop::collection::vec(action(), 0..60)) {
        let view = fresh_view();
        apply(&view, &actions);
        view.reset_game();

        prop_assert!(view.session().is_pristine());
        let render = view.render();
        prop_assert_eq!(render.tile_count(), 52);
        prop_assert!(render
            .sections
            .iter()
            .flat_map(|section| &section.tiles)
            .all(|tile| tile.style == TileStyle::Normal));
    }

    #[test]
    fn visible_set_is_catalog_minus_hidden(actions in prop::collection::vec(action(), 0..60)) {
        let view = fresh_view();
        apply(&view, &actions);

        let all: BTreeSet<CardId> = view.catalog.iter().map(|card| card.id).collect();
        let visible: BTreeSet<CardId> = view.render().visible_ids().into_iter().collect();
        let expected: BTreeSet<CardId> = if view.is_hiding() {
            let hidden: BTreeSet<CardId> = view.cards_to_hide().into_iter().collect();
            all.difference(&hidden).copied().collect()
        } else {
            all
        };
        prop_assert_eq!(view.visible_count(), expected.len());
        prop_assert_eq!(visible, expected);
    }

    #[test]
    fn tile_style_tracks_clicked_set(actions in prop::collection::vec(action(), 0..60)) {
        let view = fresh_view();
        apply(&view, &actions);

        for tile in view.render().sections.iter().flat_map(|section| &section.tiles) {
            let expected = if view.is_clicked(tile.id) { TileStyle::Clicked } else { TileStyle::Normal };
            prop_assert_eq!(tile.style, expected);
        }
    }

    #[test]
    fn render_is_deterministic(actions in prop::collection::vec(action(), 0..40)) {
        let view = fresh_view();
        apply(&view, &actions);
        prop_assert_eq!(view.render(), view.render());
    }
}
