//! UI components using egui.

use ancestry_core::view::RaceCard as CardModel;
use ancestry_core::{CharacterCreation, RaceId, LINEAGE_PLACEHOLDER};
use egui::{Align2, Context, Vec2};

use ancestry_widgets::{
    panel_frame, section_label, sizing, summary_panel, DropdownOption, LineageDropdown, RaceCard,
};

/// Actions that can be triggered by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// A race card header was clicked.
    SelectRace(RaceId),
    /// A lineage dropdown changed. `value` is empty for the placeholder.
    ChooseLineage { race: RaceId, value: String },
}

impl UiAction {
    /// Apply the action to the session.
    pub fn apply(self, creation: &mut CharacterCreation) {
        match self {
            UiAction::SelectRace(race) => creation.set_race(race),
            UiAction::ChooseLineage { race, value } => creation.choose_lineage(&race, &value),
        }
    }
}

/// Render the screen and return any triggered action.
///
/// Without a session (catalog failed to load) nothing is drawn.
pub fn render_ui(ctx: &Context, creation: Option<&CharacterCreation>) -> Option<UiAction> {
    let creation = creation?;

    let cards_action = render_race_cards(ctx, creation);
    render_summary(ctx, creation);

    cards_action
}

/// Render the race cards panel.
fn render_race_cards(ctx: &Context, creation: &CharacterCreation) -> Option<UiAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new("race_cards"))
        .anchor(Align2::LEFT_TOP, Vec2::new(24.0, 24.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                section_label(ui, "CHOOSE YOUR RACE");
                ui.add_space(8.0);

                // Leave room for the summary panel on the right
                #[allow(deprecated)]
                let screen_width = ctx.input(|i| i.content_rect()).width();
                ui.set_max_width((screen_width - sizing::SUMMARY_WIDTH - 96.0).max(sizing::CARD_WIDTH));

                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(12.0, 12.0);
                    for card in creation.view().cards() {
                        if let Some(card_action) = race_card(ui, card) {
                            action = Some(card_action);
                        }
                    }
                });
            });
        });

    action
}

/// Render one card with its lineage dropdown, if any.
fn race_card(ui: &mut egui::Ui, card: &CardModel) -> Option<UiAction> {
    let mut action = None;

    let clicked = RaceCard::new(card.race.as_str(), &card.title, &card.description)
        .selected(card.is_selected())
        .show(ui, |ui| {
            let Some(picker) = card.picker() else {
                return;
            };
            ui.add_space(8.0);

            let options: Vec<DropdownOption<'_>> = picker
                .options()
                .iter()
                .map(|o| DropdownOption {
                    value: o.id.as_str(),
                    label: &o.label,
                    hint: &o.hint,
                })
                .collect();

            let id_salt = format!("lineage-{}", card.race);
            let mut value = picker.pending().to_string();
            if LineageDropdown::new(&id_salt, LINEAGE_PLACEHOLDER, &options)
                .enabled(picker.is_enabled())
                .show(ui, &mut value)
            {
                action = Some(UiAction::ChooseLineage {
                    race: card.race.clone(),
                    value,
                });
            }
        });

    if clicked {
        action = Some(UiAction::SelectRace(card.race.clone()));
    }
    action
}

/// Render the selection summary in the top-right corner.
fn render_summary(ctx: &Context, creation: &CharacterCreation) {
    let summary = creation.summary();

    egui::Area::new(egui::Id::new("character_summary"))
        .anchor(Align2::RIGHT_TOP, Vec2::new(-24.0, 24.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.set_width(sizing::SUMMARY_WIDTH);
                summary_panel(ui, &summary.race, summary.lineage.as_deref());
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use ancestry_core::Catalog;

    const CATALOG: &str = r#"{
        "races": [
            { "id": "human", "name": "Human", "description": "Versatile." },
            {
                "id": "elf", "name": "Elf", "description": "Graceful.",
                "hasLineages": true,
                "lineages": [ { "id": "drow", "name": "Drow", "description": "Of the deep." } ]
            }
        ]
    }"#;

    fn creation() -> CharacterCreation {
        CharacterCreation::new(Catalog::from_json(CATALOG).unwrap())
    }

    #[test]
    fn test_apply_select_race() {
        let mut creation = creation();
        UiAction::SelectRace("elf".into()).apply(&mut creation);
        assert_eq!(creation.state().selected_race(), Some(&"elf".into()));
        assert_eq!(creation.summary().race, "Elf");
    }

    #[test]
    fn test_apply_choose_lineage() {
        let mut creation = creation();
        UiAction::SelectRace("elf".into()).apply(&mut creation);
        UiAction::ChooseLineage {
            race: "elf".into(),
            value: "drow".to_string(),
        }
        .apply(&mut creation);

        assert_eq!(creation.summary().lineage.as_deref(), Some("Drow"));
    }

    #[test]
    fn test_apply_placeholder_keeps_lineage() {
        let mut creation = creation();
        UiAction::SelectRace("elf".into()).apply(&mut creation);
        creation.choose_lineage(&"elf".into(), "drow");
        UiAction::ChooseLineage {
            race: "elf".into(),
            value: String::new(),
        }
        .apply(&mut creation);

        assert_eq!(creation.state().selected_lineage(), Some(&"drow".into()));
    }

    #[test]
    fn test_render_without_session_is_empty() {
        let ctx = Context::default();
        let mut action = Some(UiAction::SelectRace("x".into()));
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            action = render_ui(ctx, None);
        });
        assert!(action.is_none());
    }

    #[test]
    fn test_render_without_input_has_no_action() {
        let creation = creation();
        let ctx = Context::default();
        let mut action = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            action = render_ui(ctx, Some(&creation));
        });
        assert!(action.is_none());
    }
}
