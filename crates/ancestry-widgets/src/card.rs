//! Selectable race card.

use egui::{CursorIcon, RichText, Sense, Ui};

use crate::{layout::card_frame, sizing, theme};

/// A card showing a race's name and description.
///
/// Only the header (title and description) reacts to clicks. Anything added
/// through the footer closure, such as a dropdown, keeps its own input.
pub struct RaceCard<'a> {
    id_salt: &'a str,
    title: &'a str,
    description: &'a str,
    selected: bool,
    width: f32,
}

impl<'a> RaceCard<'a> {
    /// Create a new card. `id_salt` must be unique among cards.
    pub fn new(id_salt: &'a str, title: &'a str, description: &'a str) -> Self {
        Self {
            id_salt,
            title,
            description,
            selected: false,
            width: sizing::CARD_WIDTH,
        }
    }

    /// Set whether the card is selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the content width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Show the card and return true if the header was clicked.
    pub fn show(self, ui: &mut Ui, footer: impl FnOnce(&mut Ui)) -> bool {
        let mut clicked = false;

        card_frame(self.selected).show(ui, |ui| {
            ui.set_width(self.width);

            let header = ui
                .vertical(|ui| {
                    let title_color = if self.selected { theme::ACCENT } else { theme::TEXT };
                    ui.label(RichText::new(self.title).size(16.0).strong().color(title_color));
                    ui.add_space(4.0);
                    ui.label(RichText::new(self.description).size(12.0).color(theme::TEXT_MUTED));
                })
                .response;

            let response = ui.interact(
                header.rect,
                ui.id().with(("race_card", self.id_salt)),
                Sense::click(),
            );
            clicked = response.clicked();
            response.on_hover_cursor(CursorIcon::PointingHand);

            footer(ui);
        });

        clicked
    }
}
