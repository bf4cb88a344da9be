//! Current selection readout.

use egui::{RichText, Ui};

use crate::layout::{section_label, separator};
use crate::theme;

/// Show the summary rows. The lineage row is omitted when `lineage` is `None`.
pub fn summary_panel(ui: &mut Ui, race: &str, lineage: Option<&str>) {
    section_label(ui, "YOUR CHARACTER");
    separator(ui);
    summary_row(ui, "Race", race);
    if let Some(lineage) = lineage {
        summary_row(ui, "Lineage", lineage);
    }
}

fn summary_row(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{}:", label)).size(13.0).color(theme::TEXT_MUTED));
        ui.label(RichText::new(value).size(13.0).strong().color(theme::TEXT));
    });
}
