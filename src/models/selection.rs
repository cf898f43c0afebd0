//! Single-value selection state held by a dashboard session

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// At most one device selected, one usage row expanded and one record
/// being re-verified at a time. Selecting another id replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub selected_equipment: Option<String>,
    pub expanded_row: Option<String>,
    pub verifying: Option<String>,
}

impl Selection {
    pub fn select_equipment(&mut self, id: impl Into<String>) {
        self.selected_equipment = Some(id.into());
    }

    pub fn clear_equipment(&mut self) {
        self.selected_equipment = None;
    }

    /// Expand `id`, or collapse it when it is already the expanded row
    pub fn toggle_row(&mut self, id: &str) {
        if self.expanded_row.as_deref() == Some(id) {
            self.expanded_row = None;
        } else {
            self.expanded_row = Some(id.to_string());
        }
    }

    pub fn begin_verify(&mut self, id: impl Into<String>) {
        self.verifying = Some(id.into());
    }

    /// Clear the verifying marker only if it still points at `id`
    pub fn finish_verify(&mut self, id: &str) {
        if self.verifying.as_deref() == Some(id) {
            self.verifying = None;
        }
    }

    /// Drop selections that point at ids no longer visible
    pub fn retain_visible<'a, I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        let keep = |slot: &mut Option<String>| {
            if let Some(id) = slot.as_deref() {
                if !visible.clone().into_iter().any(|v| v == id) {
                    *slot = None;
                }
            }
        };
        keep(&mut self.selected_equipment);
        keep(&mut self.expanded_row);
        keep(&mut self.verifying);
    }
}
