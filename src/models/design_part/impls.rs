use super::structs::DesignPart;
use crate::models::group_key::GroupKey;

impl DesignPart {
    pub fn new(
        id: impl Into<String>,
        length: i64,
        quantity: i64,
        cross_section: f64,
        specification: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            length,
            quantity,
            cross_section,
            specification: specification.into(),
            display_id: None,
        }
    }

    pub fn with_display_id(mut self, display_id: impl Into<String>) -> Self {
        self.display_id = Some(display_id.into());
        self
    }

    pub fn group_key(&self) -> GroupKey {
        GroupKey::new(self.specification.clone(), self.cross_section)
    }

    /// The label shown to users; falls back to the stable id.
    pub fn label(&self) -> &str {
        self.display_id.as_deref().unwrap_or(&self.id)
    }
}
