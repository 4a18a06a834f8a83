use super::structs::ModuleBar;

impl ModuleBar {
    pub fn new(
        id: impl Into<String>,
        length: i64,
        specification: impl Into<String>,
        cross_section: f64,
    ) -> Self {
        Self { id: id.into(), length, specification: specification.into(), cross_section }
    }
}
