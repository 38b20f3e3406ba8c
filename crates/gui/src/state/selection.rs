use shared::PointId;

/// Viewport selection state: at most one of the two points
#[derive(Default)]
pub struct SelectionState {
    selected: Option<PointId>,
}

impl SelectionState {
    /// Currently selected point
    pub fn selected(&self) -> Option<PointId> {
        self.selected
    }

    pub fn select(&mut self, id: PointId) {
        self.selected = Some(id);
    }

    /// Check if a point is selected
    pub fn is_selected(&self, id: PointId) -> bool {
        self.selected == Some(id)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}
