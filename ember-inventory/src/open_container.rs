use ember_util::math::position::BlockPos;

use crate::InventoryError;

/// A block container (chest, barrel, ...) together with everyone looking into it.
pub struct OpenContainer {
    viewers: Vec<i32>,
    location: BlockPos,
    size: usize,
    name: &'static str,
}

impl OpenContainer {
    pub fn new(location: BlockPos, size: usize, name: &'static str) -> Self {
        Self {
            viewers: Vec::new(),
            location,
            size,
            name,
        }
    }

    /// Registers a viewer. Returns `false` if it was already registered.
    pub fn add_viewer(&mut self, viewer_id: i32) -> bool {
        if self.viewers.contains(&viewer_id) {
            log::debug!("viewer {viewer_id} already has container at {} open", self.location);
            return false;
        }
        self.viewers.push(viewer_id);
        true
    }

    pub fn remove_viewer(&mut self, viewer_id: i32) -> Result<(), InventoryError> {
        let index = self
            .viewers
            .iter()
            .position(|id| *id == viewer_id)
            .ok_or(InventoryError::ClosedContainerInteract(viewer_id))?;
        self.viewers.remove(index);
        Ok(())
    }

    pub fn has_viewer(&self, viewer_id: i32) -> bool {
        self.viewers.contains(&viewer_id)
    }

    pub fn viewer_count(&self) -> usize {
        self.viewers.len()
    }

    pub fn location(&self) -> BlockPos {
        self.location
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chest() -> OpenContainer {
        OpenContainer::new(BlockPos::new(1, 2, 3), 27, "Chest")
    }

    #[test]
    fn viewers_are_unique_and_ordered() {
        let mut container = chest();
        assert!(container.add_viewer(7));
        assert!(container.add_viewer(3));
        assert!(!container.add_viewer(7));
        assert_eq!(container.viewer_count(), 2);
        assert!(container.has_viewer(3));
    }

    #[test]
    fn removing_an_unknown_viewer_fails() {
        let mut container = chest();
        container.add_viewer(1);
        assert_eq!(
            container.remove_viewer(2),
            Err(InventoryError::ClosedContainerInteract(2))
        );
        assert_eq!(container.remove_viewer(1), Ok(()));
        assert!(!container.has_viewer(1));
        assert_eq!(container.viewer_count(), 0);
    }

    #[test]
    fn accessors() {
        let container = chest();
        assert_eq!(container.viewer_count(), 0);
        assert_eq!(container.location(), BlockPos::new(1, 2, 3));
        assert_eq!(container.size(), 27);
        assert_eq!(container.name(), "Chest");
    }
}
