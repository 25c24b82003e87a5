//! Upload/chat presentation switch. Only decides which view is rendered.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    Upload,
    #[default]
    Chat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewModeController {
    mode: ViewMode,
}

impl ViewModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_upload(&mut self) {
        self.mode = ViewMode::Upload;
    }

    pub fn show_chat(&mut self) {
        self.mode = ViewMode::Chat;
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_upload(&self) -> bool {
        self.mode == ViewMode::Upload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_chat() {
        assert_eq!(ViewModeController::new().mode(), ViewMode::Chat);
    }

    #[test]
    fn test_toggles() {
        let mut controller = ViewModeController::new();
        controller.show_upload();
        assert!(controller.is_upload());
        controller.show_upload();
        assert!(controller.is_upload());
        controller.show_chat();
        assert_eq!(controller.mode(), ViewMode::Chat);
    }
}
