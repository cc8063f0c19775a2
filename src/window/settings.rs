//! Window settings

/// Settings for creating a window.
#[derive(Debug, Clone)]
pub struct WindowSettings {
    /// Window title.
    pub title: String,
    /// Initial window size (width, height) in logical pixels.
    pub size: (u32, u32),
    /// Whether the window is resizable.
    pub resizable: bool,
    /// Whether to enable vsync.
    pub vsync: bool,
    /// Whether to start maximized.
    pub maximized: bool,
    /// Whether to start in fullscreen.
    pub fullscreen: bool,
    /// Frames per second the loop is paced to. Default: 60.
    pub frame_rate: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Pencil Physics".to_string(),
            size: (1280, 720),
            resizable: true,
            vsync: true,
            maximized: false,
            fullscreen: false,
            frame_rate: 60.0,
        }
    }
}

impl WindowSettings {
    /// Create new window settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Set whether the window is resizable.
    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Set whether to enable vsync.
    pub fn vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Set whether to start maximized.
    pub fn maximized(mut self, maximized: bool) -> Self {
        self.maximized = maximized;
        self
    }

    /// Set whether to start in fullscreen.
    pub fn fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// Set the target frame rate.
    pub fn frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = WindowSettings::default();
        assert_eq!(settings.title, "Pencil Physics");
        assert_eq!(settings.size, (1280, 720));
        assert_eq!(settings.frame_rate, 60.0);
        assert!(settings.vsync);
    }

    #[test]
    fn test_builder() {
        let settings = WindowSettings::new()
            .title("test")
            .size(640, 360)
            .frame_rate(30.0)
            .resizable(false);
        assert_eq!(settings.title, "test");
        assert_eq!(settings.size, (640, 360));
        assert_eq!(settings.frame_rate, 30.0);
        assert!(!settings.resizable);
    }
}
