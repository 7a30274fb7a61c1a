pub mod paths {
    use std::path::PathBuf;

    use dirs::preference_dir;

    pub fn base_path() -> PathBuf {
        preference_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mazewalk")
    }

    pub fn settings_path() -> PathBuf {
        base_path().join("settings.ron")
    }
}

pub mod glyphs {
    pub const POST: char = '+';
    pub const HORIZONTAL_WALL: char = '-';
    pub const VERTICAL_WALL: char = '|';
    pub const PATH: char = '*';
    pub const UNDO: char = '.';
    pub const EMPTY: char = ' ';
}
