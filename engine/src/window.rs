use sprite::Color;

pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub clear_color: Color,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 480,
            height: 640,
            title: "My first window".to_owned(),
            clear_color: Color::WHITE,
            vsync: true,
        }
    }
}
