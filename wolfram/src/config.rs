// config.rs - Fixed display geometry, defaults and colour schemes

pub const SCREEN_SIZE: usize   = 240;  // Square grid area in logical pixels
pub const HEADER_HEIGHT: usize = 22;   // Title bar above the grid
pub const DEFAULT_RULE: u8     = 110;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub name: &'static str,
    pub bg: [u8; 3],
    pub fg: [u8; 3],
}

pub const COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme {
        name: "Red",
        bg: [255, 230, 230],
        fg: [180, 70, 70],
    },
    ColorScheme {
        name: "Green",
        bg: [240, 255, 240],
        fg: [45, 140, 85],
    },
    ColorScheme {
        name: "Blue",
        bg: [230, 240, 255],
        fg: [70, 115, 180],
    },
];
