/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const GRAY: Rgb = Rgb(128, 128, 128);

    /// Mean of the three channels.
    pub fn brightness(self) -> f32 {
        (f32::from(self.0) + f32::from(self.1) + f32::from(self.2)) / 3.0
    }

    /// Paint `over` on top of `self` with opacity `alpha` in `[0, 1]`.
    pub fn blend(self, over: Rgb, alpha: f32) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |below: u8, above: u8| {
            (f32::from(above) * alpha + f32::from(below) * (1.0 - alpha)).round() as u8
        };
        Rgb(mix(self.0, over.0), mix(self.1, over.1), mix(self.2, over.2))
    }
}

const PALETTE: [(u32, Rgb); 11] = [
    (2, Rgb(0xF7, 0xF5, 0xE4)),
    (4, Rgb(0xDF, 0xDC, 0xC5)),
    (8, Rgb(0xBF, 0xBB, 0x8B)),
    (16, Rgb(0xAC, 0xAA, 0x6A)),
    (32, Rgb(0x9C, 0x9B, 0x36)),
    (64, Rgb(0x5C, 0x6C, 0x15)),
    (128, Rgb(0x2A, 0x40, 0x07)),
    (256, Rgb(0xDA, 0xC6, 0x83)),
    (512, Rgb(0x7E, 0x64, 0x1A)),
    (1024, Rgb(0x53, 0x3F, 0x08)),
    (2048, Rgb(0x09, 0x16, 0x04)),
];

/// Background for a tile value; `None` past 2048.
pub fn tile_color(value: u32) -> Option<Rgb> {
    PALETTE
        .iter()
        .find(|(tile, _)| *tile == value)
        .map(|(_, color)| *color)
}

/// Black on light tiles, white on dark ones.
pub fn label_color(background: Rgb) -> Rgb {
    if background.brightness() > 128.0 {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}
