use macroquad::prelude::Color;

/// Points per palette step.
pub const THEME_STEP: u32 = 50;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid_line: Color,
    pub body: Color,
    pub head: Color,
    pub food: Color,
    pub eye: Color,
}

const fn hex(rgb: u32) -> Color {
    Color::new(
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
        1.0,
    )
}

pub const THEMES: [Theme; 5] = [
    Theme {
        name: "Deep ocean",
        background: hex(0x0f172a),
        grid_line: hex(0x1e293b),
        body: hex(0x4ade80),
        head: hex(0xbbf7d0),
        food: hex(0xf87171),
        eye: hex(0x0f172a),
    },
    Theme {
        name: "Purple night",
        background: hex(0x1a0a2e),
        grid_line: hex(0x2d1b4e),
        body: hex(0xa78bfa),
        head: hex(0xddd6fe),
        food: hex(0xfb923c),
        eye: hex(0x1a0a2e),
    },
    Theme {
        name: "Teal abyss",
        background: hex(0x042f2e),
        grid_line: hex(0x134e4a),
        body: hex(0x2dd4bf),
        head: hex(0xccfbf1),
        food: hex(0xf472b6),
        eye: hex(0x042f2e),
    },
    Theme {
        name: "Crimson fire",
        background: hex(0x1c0a0a),
        grid_line: hex(0x3b1515),
        body: hex(0xfb923c),
        head: hex(0xfed7aa),
        food: hex(0xa78bfa),
        eye: hex(0x1c0a0a),
    },
    Theme {
        name: "Golden realm",
        background: hex(0x1a1500),
        grid_line: hex(0x3d3200),
        body: hex(0xfacc15),
        head: hex(0xfef9c3),
        food: hex(0x22d3ee),
        eye: hex(0x1a1500),
    },
];

pub fn theme_level(score: u32) -> usize {
    ((score / THEME_STEP) as usize).min(THEMES.len() - 1)
}

pub fn theme_for_score(score: u32) -> &'static Theme {
    &THEMES[theme_level(score)]
}
