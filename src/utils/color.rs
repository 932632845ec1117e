use serde::{Deserialize, Serialize};

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Color {
    White=0, Black=1
}

const ALL: [Color; 2] = [Color::White, Color::Black];

impl Color {
    pub const fn from(is_black: bool) -> Color {
        if is_black { Color::Black } else { Color::White }
    }

    pub const fn flip(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White
        }
    }

    pub fn iter() -> impl Iterator<Item = Color> {
        ALL.iter().copied()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color() {
        assert_eq!(Color::White as u8, 0);
        assert_eq!(Color::Black as u8, 1);
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(Color::Black.flip(), Color::White);
        assert_eq!(Color::from(false), Color::White);
        assert_eq!(Color::from(true), Color::Black);
        assert_eq!(Color::iter().collect::<Vec<_>>(), vec![Color::White, Color::Black]);
    }
}
