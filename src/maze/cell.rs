use crossterm::style::{Color, Stylize};

use std::fmt;

/// Represents a cell in the expanded grid, which is either a wall or a floor.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    #[default]
    Wall,
    Floor,
}

impl GridCell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    pub fn is_floor(self) -> bool {
        self == GridCell::Floor
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            GridCell::Floor => "  ".with(Color::Reset),
            GridCell::Wall => "⬜".with(Color::White),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                GridCell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_wall() {
        assert_eq!(GridCell::default(), GridCell::Wall);
        assert!(!GridCell::Wall.is_floor());
        assert!(GridCell::Floor.is_floor());
    }

    #[test]
    fn test_display_symbols() {
        assert!(GridCell::Wall.to_string().contains('⬜'));
        assert!(GridCell::Floor.to_string().contains("  "));
    }
}
