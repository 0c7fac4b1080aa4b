use ratatui::layout::Rect;

/// Each column takes this fraction (1/n) of the terminal width
pub const WIDTH_DIVISOR: u16 = 4;
/// Rows left free below the columns
pub const HEIGHT_MARGIN: u16 = 4;

/// Column geometry for one frame. Built fresh on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub column_width: u16,
    pub column_height: u16,
}

impl BoardConfig {
    pub fn from_area(area: Rect) -> Self {
        Self {
            column_width: area.width / WIDTH_DIVISOR,
            column_height: area.height.saturating_sub(HEIGHT_MARGIN),
        }
    }

    /// Screen rect of the column at `index`, left to right from `area`'s origin.
    pub fn column_area(&self, area: Rect, index: usize) -> Rect {
        Rect::new(
            area.x + self.column_width * index as u16,
            area.y,
            self.column_width,
            self.column_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_width_and_margin() {
        let config = BoardConfig::from_area(Rect::new(0, 0, 100, 40));
        assert_eq!(config.column_width, 25);
        assert_eq!(config.column_height, 36);
    }

    #[test]
    fn tiny_terminal_saturates() {
        let config = BoardConfig::from_area(Rect::new(0, 0, 3, 2));
        assert_eq!(config.column_width, 0);
        assert_eq!(config.column_height, 0);
    }

    #[test]
    fn columns_sit_side_by_side() {
        let area = Rect::new(0, 0, 100, 40);
        let config = BoardConfig::from_area(area);
        assert_eq!(config.column_area(area, 0), Rect::new(0, 0, 25, 36));
        assert_eq!(config.column_area(area, 2), Rect::new(50, 0, 25, 36));
    }
}
