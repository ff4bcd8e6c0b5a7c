use super::grid::{Board, Cell};
use crate::consts;
use ratatui::{buffer::Buffer, layout::Position, layout::Rect, style::Style};

/// The render surface the session draws through, one call per drawable item
/// in a fixed order per pass: clear, food, snake segments, optional game-over
/// text.  Keeping this behind a trait keeps the simulation step free of any
/// rendering concern.
pub(crate) trait Surface {
    /// Wipe the whole surface back to the board background.
    fn clear(&mut self);

    /// Draw `symbol` in the given board cell.
    fn fill_cell(&mut self, cell: Cell, symbol: char, style: Style);

    /// Patch `style` over whatever is already drawn in the given board cell.
    fn stroke_cell(&mut self, cell: Cell, style: Style);

    /// Draw a line of text centered on the given board cell.
    fn draw_text(&mut self, text: &str, center: Cell);
}

/// Maps board cells onto a rectangle of terminal cells, one glyph per board
/// cell.  Cells that fall outside the drawable area are clipped, matching the
/// canvas behavior for coordinates off the edge of the board.
#[derive(Debug)]
pub(crate) struct BufferSurface<'a> {
    area: Rect,
    board: Board,
    buf: &'a mut Buffer,
}

impl<'a> BufferSurface<'a> {
    pub(crate) fn new(area: Rect, board: Board, buf: &'a mut Buffer) -> BufferSurface<'a> {
        BufferSurface { area, board, buf }
    }

    fn position(&self, cell: Cell) -> Option<Position> {
        if cell.x < 0 || cell.y < 0 {
            return None;
        }
        let unit = self.board.unit();
        let col = u16::try_from(cell.x / unit).ok()?;
        let row = u16::try_from(cell.y / unit).ok()?;
        let x = self.area.x.checked_add(col)?;
        let y = self.area.y.checked_add(row)?;
        let pos = Position::new(x, y);
        self.area.contains(pos).then_some(pos)
    }
}

impl Surface for BufferSurface<'_> {
    fn clear(&mut self) {
        for pos in self.area.positions() {
            if let Some(cell) = self.buf.cell_mut(pos) {
                cell.set_char(' ');
                cell.set_style(consts::BOARD_STYLE);
            }
        }
    }

    fn fill_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        if let Some(pos) = self.position(cell) {
            if let Some(buf_cell) = self.buf.cell_mut(pos) {
                buf_cell.set_char(symbol);
                buf_cell.set_style(style);
            }
        }
    }

    fn stroke_cell(&mut self, cell: Cell, style: Style) {
        if let Some(pos) = self.position(cell) {
            if let Some(buf_cell) = self.buf.cell_mut(pos) {
                buf_cell.set_style(style);
            }
        }
    }

    fn draw_text(&mut self, text: &str, center: Cell) {
        let Some(pos) = self.position(center) else {
            return;
        };
        let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let start = pos.x.saturating_sub(width / 2);
        for (i, ch) in (0u16..).zip(text.chars()) {
            let Some(x) = start.checked_add(i) else {
                return;
            };
            let here = Position::new(x, pos.y);
            if !self.area.contains(here) {
                continue;
            }
            if let Some(buf_cell) = self.buf.cell_mut(here) {
                buf_cell.set_char(ch);
                buf_cell.set_style(consts::GAME_OVER_STYLE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_off_the_board_are_clipped() {
        let area = Rect::new(5, 5, 20, 10);
        let mut buf = Buffer::empty(area);
        let board = Board::new(40);
        let mut surface = BufferSurface::new(area, board, &mut buf);
        surface.clear();
        surface.fill_cell(Cell::new(-40, 0), 'x', Style::new());
        surface.fill_cell(Cell::new(0, -40), 'x', Style::new());
        surface.fill_cell(Cell::new(800, 0), 'x', Style::new());
        surface.fill_cell(Cell::new(0, 400), 'x', Style::new());
        assert!(buf.content().iter().all(|cell| cell.symbol() == " "));
    }

    #[test]
    fn fill_maps_cells_to_glyph_positions() {
        let area = Rect::new(5, 5, 20, 10);
        let mut buf = Buffer::empty(area);
        let board = Board::new(40);
        let mut surface = BufferSurface::new(area, board, &mut buf);
        surface.fill_cell(Cell::new(0, 0), 'a', Style::new());
        surface.fill_cell(Cell::new(760, 360), 'z', Style::new());
        assert_eq!(buf.cell((5, 5)).map(|c| c.symbol()), Some("a"));
        assert_eq!(buf.cell((24, 14)).map(|c| c.symbol()), Some("z"));
    }
}
