use minemark_core::{ActionOutcome, Board, CellView, Coord, GameSession};

pub fn glyph(view: CellView) -> char {
    match view {
        CellView::Closed => '#',
        CellView::MarkedSafe => '?',
        CellView::MarkedMine => 'F',
        CellView::Open(0) => ' ',
        CellView::Open(count) => char::from(b'0' + count),
        CellView::Mine => '*',
        CellView::Exploded => 'X',
    }
}

fn header(out: &mut String, cols: Coord) {
    out.push_str("   ");
    for col in 0..cols {
        out.push_str(&format!("{:>2}", col % 100));
    }
    out.push('\n');
}

/// Draws the session with row and column headers, one glyph per cell.
pub fn grid(session: &GameSession) -> String {
    let (rows, cols) = session.size();
    let mut out = String::new();
    header(&mut out, cols);
    for row in 0..rows {
        out.push_str(&format!("{row:>2} "));
        for col in 0..cols {
            out.push(' ');
            out.push(glyph(session.view_at((row, col))));
        }
        out.push('\n');
    }
    out
}

/// Diagnostic dump of the whole board: `*` before mines, then the neighbor count.
pub fn clue_grid(board: &Board) -> String {
    let (_, cols) = board.size();
    let mut out = String::new();
    header(&mut out, cols);
    for clue in board.clues() {
        let (row, col) = clue.coords;
        if col == 0 {
            out.push_str(&format!("{row:>2} "));
        }
        out.push(if clue.is_mine { '*' } else { ' ' });
        out.push_str(&clue.neighbor_count.to_string());
        if col + 1 == cols {
            out.push('\n');
        }
    }
    out
}

pub fn status(session: &GameSession) -> String {
    let (rows, cols) = session.size();
    let closed = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .filter(|&coords| session.view_at(coords).is_closed())
        .count();
    format!(
        "mines: {}  safe: {}  marked: {}  revealed: {}  closed: {}",
        session.total_mines(),
        session.board().safe_cell_count(),
        session.marked_count(),
        session.revealed_count(),
        closed
    )
}

pub fn outcome(outcome: ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Ignored => "Nothing to do there".to_string(),
        ActionOutcome::Marked(mark) => format!("Marked {mark:?}"),
        ActionOutcome::Revealed(report) if report.is_mine => {
            format!("Correct, mine at {:?}", report.coords)
        }
        ActionOutcome::Revealed(report) => format!("Safe, count {}", report.neighbor_count),
        ActionOutcome::GameLost(report) if report.is_mine => {
            format!("Boom, {:?} was a mine. You lost", report.coords)
        }
        ActionOutcome::GameLost(report) => {
            format!("{:?} was safe, not a mine. You lost", report.coords)
        }
    }
}
