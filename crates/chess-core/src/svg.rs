//! SVG board rendering.

use std::fmt::Write;

use shakmaty::{Board, Color, File, Piece, Rank, Role, Square};

const SQUARE_SIZE: u32 = 45;
const MARGIN: u32 = 20;
const LIGHT: &str = "#f0d9b5";
const DARK: &str = "#b58863";

fn glyph(piece: Piece) -> char {
    match (piece.color, piece.role) {
        (Color::White, Role::King) => '♔',
        (Color::White, Role::Queen) => '♕',
        (Color::White, Role::Rook) => '♖',
        (Color::White, Role::Bishop) => '♗',
        (Color::White, Role::Knight) => '♘',
        (Color::White, Role::Pawn) => '♙',
        (Color::Black, Role::King) => '♚',
        (Color::Black, Role::Queen) => '♛',
        (Color::Black, Role::Rook) => '♜',
        (Color::Black, Role::Bishop) => '♝',
        (Color::Black, Role::Knight) => '♞',
        (Color::Black, Role::Pawn) => '♟',
    }
}

/// Render `board` from White's point of view, with coordinates in the margin.
pub fn render_board(board: &Board) -> String {
    let size = SQUARE_SIZE * 8 + MARGIN * 2;
    let mut svg = String::with_capacity(16 * 1024);

    // Writing into a String cannot fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    let _ = writeln!(svg, r##"<rect width="{size}" height="{size}" fill="#312e2b"/>"##);

    for rank in 0..8u32 {
        for file in 0..8u32 {
            let square = Square::from_coords(File::new(file), Rank::new(rank));
            let x = MARGIN + file * SQUARE_SIZE;
            let y = MARGIN + (7 - rank) * SQUARE_SIZE;
            let fill = if (file + rank) % 2 == 0 { DARK } else { LIGHT };

            let _ = writeln!(
                svg,
                r#"<rect x="{x}" y="{y}" width="{SQUARE_SIZE}" height="{SQUARE_SIZE}" fill="{fill}"/>"#
            );

            if let Some(piece) = board.piece_at(square) {
                let _ = writeln!(
                    svg,
                    r#"<text x="{}" y="{}" font-size="38" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                    x + SQUARE_SIZE / 2,
                    y + SQUARE_SIZE / 2,
                    glyph(piece)
                );
            }
        }
    }

    for i in 0..8u32 {
        let file_label = char::from(b'a' + i as u8);
        let rank_label = char::from(b'1' + i as u8);
        let _ = writeln!(
            svg,
            r##"<text x="{}" y="{}" font-size="12" fill="#e0e0e0" text-anchor="middle">{file_label}</text>"##,
            MARGIN + i * SQUARE_SIZE + SQUARE_SIZE / 2,
            size - MARGIN / 3
        );
        let _ = writeln!(
            svg,
            r##"<text x="{}" y="{}" font-size="12" fill="#e0e0e0" text-anchor="middle" dominant-baseline="central">{rank_label}</text>"##,
            MARGIN / 2,
            MARGIN + (7 - i) * SQUARE_SIZE + SQUARE_SIZE / 2
        );
    }

    svg.push_str("</svg>\n");
    svg
}
