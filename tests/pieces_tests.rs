//! Piece geometry tests - shape matrices and rotation

use blockfall::core::{cells_of, get_shape, lock_points, render_color, rotate_cw};
use blockfall::types::PieceKind;

#[test]
fn test_four_rotations_restore_every_shape() {
    for kind in PieceKind::ALL {
        let original = get_shape(kind);
        let once = rotate_cw(&original);
        let twice = rotate_cw(&once);
        let thrice = rotate_cw(&twice);
        let full_circle = rotate_cw(&thrice);

        assert_eq!(full_circle, original, "kind {:?}", kind);
        // And no earlier power of the rotation is the identity for an
        // asymmetric shape like J
        if kind == PieceKind::J {
            assert_ne!(once, original);
            assert_ne!(twice, original);
            assert_ne!(thrice, original);
        }
    }
}

#[test]
fn test_rotation_moves_cells_clockwise() {
    // J: corner cell top-left ends up top-right after one turn
    let j = get_shape(PieceKind::J);
    assert_eq!(j, [[1, 0, 0], [1, 1, 1], [0, 0, 0]]);
    assert_eq!(rotate_cw(&j), [[0, 1, 1], [0, 1, 0], [0, 1, 0]]);
}

#[test]
fn test_cells_enumerate_in_row_major_order() {
    for kind in PieceKind::ALL {
        let cells = cells_of(&get_shape(kind));
        for pair in cells.windows(2) {
            let (c0, r0) = pair[0];
            let (c1, r1) = pair[1];
            assert!(
                r0 < r1 || (r0 == r1 && c0 < c1),
                "cells of {:?} out of scan order: {:?}",
                kind,
                cells
            );
        }
    }
}

#[test]
fn test_lock_points_table() {
    assert_eq!(lock_points(PieceKind::I), 40);
    assert_eq!(lock_points(PieceKind::T), 60);
    assert_eq!(lock_points(PieceKind::S), 80);
    assert_eq!(lock_points(PieceKind::Z), 80);
    assert_eq!(lock_points(PieceKind::J), 60);
    assert_eq!(lock_points(PieceKind::L), 60);
}

#[test]
fn test_render_colors_are_distinct() {
    let colors: Vec<u32> = PieceKind::ALL.iter().map(|&k| render_color(k)).collect();
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
