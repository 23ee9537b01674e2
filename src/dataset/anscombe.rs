//! The Anscombe quartet, in the row order of the seaborn `anscombe.csv` table.

/// `(dataset, x, y)` rows of the quartet.
pub(super) const ANSCOMBE_ROWS: [(&str, f64, f64); 44] = [
    ("I", 10.0, 8.04),
    ("I", 8.0, 6.95),
    ("I", 13.0, 7.58),
    ("I", 9.0, 8.81),
    ("I", 11.0, 8.33),
    ("I", 14.0, 9.96),
    ("I", 6.0, 7.24),
    ("I", 4.0, 4.26),
    ("I", 12.0, 10.84),
    ("I", 7.0, 4.82),
    ("I", 5.0, 5.68),
    ("II", 10.0, 9.14),
    ("II", 8.0, 8.14),
    ("II", 13.0, 8.74),
    ("II", 9.0, 8.77),
    ("II", 11.0, 9.26),
    ("II", 14.0, 8.10),
    ("II", 6.0, 6.13),
    ("II", 4.0, 3.10),
    ("II", 12.0, 9.13),
    ("II", 7.0, 7.26),
    ("II", 5.0, 4.74),
    ("III", 10.0, 7.46),
    ("III", 8.0, 6.77),
    ("III", 13.0, 12.74),
    ("III", 9.0, 7.11),
    ("III", 11.0, 7.81),
    ("III", 14.0, 8.84),
    ("III", 6.0, 6.08),
    ("III", 4.0, 5.39),
    ("III", 12.0, 8.15),
    ("III", 7.0, 6.42),
    ("III", 5.0, 5.73),
    ("IV", 8.0, 6.58),
    ("IV", 8.0, 5.76),
    ("IV", 8.0, 7.71),
    ("IV", 8.0, 8.84),
    ("IV", 8.0, 8.47),
    ("IV", 8.0, 7.04),
    ("IV", 8.0, 5.25),
    ("IV", 19.0, 12.50),
    ("IV", 8.0, 5.56),
    ("IV", 8.0, 7.91),
    ("IV", 8.0, 6.89),
];
