//! Seven-segment glyph table.
//!
//! Segment order is A, B, C, D, E, F, G: A is the top bar, B and C run down
//! the right side, D is the bottom bar, E and F run up the left side and G is
//! the middle bar.

pub const SEGMENT_COUNT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Segment {
    pub const ALL: [Segment; SEGMENT_COUNT] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Bars (A, D, G) lie horizontally; the rest are vertical.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Segment::A | Segment::D | Segment::G)
    }
}

#[rustfmt::skip]
static GLYPHS: [[bool; SEGMENT_COUNT]; 10] = [
    //  A      B      C      D      E      F      G
    [true,  true,  true,  true,  true,  true,  false], // 0
    [false, true,  true,  false, false, false, false], // 1
    [true,  true,  false, true,  true,  false, true ], // 2
    [true,  true,  true,  true,  false, false, true ], // 3
    [false, true,  true,  false, false, true,  true ], // 4
    [true,  false, true,  true,  false, true,  true ], // 5
    [true,  false, true,  true,  true,  true,  true ], // 6
    [true,  true,  true,  false, false, false, false], // 7
    [true,  true,  true,  true,  true,  true,  true ], // 8
    [true,  true,  true,  true,  false, true,  true ], // 9
];

/// Whether `segment` (0 = A .. 6 = G) is lit for `digit`.
///
/// Anything outside `0..=9` / `0..=6` is unlit.
pub fn segment_on(digit: i32, segment: i32) -> bool {
    let (Ok(digit), Ok(segment)) = (usize::try_from(digit), usize::try_from(segment)) else {
        return false;
    };
    GLYPHS
        .get(digit)
        .and_then(|glyph| glyph.get(segment))
        .copied()
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_lights_everything() {
        assert!((0..7).all(|s| segment_on(8, s)));
    }

    #[test]
    fn one_is_the_right_side() {
        let lit: Vec<i32> = (0..7).filter(|s| segment_on(1, *s)).collect();
        assert_eq!(lit, vec![1, 2]);
    }

    #[test]
    fn seven_is_top_and_right() {
        let lit: Vec<i32> = (0..7).filter(|s| segment_on(7, *s)).collect();
        assert_eq!(lit, vec![0, 1, 2]);
    }

    #[test]
    fn zero_has_no_middle_bar() {
        assert!(!segment_on(0, Segment::G.index() as i32));
        assert!(segment_on(0, Segment::F.index() as i32));
    }

    #[test]
    fn out_of_range_is_unlit() {
        assert!(!segment_on(-1, 0));
        assert!(!segment_on(10, 0));
        assert!(!segment_on(8, -1));
        assert!(!segment_on(8, 7));
        assert!(!segment_on(i32::MIN, i32::MAX));
    }

    #[test]
    fn horizontal_bars() {
        let horizontal: Vec<Segment> = Segment::ALL
            .into_iter()
            .filter(|s| s.is_horizontal())
            .collect();
        assert_eq!(horizontal, vec![Segment::A, Segment::D, Segment::G]);
    }
}
