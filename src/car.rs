use std::fmt;

const LEFT_WING: &[&str] = &[
    r" ___________/--",
    r" ||||||||||||| ",
    r" |________/--| ",
    r" |            |",
];

const RIGHT_WING: &[&str] = &[
    r"--\___________ ",
    r"|||||||||||||| ",
    r"|--\_________| ",
    r"|            | ",
];

const TYRE: &[&str] = &[
    r" _____ ",
    r"|     |",
    r"|     |",
    r"|     |",
    r"|_____|",
];

const BODY: &[&str] = &[
    r"      /  \      ",
    r"     /    \     ",
    r"----/      \----",
    r"---/        \---",
    r"  /          \  ",
    r" /            \ ",
    r" |            | ",
    r" |            | ",
    r" |            | ",
    r" \            / ",
    r"  \          /  ",
    r"---|        |---",
    r"---|        |---",
    r"   |        |   ",
];

const REAR_WING: &[&str] = &[
    r"|------------------|",
    r"|------------------|",
    r"|------------------|",
];

/// How far the rear wing reaches left of the body.
pub const REAR_WING_INSET: u16 = 2;

/// Largest width or height accepted for a single block. Keeps every sum of
/// block extents in the layout well inside `u16`.
pub const MAX_BLOCK_EXTENT: usize = u8::MAX as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    MalformedComponent { component: &'static str },
    Oversized { component: &'static str },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::MalformedComponent { component } => {
                write!(f, "car component '{}' is not rectangular", component)
            }
            LayoutError::Oversized { component } => write!(
                f,
                "car component '{}' is larger than {} cells in some direction",
                component, MAX_BLOCK_EXTENT
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    LeftWing,
    RightWing,
    FrontLeftTyre,
    FrontRightTyre,
    BackLeftTyre,
    BackRightTyre,
    RearWing,
    Body,
}

impl Segment {
    pub const ALL: [Segment; 8] = [
        Segment::LeftWing,
        Segment::RightWing,
        Segment::FrontLeftTyre,
        Segment::FrontRightTyre,
        Segment::BackLeftTyre,
        Segment::BackRightTyre,
        Segment::RearWing,
        Segment::Body,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// A rectangular piece of ASCII art: every line has the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
    width: u16,
}

impl Block {
    pub fn new<S: AsRef<str>>(component: &'static str, lines: &[S]) -> Result<Block, LayoutError> {
        let malformed = || LayoutError::MalformedComponent { component };

        let first = lines.first().ok_or_else(malformed)?;
        let width = first.as_ref().chars().count();
        if width == 0 || lines.iter().any(|line| line.as_ref().chars().count() != width) {
            return Err(malformed());
        }

        if width > MAX_BLOCK_EXTENT || lines.len() > MAX_BLOCK_EXTENT {
            return Err(LayoutError::Oversized { component });
        }

        Ok(Block {
            lines: lines.iter().map(|line| line.as_ref().to_string()).collect(),
            width: width as u16,
        })
    }

    pub fn parse(component: &'static str, text: &str) -> Result<Block, LayoutError> {
        let lines: Vec<&str> = text.lines().collect();
        Block::new(component, &lines)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

/// The five distinct pieces of art; all four tyres share one block.
#[derive(Debug, Clone)]
pub struct CarBlocks {
    pub left_wing: Block,
    pub right_wing: Block,
    pub tyre: Block,
    pub body: Block,
    pub rear_wing: Block,
}

impl CarBlocks {
    pub fn builtin() -> Result<CarBlocks, LayoutError> {
        Ok(CarBlocks {
            left_wing: Block::new("left wing", LEFT_WING)?,
            right_wing: Block::new("right wing", RIGHT_WING)?,
            tyre: Block::new("tyre", TYRE)?,
            body: Block::new("body", BODY)?,
            rear_wing: Block::new("rear wing", REAR_WING)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn right(&self) -> u16 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[derive(Debug, Clone)]
struct Placement {
    block: Block,
    x: u16,
    y: u16,
}

/// The top-down car diagram. Origins are fixed at construction; only the
/// colouring changes at runtime.
#[derive(Debug, Clone)]
pub struct CarLayout {
    placements: Vec<Placement>,
}

impl CarLayout {
    pub fn new() -> Result<CarLayout, LayoutError> {
        Ok(CarLayout::from_blocks(CarBlocks::builtin()?))
    }

    pub fn from_blocks(blocks: CarBlocks) -> CarLayout {
        let CarBlocks { left_wing, right_wing, tyre, body, rear_wing } = blocks;

        let wing_height = left_wing.height().max(right_wing.height());
        let right_column = tyre.width() + body.width();

        let body_origin = (tyre.width(), wing_height);
        let front_y = wing_height;
        let back_y = (wing_height + body.height())
            .saturating_sub(tyre.height())
            .max(front_y + tyre.height());
        let rear_wing_y = (body_origin.1 + body.height()).max(back_y + tyre.height());
        let rear_wing_x = body_origin.0.saturating_sub(REAR_WING_INSET);

        let mut placements: Vec<Option<Placement>> = vec![None; Segment::ALL.len()];
        let mut place = |segment: Segment, block: Block, (x, y): (u16, u16)| {
            placements[segment.index()] = Some(Placement { block, x, y });
        };

        place(Segment::LeftWing, left_wing.clone(), (0, 0));
        place(Segment::RightWing, right_wing, (left_wing.width(), 0));
        place(Segment::FrontLeftTyre, tyre.clone(), (0, front_y));
        place(Segment::FrontRightTyre, tyre.clone(), (right_column, front_y));
        place(Segment::BackLeftTyre, tyre.clone(), (0, back_y));
        place(Segment::BackRightTyre, tyre, (right_column, back_y));
        place(Segment::Body, body, body_origin);
        place(Segment::RearWing, rear_wing, (rear_wing_x, rear_wing_y));

        CarLayout { placements: placements.into_iter().flatten().collect() }
    }

    pub fn origin(&self, segment: Segment) -> (u16, u16) {
        let placement = &self.placements[segment.index()];
        (placement.x, placement.y)
    }

    pub fn block(&self, segment: Segment) -> &Block {
        &self.placements[segment.index()].block
    }

    pub fn bounds(&self, segment: Segment) -> Rect {
        let placement = &self.placements[segment.index()];
        Rect {
            x: placement.x,
            y: placement.y,
            width: placement.block.width(),
            height: placement.block.height(),
        }
    }

    pub fn width(&self) -> u16 {
        Segment::ALL.iter().map(|&s| self.bounds(s).right()).max().unwrap_or(0)
    }

    pub fn height(&self) -> u16 {
        Segment::ALL.iter().map(|&s| self.bounds(s).bottom()).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_car_is_well_formed() {
        assert!(CarLayout::new().is_ok());
    }

    #[test]
    fn builtin_origins() {
        let car = CarLayout::new().unwrap();

        assert_eq!(car.origin(Segment::LeftWing), (0, 0));
        assert_eq!(car.origin(Segment::RightWing), (15, 0));
        assert_eq!(car.origin(Segment::Body), (7, 4));
        assert_eq!(car.origin(Segment::FrontLeftTyre), (0, 4));
        assert_eq!(car.origin(Segment::FrontRightTyre), (23, 4));
        assert_eq!(car.origin(Segment::BackLeftTyre), (0, 13));
        assert_eq!(car.origin(Segment::BackRightTyre), (23, 13));
        assert_eq!(car.origin(Segment::RearWing), (5, 18));
        assert_eq!((car.width(), car.height()), (30, 21));
    }

    #[test]
    fn ragged_block_is_rejected() {
        let err = Block::parse("body", "abc\nab\nabc").unwrap_err();
        assert_eq!(err, LayoutError::MalformedComponent { component: "body" });
        assert!(Block::parse("tyre", "").is_err());
    }

    #[test]
    fn oversized_block_is_rejected() {
        let wide = "#".repeat(40000);
        assert_eq!(
            Block::new("tyre", &[wide.as_str()]).unwrap_err(),
            LayoutError::Oversized { component: "tyre" }
        );

        let tall = vec!["#"; MAX_BLOCK_EXTENT + 1];
        assert_eq!(
            Block::new("body", &tall).unwrap_err(),
            LayoutError::Oversized { component: "body" }
        );

        let widest = "#".repeat(MAX_BLOCK_EXTENT);
        assert_eq!(Block::new("body", &[widest.as_str()]).unwrap().width() as usize, MAX_BLOCK_EXTENT);
    }

    #[test]
    fn largest_blocks_still_lay_out_without_overlap() {
        let line = "#".repeat(MAX_BLOCK_EXTENT);
        let lines = vec![line.as_str(); MAX_BLOCK_EXTENT];
        let block = |component| Block::new(component, &lines).unwrap();
        let car = CarLayout::from_blocks(CarBlocks {
            left_wing: block("left wing"),
            right_wing: block("right wing"),
            tyre: block("tyre"),
            body: block("body"),
            rear_wing: block("rear wing"),
        });

        for (i, &a) in Segment::ALL.iter().enumerate() {
            for &b in &Segment::ALL[i + 1..] {
                assert!(!car.bounds(a).overlaps(&car.bounds(b)), "{:?} overlaps {:?}", a, b);
            }
        }
        assert_eq!(car.width() as usize, 3 * MAX_BLOCK_EXTENT);
    }

    #[test]
    fn short_body_pushes_rear_tyres_down() {
        let blocks = CarBlocks {
            left_wing: Block::parse("left wing", "####\n####").unwrap(),
            right_wing: Block::parse("right wing", "###").unwrap(),
            tyre: Block::parse("tyre", "##\n##\n##").unwrap(),
            body: Block::parse("body", "#####\n#####").unwrap(),
            rear_wing: Block::parse("rear wing", "#########").unwrap(),
        };
        let car = CarLayout::from_blocks(blocks);

        assert_eq!(car.origin(Segment::FrontLeftTyre), (0, 2));
        assert_eq!(car.origin(Segment::BackLeftTyre), (0, 5));
        assert_eq!(car.origin(Segment::RearWing), (0, 8));
        assert!(!car.bounds(Segment::FrontLeftTyre).overlaps(&car.bounds(Segment::BackLeftTyre)));
    }
}
