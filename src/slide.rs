/// The four fixed demo slides, in index order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Slide {
    #[default]
    Rectangle,
    Circle,
    Bezier,
    Word,
}

impl Slide {
    pub const ALL: [Slide; 4] = [Slide::Rectangle, Slide::Circle, Slide::Bezier, Slide::Word];

    /// Returns the slide at `index`, or None if there is no such slide
    pub fn from_index(index: i64) -> Option<Slide> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Slide::ALL.get(i).copied())
    }

    pub fn index(&self) -> usize {
        match self {
            Slide::Rectangle => 0,
            Slide::Circle => 1,
            Slide::Bezier => 2,
            Slide::Word => 3,
        }
    }
}
