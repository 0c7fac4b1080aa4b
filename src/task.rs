/// One of the three fixed board lanes, in screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Column {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Column {
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    pub fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Todo => "to do",
            Self::InProgress => "in progress",
            Self::Done => "done",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Todo => Self::InProgress,
            Self::InProgress => Self::Done,
            Self::Done => Self::Todo,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Todo => Self::Done,
            Self::InProgress => Self::Todo,
            Self::Done => Self::InProgress,
        }
    }
}

/// A single card on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub column: Column,
}

impl Task {
    pub fn new(title: impl Into<String>, description: impl Into<String>, column: Column) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            column,
        }
    }

    /// Text matched against the list filter
    pub fn filter_value(&self) -> &str {
        &self.title
    }
}
