use serde::{Deserialize, Serialize};

/// Spending category. Input is restricted to the fixed five; anything else
/// only arrives from a hand-edited store file and is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    Food,
    Transport,
    Bills,
    Shopping,
    Entertainment,
    Other(String),
}

static ALL: [Category; 5] = [
    Category::Food,
    Category::Transport,
    Category::Bills,
    Category::Shopping,
    Category::Entertainment,
];

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Bills => "Bills",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Other(name) => name,
        }
    }

    /// Parse one of the selectable categories (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "transport" => Some(Self::Transport),
            "bills" => Some(Self::Bills),
            "shopping" => Some(Self::Shopping),
            "entertainment" => Some(Self::Entertainment),
            _ => None,
        }
    }

    /// The selectable categories, in display order.
    pub fn all() -> &'static [Category] {
        &ALL
    }

    /// Step through `all()` by `delta`, wrapping. Unknown categories start at Food.
    pub fn cycle(&self, delta: isize) -> Category {
        let all = Self::all();
        let len = all.len() as isize;
        let pos = all.iter().position(|c| c == self).map_or(0, |p| p as isize);
        let next = (pos + delta).rem_euclid(len) as usize;
        all[next].clone()
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self::parse(&s).unwrap_or(Self::Other(s))
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        match c {
            Category::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
