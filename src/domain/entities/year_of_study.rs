use serde::{Deserialize, Serialize};

/// Year of study offered by the signup form.
///
/// The server stores `year_of_study` as free text; this enum only drives the
/// client-side select and its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum YearOfStudy {
    #[default]
    Freshman,
    Sophomore,
    Junior,
    Senior,
    Graduate,
}

impl YearOfStudy {
    pub const ALL: [YearOfStudy; 5] = [
        YearOfStudy::Freshman,
        YearOfStudy::Sophomore,
        YearOfStudy::Junior,
        YearOfStudy::Senior,
        YearOfStudy::Graduate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            YearOfStudy::Freshman => "Freshman",
            YearOfStudy::Sophomore => "Sophomore",
            YearOfStudy::Junior => "Junior",
            YearOfStudy::Senior => "Senior",
            YearOfStudy::Graduate => "Graduate",
        }
    }
}

impl std::fmt::Display for YearOfStudy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for YearOfStudy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        YearOfStudy::ALL
            .into_iter()
            .find(|year| year.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid year of study: {}", s))
    }
}
