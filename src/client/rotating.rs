use rand::Rng;

/// Headline words cycled on the landing page.
pub const HEADLINE_WORDS: &[&str] = &[
    "study buddy",
    "coffee addict",
    "night owl",
    "gym partner",
    "foodie friend",
    "adventure seeker",
    "creative soul",
    "future roommate",
    "ski buddy",
    "hiking buddy",
    "camper",
    "bandmate",
    "concert wingman",
    "diner buddy",
    "debater",
    "co-founder",
    "road trip copilot",
    "pickleball partner",
    "yoga buddy",
    "trivia mate",
    "karaoke buddy",
    "intramural teammate",
    "familiar stranger",
    "coffee companion",
    "study group partner",
    "lunch buddy",
    "movie night friend",
    "gaming partner",
    "travel companion",
    "fitness buddy",
    "creative collaborator",
];

/// Randomly rotating headline word. The caller drives the interval.
#[derive(Debug, Clone)]
pub struct RotatingWords {
    words: Vec<&'static str>,
    current: usize,
}

impl Default for RotatingWords {
    fn default() -> Self {
        Self {
            words: HEADLINE_WORDS.to_vec(),
            current: 0,
        }
    }
}

impl RotatingWords {
    /// Returns `None` for an empty word list.
    pub fn new(words: Vec<&'static str>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        Some(Self { words, current: 0 })
    }

    pub fn current(&self) -> &'static str {
        self.words[self.current]
    }

    /// Jumps to a uniformly random word other than the current one.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'static str {
        let len = self.words.len();
        if len > 1 {
            // Draw from the other len - 1 slots, skipping over the current one.
            let pick = rng.gen_range(0..len - 1);
            self.current = if pick >= self.current { pick + 1 } else { pick };
        }
        self.current()
    }
}
