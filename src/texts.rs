use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use rand::Rng;
use serde::Deserialize;
use serde_json::from_str;

static TEXT_DIR: Dir = include_dir!("src/texts");

/// Difficulty of the reference texts offered to the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse the lowercase name used in the config file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Passage {
    pub text: String,
}

/// Reference texts bundled with the binary, grouped by difficulty.
#[derive(Deserialize, Clone, Debug)]
pub struct TextBank {
    pub easy: Vec<Passage>,
    pub medium: Vec<Passage>,
    pub hard: Vec<Passage>,
}

impl TextBank {
    /// Load the embedded bank. The data file ships inside the binary, so a
    /// failure here is a build defect, not a runtime condition.
    pub fn load() -> Self {
        let file = TEXT_DIR
            .get_file("data.json")
            .expect("Text data file not found");

        let file_as_str = file
            .contents_utf8()
            .expect("Unable to interpret text data as a string");

        from_str(file_as_str).expect("Unable to deserialize text data json")
    }

    pub fn passages(&self, difficulty: Difficulty) -> &[Passage] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Pick a random reference text for the given difficulty.
    pub fn pick(&self, difficulty: Difficulty) -> String {
        let pool = self.passages(difficulty);
        let idx = rand::thread_rng().gen_range(0..pool.len());
        pool[idx].text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded_bank() {
        let bank = TextBank::load();

        assert!(!bank.easy.is_empty());
        assert!(!bank.medium.is_empty());
        assert!(!bank.hard.is_empty());
    }

    #[test]
    fn test_pick_returns_text_from_the_requested_pool() {
        let bank = TextBank::load();

        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let picked = bank.pick(difficulty);
            assert!(
                bank.passages(difficulty).iter().any(|p| p.text == picked),
                "picked text not in {difficulty} pool"
            );
        }
    }

    #[test]
    fn test_passages_are_nonempty_strings() {
        let bank = TextBank::load();

        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            for passage in bank.passages(difficulty) {
                assert!(!passage.text.trim().is_empty());
            }
        }
    }

    #[test]
    fn test_difficulty_from_name() {
        assert_eq!(Difficulty::from_name("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_name("medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_name("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_name("extreme"), None);
        assert_eq!(Difficulty::from_name("Easy"), None);
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }

    #[test]
    fn test_bank_deserialization_shape() {
        let json_data = r#"
        {
            "easy": [{ "text": "one" }],
            "medium": [{ "text": "two" }],
            "hard": [{ "text": "three" }]
        }
        "#;

        let bank: TextBank = from_str(json_data).expect("Failed to deserialize test bank");

        assert_eq!(bank.easy[0].text, "one");
        assert_eq!(bank.medium[0].text, "two");
        assert_eq!(bank.hard[0].text, "three");
    }
}
