//! Player progression snapshot.

use serde::{Deserialize, Serialize};

use crate::progression::{experience_to_next, level_for, rank_for};

/// Display-only attribute scores. Nothing in the engine mutates these yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeScores {
    pub strength: u32,
    pub agility: u32,
    pub intelligence: u32,
    pub charisma: u32,
}

impl Default for AttributeScores {
    fn default() -> Self {
        Self {
            strength: 10,
            agility: 10,
            intelligence: 10,
            charisma: 10,
        }
    }
}

/// The user's progression state. `level`, `experience_to_next_level` and
/// `rank` are derived from `experience`; `grant_experience` keeps them in
/// sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub level: u32,
    pub experience: u32,
    pub experience_to_next_level: u32,
    /// Monotone: never decreased by any operation.
    pub total_experience: u32,
    pub rank: String,
    pub stats: AttributeScores,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            level: 1,
            experience: 0,
            experience_to_next_level: 100,
            total_experience: 0,
            rank: rank_for(1).to_string(),
            stats: AttributeScores::default(),
        }
    }
}

impl Player {
    /// Add experience and rederive level, remaining-to-next and rank.
    pub fn grant_experience(&mut self, amount: u32) {
        self.experience += amount;
        self.total_experience += amount;
        self.level = level_for(self.experience);
        self.experience_to_next_level = experience_to_next(self.experience);
        self.rank = rank_for(self.level).to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_player() {
        let p = Player::default();
        assert_eq!(p.level, 1);
        assert_eq!(p.experience_to_next_level, 100);
        assert_eq!(p.rank, "F-Rank Hunter");
        assert_eq!(p.stats.strength, 10);
    }

    #[test]
    fn test_grant_experience_rederives_fields() {
        let mut p = Player::default();
        p.grant_experience(250);
        assert_eq!(p.level, 3);
        assert_eq!(p.experience, 250);
        assert_eq!(p.total_experience, 250);
        assert_eq!(p.experience_to_next_level, 50);

        p.grant_experience(50);
        assert_eq!(p.level, 4);
        assert_eq!(p.experience_to_next_level, 100);
    }

    #[test]
    fn test_rank_updates_on_level_up() {
        let mut p = Player::default();
        p.grant_experience(900);
        assert_eq!(p.level, 10);
        assert_eq!(p.rank, "E-Rank Hunter");
    }
}
