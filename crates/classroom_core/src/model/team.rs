//! In-memory sports team from the single-class lab.
//!
//! # Invariants
//! - `points` starts at 0 and only grows through `play_game`.
//! - Player membership is an exact, case-sensitive name match.

use serde::{Deserialize, Serialize};

const POINTS_PER_WIN: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    name: String,
    players: Vec<String>,
    coach: String,
    points: u32,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<String>, coach: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players,
            coach: coach.into(),
            points: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn coach(&self) -> &str {
        &self.coach
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_coach(&mut self, coach: impl Into<String>) {
        self.coach = coach.into();
    }

    pub fn add_player(&mut self, player: impl Into<String>) {
        self.players.push(player.into());
    }

    pub fn has_player(&self, player: &str) -> bool {
        self.players.iter().any(|current| current == player)
    }

    /// Records a game result. Only `"win"` (any casing) scores.
    pub fn play_game(&mut self, result: &str) {
        if result.eq_ignore_ascii_case("win") {
            self.points = self.points.saturating_add(POINTS_PER_WIN);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Team;

    fn crusaders() -> Team {
        Team::new(
            "CodeClan Crusaders",
            ["Beth", "Craig", "Matt", "Rick"]
                .into_iter()
                .map(String::from)
                .collect(),
            "Val Dryden",
        )
    }

    #[test]
    fn new_team_has_no_points() {
        let team = crusaders();
        assert_eq!(team.points(), 0);
        assert_eq!(team.players().len(), 4);
        assert_eq!(team.coach(), "Val Dryden");
    }

    #[test]
    fn coach_can_be_replaced() {
        let mut team = crusaders();
        team.set_coach("Keith");
        assert_eq!(team.coach(), "Keith");
    }

    #[test]
    fn added_player_is_a_member() {
        let mut team = crusaders();
        assert!(!team.has_player("Jeff"));
        team.add_player("Jeff");
        assert_eq!(team.players().len(), 5);
        assert!(team.has_player("Jeff"));
        assert!(team.has_player("Beth"));
    }

    #[test]
    fn only_wins_score_points() {
        let mut team = crusaders();
        team.play_game("lost");
        assert_eq!(team.points(), 0);

        team.play_game("WIN");
        team.play_game("win");
        assert_eq!(team.points(), 6);
    }

    #[test]
    fn padded_result_is_not_a_win() {
        let mut team = crusaders();
        team.play_game(" win ");
        assert_eq!(team.points(), 0);
    }

    #[test]
    fn points_stop_at_the_maximum() {
        let mut team = crusaders();
        team.points = u32::MAX - 1;
        team.play_game("win");
        assert_eq!(team.points(), u32::MAX);
    }
}
