//! Running score of the current stage.

use robowave_core::state::ScoreView;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreLedger {
    score: u32,
    shots_fired: u32,
    hits: u32,
    kills: u32,
}

impl ScoreLedger {
    pub fn record_shot(&mut self) {
        self.shots_fired += 1;
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_kill(&mut self, points: u32) {
        self.kills += 1;
        self.score = self.score.saturating_add(points);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.score,
            shots_fired: self.shots_fired,
            hits: self.hits,
            kills: self.kills,
        }
    }
}
